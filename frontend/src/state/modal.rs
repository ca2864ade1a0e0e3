use leptos::*;
use std::{cell::Cell, rc::Rc};

use crate::templates::{FormTemplate, TemplateContent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    Form(FormTemplate),
    Message(String),
}

impl ModalBody {
    pub fn content(&self) -> Option<TemplateContent> {
        match self {
            ModalBody::Form(template) => Some(template.content()),
            ModalBody::Message(_) => None,
        }
    }
}

impl From<FormTemplate> for ModalBody {
    fn from(template: FormTemplate) -> Self {
        ModalBody::Form(template)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    CancelButton,
    Backdrop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenModal {
    pub id: u64,
    pub title: String,
    pub body: ModalBody,
}

/// Open dialogs, oldest first. Opening while another is shown stacks a new
/// overlay on top; there is no singleton.
#[derive(Clone)]
pub struct ModalStack {
    items: RwSignal<Vec<OpenModal>>,
    next_id: Rc<Cell<u64>>,
}

impl Default for ModalStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStack {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: Rc::new(Cell::new(1)),
        }
    }

    pub fn open(&self, title: impl Into<String>, body: impl Into<ModalBody>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let title = title.into();
        log::debug!("Opening modal {} ({})", id, title);
        self.items.update(|list| {
            list.push(OpenModal {
                id,
                title,
                body: body.into(),
            })
        });
        id
    }

    /// Removes the overlay once. Returns false if it was already gone.
    pub fn dismiss(&self, id: u64, reason: DismissReason) -> bool {
        let mut removed = false;
        self.items.update(|list| {
            let before = list.len();
            list.retain(|modal| modal.id != id);
            removed = list.len() != before;
        });
        if removed {
            log::debug!("Closed modal {} via {:?}", id, reason);
        }
        removed
    }

    pub fn items(&self) -> Signal<Vec<OpenModal>> {
        self.items.into()
    }

    pub fn snapshot(&self) -> Vec<OpenModal> {
        self.items.get_untracked()
    }
}
