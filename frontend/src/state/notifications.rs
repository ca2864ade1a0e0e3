use leptos::*;
use serde::{Deserialize, Serialize};
use std::{cell::Cell, rc::Rc, time::Duration};

use crate::utils::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
            NotificationKind::Info => "fas fa-info-circle",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#28a745",
            NotificationKind::Error => "#dc3545",
            NotificationKind::Info => "#17a2b8",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Toasts currently on screen. Each one removes itself after `ttl`.
#[derive(Clone)]
pub struct NotificationCenter {
    items: RwSignal<Vec<Notification>>,
    next_id: Rc<Cell<u64>>,
    scheduler: Scheduler,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(scheduler: Scheduler, ttl: Duration) -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: Rc::new(Cell::new(1)),
            scheduler,
            ttl,
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let message = message.into();
        log::info!("Notification [{}]: {}", kind.as_class(), message);

        self.items.update(|list| {
            list.push(Notification {
                id,
                message,
                kind,
            })
        });

        let items = self.items;
        self.scheduler.set_timeout(self.ttl, move || {
            items.update(|list| list.retain(|n| n.id != id));
        });
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Success)
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.get_untracked()
    }
}
