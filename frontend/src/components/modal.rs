use leptos::*;

use crate::{
    components::forms::TemplateView,
    state::modal::{DismissReason, ModalBody, ModalStack, OpenModal},
};

const MODAL_STYLE: &str = "\
.modal { position: fixed; top: 0; left: 0; width: 100%; height: 100%; display: flex; \
align-items: center; justify-content: center; z-index: 2000; }
.modal-backdrop { position: absolute; inset: 0; border: none; background: rgba(0, 0, 0, 0.5); }
.modal-content { position: relative; background: white; border-radius: 12px; max-width: 500px; \
width: 90%; max-height: 80vh; overflow-y: auto; }
.modal-header { display: flex; justify-content: space-between; align-items: center; \
padding: 1.5rem; border-bottom: 1px solid #D2C1B6; }
.modal-header h3 { margin: 0; color: #1B3C53; }
.modal-close { background: none; border: none; font-size: 1.5rem; cursor: pointer; color: #666; }
.modal-body { padding: 1.5rem; }
.modal-footer { display: flex; gap: 1rem; justify-content: flex-end; padding: 1.5rem; \
border-top: 1px solid #D2C1B6; }";

fn modal_body(body: ModalBody) -> View {
    match body {
        ModalBody::Form(template) => view! { <TemplateView content=template.content()/> }.into_view(),
        ModalBody::Message(text) => view! { <p>{text}</p> }.into_view(),
    }
}

#[component]
pub fn ModalDialog(modal: OpenModal, stack: ModalStack) -> impl IntoView {
    let id = modal.id;
    let dismiss = Callback::new(move |reason: DismissReason| {
        stack.dismiss(id, reason);
    });

    // The backdrop is a sibling of the panel, so clicks inside the panel
    // never reach it.
    view! {
        <div
            class="modal"
            role="dialog"
            aria-modal="true"
        >
            <style>{MODAL_STYLE}</style>
            <button
                type="button"
                class="modal-backdrop"
                aria-label="Close"
                on:click=move |_| dismiss.call(DismissReason::Backdrop)
            ></button>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{modal.title}</h3>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| dismiss.call(DismissReason::CloseButton)
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-body">{modal_body(modal.body)}</div>
                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn-secondary modal-cancel"
                        on:click=move |_| dismiss.call(DismissReason::CancelButton)
                    >
                        "Cancel"
                    </button>
                    // Saving is not wired to anything yet.
                    <button type="button" class="btn-primary modal-save">
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ModalHost(stack: ModalStack) -> impl IntoView {
    let items = stack.items();
    view! {
        <For
            each=move || items.get()
            key=|modal| modal.id
            children=move |modal| view! { <ModalDialog modal=modal stack=stack.clone()/> }
        />
    }
}
