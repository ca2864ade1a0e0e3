use leptos::ev::KeyboardEvent;
use leptos::*;

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "btn-danger confirm-accept"
    } else {
        "btn-primary confirm-accept"
    };
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());
    let confirm_label_text = Signal::derive(move || {
        let text = confirm_label.get();
        if text.trim().is_empty() {
            "OK".to_string()
        } else {
            text
        }
    });
    let cancel_label_text = Signal::derive(move || {
        let text = cancel_label.get();
        if text.trim().is_empty() {
            "Cancel".to_string()
        } else {
            text
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <div class="modal confirm-dialog">
                <button
                    type="button"
                    aria-label="Close"
                    class="modal-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="modal-content"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <div class="modal-header">
                        <h3>{move || title_text.get()}</h3>
                    </div>
                    <div class="modal-body">
                        <p>{move || message_text.get()}</p>
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn-secondary confirm-cancel"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_label_text.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_button_class
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_default_labels_when_open() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Delete booking"
                    message="Are you sure you want to delete booking #BK001?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    destructive=true
                />
            }
        });
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("Are you sure you want to delete booking #BK001?"));
        assert!(html.contains("btn-danger"));
        assert!(html.contains("OK"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn renders_nothing_when_closed() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="Delete booking"
                    message="hidden"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("hidden"));
    }
}
