use leptos::*;

use crate::state::notifications::{Notification, NotificationCenter};

const TOAST_STYLE: &str = "\
.notification { position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
border-radius: 8px; color: white; font-weight: 500; display: flex; align-items: center; \
gap: 0.5rem; z-index: 3000; animation: slideIn 0.3s ease; }
.notification.success { background: #28a745; }
.notification.error { background: #dc3545; }
.notification.info { background: #17a2b8; }
@keyframes slideIn { from { transform: translateX(100%); } to { transform: translateX(0); } }";

#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let kind = notification.kind;
    view! {
        <div
            class=format!("notification {}", kind.as_class())
            role="status"
            style=format!("background: {};", kind.background())
        >
            <style>{TOAST_STYLE}</style>
            <i class=kind.icon_class()></i>
            <span>{notification.message}</span>
        </div>
    }
}

/// Stacks every live toast. A toast and its style leave the DOM together
/// when the center drops it.
#[component]
pub fn NotificationHost(center: NotificationCenter) -> impl IntoView {
    let items = center.items();
    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || items.get()
                key=|notification| notification.id
                children=|notification| view! { <Toast notification=notification/> }
            />
        </div>
    }
}
