use leptos::*;

use crate::{
    components::{confirm_dialog::ConfirmDialog, modal::ModalHost, notification::NotificationHost},
    entry,
    router::Page,
    state::{actions::DashboardAction, controller::use_controller},
};

#[component]
pub fn Header() -> impl IntoView {
    let controller = use_controller();
    let nav = controller.nav;
    let current_page = controller.current_page;
    let system_name = controller.config().system_name.clone();

    #[cfg(target_arch = "wasm32")]
    {
        let handle = window_event_listener(ev::resize, move |_| {
            if let Some(width) = window().inner_width().ok().and_then(|w| w.as_f64()) {
                nav.handle_resize(width);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let open_settings = {
        let controller = controller.clone();
        move |_| entry::show_settings_modal(Some(&controller))
    };

    view! {
        <header class=move || nav.header_class()>
            <div class="header-content">
                <div class="logo">
                    <i class="fas fa-graduation-cap"></i>
                    <span>{system_name}</span>
                </div>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-controls="primary-nav"
                    aria-expanded=move || nav.is_open().to_string()
                    on:click=move |_| nav.toggle()
                >
                    <span class="sr-only">
                        {move || if nav.is_open() { "Close menu" } else { "Open menu" }}
                    </span>
                    <i class=move || if nav.is_open() { "fas fa-times" } else { "fas fa-bars" }></i>
                </button>
                <nav id="primary-nav" class="nav-menu">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            let class = move || {
                                if current_page.get() == Some(page) {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                }
                            };
                            view! {
                                <a href=page.path() class=class on:click=move |_| nav.close()>
                                    {page.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    type="button"
                    class="header-settings"
                    aria-label="System Settings"
                    on:click=open_settings
                >
                    <i class="fas fa-cog"></i>
                </button>
            </div>
        </header>
    }
}

/// Shared page chrome: header, the overlay hosts and the delete confirmation.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let controller = use_controller();
    let pending_delete = controller.pending_delete;
    let confirm_open = Signal::derive(move || pending_delete.with(Option::is_some));
    let confirm_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|id| format!("Are you sure you want to delete booking {id}?"))
            .unwrap_or_default()
    });
    let on_confirm = {
        let controller = controller.clone();
        Callback::new(move |_| controller.dispatch(DashboardAction::ConfirmDelete))
    };
    let on_cancel = {
        let controller = controller.clone();
        Callback::new(move |_| controller.dispatch(DashboardAction::CancelDelete))
    };

    view! {
        <div class="admin-app">
            <Header/>
            <main class="main-content">{children()}</main>
            <NotificationHost center=controller.notifications.clone()/>
            <ModalHost stack=controller.modals.clone()/>
            <ConfirmDialog
                is_open=confirm_open
                title="Delete Booking"
                message=confirm_message
                confirm_label="Delete"
                on_confirm=on_confirm
                on_cancel=on_cancel
                destructive=true
            />
        </div>
    }
}
