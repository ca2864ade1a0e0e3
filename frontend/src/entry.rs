//! Page-wide entry points for buttons that live outside any page view, such
//! as the header shortcuts. Each one delegates to the mounted controller and
//! only logs when there is none.

use crate::{
    state::{
        controller::DashboardController, modal::ModalBody, notifications::NotificationKind,
    },
    templates::FormTemplate,
};

pub fn show_create_booking_modal(controller: Option<&DashboardController>) {
    match controller {
        Some(controller) => {
            controller.show_modal(FormTemplate::CreateBooking.title(), FormTemplate::CreateBooking);
        }
        None => log::info!("Create booking modal requested"),
    }
}

pub fn show_settings_modal(controller: Option<&DashboardController>) {
    match controller {
        Some(controller) => {
            let template = controller.settings_template();
            controller.show_modal(template.title(), template);
        }
        None => log::info!("Settings modal requested"),
    }
}

pub fn show_modal(
    controller: Option<&DashboardController>,
    title: &str,
    body: impl Into<ModalBody>,
) {
    match controller {
        Some(controller) => {
            controller.show_modal(title, body);
        }
        None => log::info!("Modal requested: {}", title),
    }
}

pub fn show_notification(
    controller: Option<&DashboardController>,
    message: &str,
    kind: NotificationKind,
) {
    match controller {
        Some(controller) => {
            controller.notify(message, kind);
        }
        None => log::info!("Notification: {} {}", message, kind.as_class()),
    }
}
