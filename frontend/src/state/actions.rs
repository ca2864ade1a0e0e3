use crate::{
    model::{room_number, ReportFormat, ReportType},
    router::Page,
    templates::FormTemplate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    AddNewRoom,
    CreateBooking,
    GenerateReport,
    SystemSettings,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::AddNewRoom,
        QuickAction::CreateBooking,
        QuickAction::GenerateReport,
        QuickAction::SystemSettings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::AddNewRoom => "Add New Room",
            QuickAction::CreateBooking => "Create Booking",
            QuickAction::GenerateReport => "Generate Report",
            QuickAction::SystemSettings => "System Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuickAction::AddNewRoom => "fas fa-plus-circle",
            QuickAction::CreateBooking => "fas fa-calendar-plus",
            QuickAction::GenerateReport => "fas fa-file-alt",
            QuickAction::SystemSettings => "fas fa-cog",
        }
    }

    /// Quick actions that leave the dashboard instead of opening a dialog.
    pub fn target_page(&self) -> Option<Page> {
        match self {
            QuickAction::AddNewRoom => Some(Page::Rooms),
            QuickAction::GenerateReport => Some(Page::Reports),
            QuickAction::CreateBooking | QuickAction::SystemSettings => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomAction {
    Edit,
    Schedule,
    Maintenance,
    Details,
}

impl RoomAction {
    pub const ALL: [RoomAction; 4] = [
        RoomAction::Edit,
        RoomAction::Schedule,
        RoomAction::Maintenance,
        RoomAction::Details,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomAction::Edit => "Edit",
            RoomAction::Schedule => "Schedule",
            RoomAction::Maintenance => "Maintenance",
            RoomAction::Details => "Details",
        }
    }

    pub fn template(&self, room: &str) -> FormTemplate {
        match self {
            RoomAction::Edit => FormTemplate::EditRoom {
                room_name: room.to_string(),
            },
            RoomAction::Schedule => FormTemplate::RoomSchedule {
                room_name: room.to_string(),
            },
            RoomAction::Maintenance => FormTemplate::Maintenance {
                room_name: room.to_string(),
            },
            RoomAction::Details => FormTemplate::RoomDetails {
                room_number: room_number(room).to_string(),
            },
        }
    }

    pub fn modal_title(&self, room: &str) -> String {
        match self {
            RoomAction::Edit => format!("Edit {room}"),
            RoomAction::Schedule => format!("{room} Schedule"),
            RoomAction::Maintenance => format!("{room} Maintenance"),
            RoomAction::Details => format!("{room} Details"),
        }
    }
}

/// Everything a button in the dashboard can ask the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    Quick(QuickAction),
    ApplyFilters,
    EditBooking(String),
    ViewBooking(String),
    DeleteBooking(String),
    ConfirmDelete,
    CancelDelete,
    Room { room: String, action: RoomAction },
    ToggleRoomStatus(String),
    GenerateReport {
        report_type: ReportType,
        format: ReportFormat,
    },
    UseTemplate(String),
    OpenForm(FormTemplate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_actions_title_their_modals() {
        assert_eq!(RoomAction::Edit.modal_title("Room 201"), "Edit Room 201");
        assert_eq!(
            RoomAction::Schedule.modal_title("Room 201"),
            "Room 201 Schedule"
        );
        assert_eq!(
            RoomAction::Maintenance.modal_title("Room 201"),
            "Room 201 Maintenance"
        );
        assert_eq!(RoomAction::Details.modal_title("Room 201"), "Room 201 Details");
    }

    #[test]
    fn details_template_uses_room_number() {
        assert_eq!(
            RoomAction::Details.template("Room 105"),
            FormTemplate::RoomDetails {
                room_number: "105".into()
            }
        );
    }

    #[test]
    fn only_navigation_quick_actions_have_targets() {
        let targets: Vec<_> = QuickAction::ALL
            .iter()
            .filter_map(QuickAction::target_page)
            .collect();
        assert_eq!(targets, vec![Page::Rooms, Page::Reports]);
    }
}
