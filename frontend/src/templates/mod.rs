//! Modal body providers. Each function returns a typed view-model that
//! `components::forms::TemplateView` renders.

pub mod booking;
pub mod report;
pub mod room;
pub mod settings;
pub mod types;

pub use types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTemplate {
    CreateBooking,
    EditBooking { booking_id: String },
    ViewBooking { booking_id: String },
    BulkActions,
    AddRoom,
    EditRoom { room_name: String },
    RoomSchedule { room_name: String },
    Maintenance { room_name: String },
    RoomDetails { room_number: String },
    AllMaintenance,
    Settings { system_name: String },
    ReportPreview { report_type: String },
    LoadTemplate,
    NewTemplate,
    EditTemplate { template_id: String },
    ShareReport { report_id: String },
    AllReports,
}

impl FormTemplate {
    pub fn content(&self) -> TemplateContent {
        match self {
            FormTemplate::CreateBooking => booking::create_booking_form(),
            FormTemplate::EditBooking { booking_id } => booking::edit_booking_form(booking_id),
            FormTemplate::ViewBooking { booking_id } => booking::view_booking_details(booking_id),
            FormTemplate::BulkActions => booking::bulk_actions_form(),
            FormTemplate::AddRoom => room::add_room_form(),
            FormTemplate::EditRoom { room_name } => room::edit_room_form(room_name),
            FormTemplate::RoomSchedule { room_name } => room::room_schedule(room_name),
            FormTemplate::Maintenance { room_name } => room::maintenance_form(room_name),
            FormTemplate::RoomDetails { room_number } => room::room_details(room_number),
            FormTemplate::AllMaintenance => room::all_maintenance(),
            FormTemplate::Settings { system_name } => settings::settings_form(system_name),
            FormTemplate::ReportPreview { report_type } => report::report_preview(report_type),
            FormTemplate::LoadTemplate => report::load_template_choices(),
            FormTemplate::NewTemplate => report::new_template_form(),
            FormTemplate::EditTemplate { template_id } => report::edit_template_form(template_id),
            FormTemplate::ShareReport { report_id } => report::share_report_form(report_id),
            FormTemplate::AllReports => report::all_reports(),
        }
    }

    /// Title used when the template is opened from a page button.
    pub fn title(&self) -> String {
        match self {
            FormTemplate::CreateBooking => "Create New Booking".into(),
            FormTemplate::EditBooking { booking_id } => format!("Edit Booking {booking_id}"),
            FormTemplate::ViewBooking { booking_id } => format!("Booking {booking_id}"),
            FormTemplate::BulkActions => "Bulk Actions".into(),
            FormTemplate::AddRoom => "Add New Room".into(),
            FormTemplate::EditRoom { room_name } => format!("Edit {room_name}"),
            FormTemplate::RoomSchedule { room_name } => format!("{room_name} Schedule"),
            FormTemplate::Maintenance { room_name } => format!("{room_name} Maintenance"),
            FormTemplate::RoomDetails { room_number } => format!("Room {room_number} Details"),
            FormTemplate::AllMaintenance => "Maintenance Records".into(),
            FormTemplate::Settings { .. } => "System Settings".into(),
            FormTemplate::ReportPreview { .. } => "Report Preview".into(),
            FormTemplate::LoadTemplate => "Load Template".into(),
            FormTemplate::NewTemplate => "New Template".into(),
            FormTemplate::EditTemplate { template_id } => format!("Edit Template {template_id}"),
            FormTemplate::ShareReport { report_id } => format!("Share Report {report_id}"),
            FormTemplate::AllReports => "All Reports".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_titles_follow_card_actions() {
        let name = "Room 201".to_string();
        assert_eq!(
            FormTemplate::EditRoom { room_name: name.clone() }.title(),
            "Edit Room 201"
        );
        assert_eq!(
            FormTemplate::RoomSchedule { room_name: name.clone() }.title(),
            "Room 201 Schedule"
        );
        assert_eq!(
            FormTemplate::Maintenance { room_name: name }.title(),
            "Room 201 Maintenance"
        );
    }

    #[test]
    fn settings_template_prefills_given_system_name() {
        let content = FormTemplate::Settings {
            system_name: "Campus Rooms".into(),
        }
        .content();
        assert_eq!(content.field_labels()[0], "System Name");
        assert_eq!(
            content.fields()[0].control,
            FieldControl::Input {
                input_type: InputType::Text,
                placeholder: None,
                value: Some("Campus Rooms".into()),
            }
        );
    }

    #[test]
    fn every_template_produces_content() {
        let templates = [
            FormTemplate::CreateBooking,
            FormTemplate::BulkActions,
            FormTemplate::AddRoom,
            FormTemplate::AllMaintenance,
            FormTemplate::Settings {
                system_name: "EduBook Admin".into(),
            },
            FormTemplate::LoadTemplate,
            FormTemplate::NewTemplate,
            FormTemplate::AllReports,
        ];
        for template in templates {
            let content = template.content();
            let empty = match &content {
                TemplateContent::Form { fields, .. } => fields.is_empty(),
                TemplateContent::Listing { items, .. } => items.is_empty(),
                TemplateContent::Choices { options, .. } => options.is_empty(),
                _ => false,
            };
            assert!(!empty, "{template:?} rendered nothing");
        }
    }
}
