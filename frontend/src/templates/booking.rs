use super::types::{detail, FieldControl, FormField, InputType, TemplateContent};
use crate::model::BookingStatus;

pub const TEACHER_OPTIONS: [&str; 3] = ["Dr. Sarah Smith", "Prof. John Doe", "Dr. Emily Brown"];
pub const ROOM_OPTIONS: [&str; 3] = ["Room 101", "Room 102", "Room 201"];

fn teacher_select() -> FormField {
    FormField::select("Teacher", TEACHER_OPTIONS)
}

fn room_select() -> FormField {
    FormField::select("Room", ROOM_OPTIONS)
}

pub fn create_booking_form() -> TemplateContent {
    TemplateContent::form(vec![
        teacher_select(),
        room_select(),
        FormField::input("Date", InputType::Date),
        FormField::input("Start Time", InputType::Time),
        FormField::input_with_placeholder("Duration (hours)", InputType::Number, "2"),
    ])
}

pub fn edit_booking_form(_booking_id: &str) -> TemplateContent {
    TemplateContent::form(vec![
        teacher_select(),
        room_select(),
        FormField::input("Date", InputType::Date),
        FormField::select(
            "Status",
            BookingStatus::ALL.iter().map(BookingStatus::label),
        ),
    ])
}

pub fn view_booking_details(booking_id: &str) -> TemplateContent {
    TemplateContent::Details {
        heading: format!("Booking Details for {booking_id}"),
        rows: vec![
            detail("Teacher", "Dr. Sarah Smith"),
            detail("Room", "Room 201"),
            detail("Date", "December 15, 2024"),
            detail("Time", "2:00 PM - 4:00 PM"),
            detail("Status", BookingStatus::Confirmed.label()),
        ],
    }
}

pub fn bulk_actions_form() -> TemplateContent {
    TemplateContent::Form {
        heading: Some("Bulk Actions".into()),
        fields: vec![
            FormField::select(
                "Action",
                [
                    "Approve Selected",
                    "Cancel Selected",
                    "Delete Selected",
                    "Export Selected",
                ],
            ),
            FormField {
                label: "Confirmation".into(),
                control: FieldControl::Checkbox {
                    checked: false,
                    required: true,
                    caption: Some("I understand this action will affect multiple items".into()),
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_has_scheduling_fields() {
        let form = create_booking_form();
        assert_eq!(
            form.field_labels(),
            vec!["Teacher", "Room", "Date", "Start Time", "Duration (hours)"]
        );
        assert_eq!(
            form.fields()[4].control,
            FieldControl::Input {
                input_type: InputType::Number,
                placeholder: Some("2".into()),
                value: None,
            }
        );
    }

    #[test]
    fn edit_form_offers_every_status() {
        let form = edit_booking_form("#BK001");
        let status = form.fields().last().unwrap();
        assert_eq!(
            status.control,
            FieldControl::Select {
                options: vec!["Confirmed".into(), "Pending".into(), "Cancelled".into()]
            }
        );
    }

    #[test]
    fn details_heading_names_booking() {
        match view_booking_details("#BK002") {
            TemplateContent::Details { heading, rows } => {
                assert_eq!(heading, "Booking Details for #BK002");
                assert_eq!(rows.len(), 5);
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn bulk_actions_requires_confirmation() {
        let form = bulk_actions_form();
        assert!(matches!(
            form.fields()[1].control,
            FieldControl::Checkbox { required: true, .. }
        ));
    }
}
