use super::types::{
    detail, FormField, InputType, ListingAccessory, ListingItem, ScheduleSlot, TemplateContent,
};
use crate::model::RoomStatus;

pub fn add_room_form() -> TemplateContent {
    TemplateContent::form(vec![
        FormField::input_with_placeholder("Room Number", InputType::Text, "e.g., 201"),
        FormField::input_with_placeholder("Capacity", InputType::Number, "e.g., 30"),
        FormField::input_with_placeholder(
            "Equipment",
            InputType::Text,
            "e.g., Projector, Whiteboard",
        ),
        FormField::select("Accessibility", ["Yes", "No"]),
    ])
}

pub fn edit_room_form(room_name: &str) -> TemplateContent {
    TemplateContent::form(vec![
        FormField::input_with_value("Room Number", InputType::Text, room_name),
        FormField::input_with_value("Capacity", InputType::Number, "30"),
        FormField::select("Status", RoomStatus::ALL.iter().map(RoomStatus::label)),
    ])
}

pub fn room_schedule(room_name: &str) -> TemplateContent {
    let slot = |time: &str, booking: &str, available: bool| ScheduleSlot {
        time: time.into(),
        booking: booking.into(),
        available,
    };
    TemplateContent::Schedule {
        heading: format!("{room_name} Schedule for Today"),
        slots: vec![
            slot("9:00 AM", "Dr. Smith - Mathematics", false),
            slot("11:00 AM", "Available", true),
            slot("2:00 PM", "Prof. Johnson - Physics", false),
        ],
    }
}

pub fn maintenance_form(_room_name: &str) -> TemplateContent {
    TemplateContent::form(vec![
        FormField::select(
            "Issue Type",
            ["AC/Heating", "Projector", "Lighting", "Furniture", "Other"],
        ),
        FormField::text_area("Description", Some("Describe the issue..."), None),
        FormField::select("Priority", ["Low", "Medium", "High", "Urgent"]),
    ])
}

pub fn room_details(room_number: &str) -> TemplateContent {
    TemplateContent::Details {
        heading: format!("Room {room_number} Details"),
        rows: vec![
            detail("Capacity", "30"),
            detail("Equipment", "Projector, Whiteboard"),
            detail("Status", RoomStatus::Available.label()),
            detail("Last Maintenance", "2 weeks ago"),
        ],
    }
}

pub fn all_maintenance() -> TemplateContent {
    let record = |text: &str, class: &str, label: &str| ListingItem {
        text: text.into(),
        accessory: ListingAccessory::Status {
            class: class.into(),
            label: label.into(),
        },
    };
    TemplateContent::Listing {
        heading: "All Maintenance Records".into(),
        items: vec![
            record("Room 201 - AC repair completed", "completed", "Completed"),
            record("Room 105 - Projector not working", "pending", "Pending"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::types::FieldControl;

    #[test]
    fn edit_form_prefills_room_name() {
        let form = edit_room_form("Room 301");
        assert_eq!(
            form.fields()[0].control,
            FieldControl::Input {
                input_type: InputType::Text,
                placeholder: None,
                value: Some("Room 301".into()),
            }
        );
        assert_eq!(form.field_labels(), vec!["Room Number", "Capacity", "Status"]);
    }

    #[test]
    fn schedule_marks_free_slot() {
        let TemplateContent::Schedule { heading, slots } = room_schedule("Room 105") else {
            panic!("expected schedule");
        };
        assert_eq!(heading, "Room 105 Schedule for Today");
        assert_eq!(slots.iter().filter(|s| s.available).count(), 1);
    }

    #[test]
    fn maintenance_form_lists_priorities() {
        let form = maintenance_form("Room 101");
        assert_eq!(form.field_labels(), vec!["Issue Type", "Description", "Priority"]);
    }

    #[test]
    fn add_room_form_asks_for_accessibility() {
        let form = add_room_form();
        assert_eq!(
            form.fields()[3].control,
            FieldControl::Select {
                options: vec!["Yes".into(), "No".into()]
            }
        );
    }
}
