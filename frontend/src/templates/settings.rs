use super::types::{FormField, InputType, TemplateContent};

pub fn settings_form(system_name: &str) -> TemplateContent {
    TemplateContent::form(vec![
        FormField::input_with_value("System Name", InputType::Text, system_name),
        FormField::input_with_value("Max Booking Duration (hours)", InputType::Number, "8"),
        FormField::checkbox("Auto-approve Bookings", true),
        FormField::checkbox("Email Notifications", true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::types::FieldControl;

    #[test]
    fn settings_form_prefills_system_name_and_toggles() {
        let form = settings_form("EduBook Admin");
        assert_eq!(
            form.fields()[0].control,
            FieldControl::Input {
                input_type: InputType::Text,
                placeholder: None,
                value: Some("EduBook Admin".into()),
            }
        );
        let checked = form
            .fields()
            .iter()
            .filter(|f| matches!(f.control, FieldControl::Checkbox { checked: true, .. }))
            .count();
        assert_eq!(checked, 2);
    }
}
