use super::types::{
    Choice, FormField, InputType, ListingAccessory, ListingItem, TemplateContent,
};
use crate::{model::ReportType, utils::format::title_case_words};

pub fn report_preview(report_type: &str) -> TemplateContent {
    TemplateContent::Preview {
        heading: format!("Preview: {}", title_case_words(report_type)),
        summary: "This is a preview of the report that will be generated.".into(),
        sample: "Sample data will be displayed here...".into(),
    }
}

pub fn load_template_choices() -> TemplateContent {
    let choice = |value: &str, label: &str| Choice {
        value: value.into(),
        label: label.into(),
    };
    TemplateContent::Choices {
        heading: "Select Template".into(),
        name: "template".into(),
        options: vec![
            choice("weekly", "Weekly Summary"),
            choice("monthly", "Monthly Analytics"),
            choice("department", "Department Report"),
        ],
    }
}

pub fn new_template_form() -> TemplateContent {
    TemplateContent::form(vec![
        FormField::input_with_placeholder("Template Name", InputType::Text, "Enter template name"),
        FormField::text_area("Description", Some("Enter description"), None),
        FormField::select("Report Type", ReportType::ALL.iter().map(ReportType::label)),
    ])
}

pub fn edit_template_form(template_id: &str) -> TemplateContent {
    TemplateContent::form(vec![
        FormField::input_with_value("Template Name", InputType::Text, template_id),
        FormField::text_area("Description", None, Some("Template description")),
    ])
}

pub fn share_report_form(_report_id: &str) -> TemplateContent {
    TemplateContent::form(vec![
        FormField::input_with_placeholder("Email Address", InputType::Email, "Enter email address"),
        FormField::text_area("Message (Optional)", Some("Add a message"), None),
    ])
}

pub fn all_reports() -> TemplateContent {
    let report = |text: &str| ListingItem {
        text: text.into(),
        accessory: ListingAccessory::Download,
    };
    TemplateContent::Listing {
        heading: "All Generated Reports".into(),
        items: vec![
            report("Weekly Summary - Dec 8-14, 2024"),
            report("Room Utilization - November 2024"),
        ],
    }
}
