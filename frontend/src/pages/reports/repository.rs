use crate::model::{ReportTemplate, ReportType};

fn template(name: &str, description: &str, report_type: ReportType) -> ReportTemplate {
    ReportTemplate {
        name: name.into(),
        description: description.into(),
        report_type,
    }
}

pub fn templates() -> Vec<ReportTemplate> {
    vec![
        template(
            "Weekly Summary",
            "Overview of bookings and room usage for the past week",
            ReportType::BookingSummary,
        ),
        template(
            "Monthly Analytics",
            "Utilization trends across all rooms for the month",
            ReportType::RoomUtilization,
        ),
        template(
            "Department Report",
            "Booking activity grouped by teacher and department",
            ReportType::TeacherActivity,
        ),
    ]
}

/// Recently generated reports listed under the builder.
pub fn recent_reports() -> Vec<(String, String)> {
    [
        ("RPT-1214", "Weekly Summary - Dec 8-14, 2024"),
        ("RPT-1130", "Room Utilization - November 2024"),
    ]
    .into_iter()
    .map(|(id, title)| (id.to_string(), title.to_string()))
    .collect()
}
