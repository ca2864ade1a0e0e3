use crate::model::ActivityEntry;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub icon: String,
    pub target: i64,
    pub suffix: String,
}

pub fn stats() -> Vec<DashboardStat> {
    let stat = |label: &str, icon: &str, target: i64, suffix: &str| DashboardStat {
        label: label.into(),
        icon: icon.into(),
        target,
        suffix: suffix.into(),
    };
    vec![
        stat("Total Rooms", "fas fa-door-open", 24, ""),
        stat("Active Bookings", "fas fa-calendar-check", 156, ""),
        stat("Registered Teachers", "fas fa-chalkboard-teacher", 48, ""),
        stat("Utilization Rate", "fas fa-chart-pie", 78, "%"),
    ]
}

fn activity(icon: &str, headline: &str, detail: &str, time: &str) -> ActivityEntry {
    ActivityEntry {
        icon: icon.into(),
        headline: headline.into(),
        detail: detail.into(),
        time: time.into(),
    }
}

/// Entries the live feed draws its synthetic updates from.
pub fn synthetic_activities() -> Vec<ActivityEntry> {
    vec![
        activity(
            "fas fa-calendar-check",
            "Room 301",
            "booked by Dr. Wilson for 3:00 PM - 5:00 PM",
            "Just now",
        ),
        activity(
            "fas fa-user-plus",
            "New teacher",
            "registered: Prof. Davis",
            "5 minutes ago",
        ),
        activity(
            "fas fa-tools",
            "Maintenance completed",
            "for Room 105",
            "10 minutes ago",
        ),
    ]
}

pub fn initial_activities() -> Vec<ActivityEntry> {
    vec![
        activity(
            "fas fa-calendar-plus",
            "Room 201",
            "booked by Dr. Sarah Smith for 2:00 PM - 4:00 PM",
            "2 minutes ago",
        ),
        activity(
            "fas fa-times-circle",
            "Booking #BK004",
            "cancelled by Prof. Michael Johnson",
            "1 hour ago",
        ),
        activity(
            "fas fa-tools",
            "Maintenance requested",
            "for Room 105: projector not working",
            "3 hours ago",
        ),
    ]
}
