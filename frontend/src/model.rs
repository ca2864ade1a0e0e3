use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::utils::format::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Confirmed,
        BookingStatus::Pending,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub teacher: String,
    pub room: String,
    pub datetime: String,
    pub duration: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 3] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }

    /// available -> occupied -> maintenance -> available
    pub fn next(self) -> Self {
        match self {
            RoomStatus::Available => RoomStatus::Occupied,
            RoomStatus::Occupied => RoomStatus::Maintenance,
            RoomStatus::Maintenance => RoomStatus::Available,
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown room status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub capacity: u32,
    pub equipment: Vec<String>,
    pub accessible: bool,
    pub status: RoomStatus,
}

/// Digits of a room name, e.g. `"201"` for `"Room 201"`.
pub fn room_number(name: &str) -> &str {
    name.rsplit_once(' ')
        .map(|(_, number)| number)
        .unwrap_or(name)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub icon: String,
    pub headline: String,
    pub detail: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    BookingSummary,
    RoomUtilization,
    TeacherActivity,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [
        ReportType::BookingSummary,
        ReportType::RoomUtilization,
        ReportType::TeacherActivity,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ReportType::BookingSummary => "booking-summary",
            ReportType::RoomUtilization => "room-utilization",
            ReportType::TeacherActivity => "teacher-activity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::BookingSummary => "Booking Summary",
            ReportType::RoomUtilization => "Room Utilization",
            ReportType::TeacherActivity => "Teacher Activity",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        ReportType::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportFormat {
    #[default]
    #[serde(rename = "PDF")]
    Pdf,
    Excel,
    #[serde(rename = "CSV")]
    Csv,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Pdf, ReportFormat::Excel, ReportFormat::Csv];

    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
            ReportFormat::Csv => "CSV",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        ReportFormat::ALL.into_iter().find(|f| f.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTemplate {
    pub name: String,
    pub description: String,
    pub report_type: ReportType,
}
