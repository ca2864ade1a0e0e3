use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBookings {
    pub day: String,
    pub height_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomUsage {
    pub room: String,
    pub percent: u8,
}

pub fn weekly_bookings() -> Vec<DailyBookings> {
    [("Mon", 65), ("Tue", 80), ("Wed", 45), ("Thu", 90), ("Fri", 70)]
        .into_iter()
        .map(|(day, height_percent)| DailyBookings {
            day: day.into(),
            height_percent,
        })
        .collect()
}

pub fn room_usage() -> Vec<RoomUsage> {
    [
        ("Room 201", 85),
        ("Room 105", 72),
        ("Room 301", 64),
        ("Room 102", 48),
    ]
    .into_iter()
    .map(|(room, percent)| RoomUsage {
        room: room.into(),
        percent,
    })
    .collect()
}
