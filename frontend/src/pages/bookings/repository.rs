use crate::model::{Booking, BookingStatus};

/// Rooms offered by the filter bar; the empty value means "all rooms".
pub const ROOM_FILTER_OPTIONS: &[(&str, &str)] = &[
    ("", "All Rooms"),
    ("Room 101", "Room 101"),
    ("Room 102", "Room 102"),
    ("Room 105", "Room 105"),
    ("Room 201", "Room 201"),
    ("Room 301", "Room 301"),
];

fn booking(
    id: &str,
    teacher: &str,
    room: &str,
    datetime: &str,
    duration: &str,
    status: BookingStatus,
) -> Booking {
    Booking {
        id: id.into(),
        teacher: teacher.into(),
        room: room.into(),
        datetime: datetime.into(),
        duration: duration.into(),
        status,
    }
}

pub fn bookings() -> Vec<Booking> {
    vec![
        booking(
            "#BK001",
            "Dr. Sarah Smith",
            "Room 201",
            "Dec 15, 2024 2:00 PM",
            "2 hours",
            BookingStatus::Confirmed,
        ),
        booking(
            "#BK002",
            "Prof. John Doe",
            "Room 105",
            "Dec 15, 2024 10:00 AM",
            "1.5 hours",
            BookingStatus::Pending,
        ),
        booking(
            "#BK003",
            "Dr. Emily Brown",
            "Room 301",
            "Dec 16, 2024 9:00 AM",
            "3 hours",
            BookingStatus::Confirmed,
        ),
        booking(
            "#BK004",
            "Prof. Michael Johnson",
            "Room 102",
            "Dec 16, 2024 1:00 PM",
            "2.5 hours",
            BookingStatus::Cancelled,
        ),
    ]
}
