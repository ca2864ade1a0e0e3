use crate::model::{Room, RoomStatus};

fn room(
    name: &str,
    capacity: u32,
    equipment: &[&str],
    accessible: bool,
    status: RoomStatus,
) -> Room {
    Room {
        name: name.into(),
        capacity,
        equipment: equipment.iter().map(|item| item.to_string()).collect(),
        accessible,
        status,
    }
}

pub fn rooms() -> Vec<Room> {
    vec![
        room(
            "Room 101",
            30,
            &["Projector", "Whiteboard"],
            true,
            RoomStatus::Available,
        ),
        room(
            "Room 102",
            25,
            &["Whiteboard"],
            false,
            RoomStatus::Occupied,
        ),
        room(
            "Room 105",
            40,
            &["Projector", "Sound System"],
            true,
            RoomStatus::Maintenance,
        ),
        room(
            "Room 201",
            35,
            &["Smart Board", "Projector"],
            true,
            RoomStatus::Available,
        ),
        room(
            "Room 301",
            50,
            &["Projector", "Microphones", "Whiteboard"],
            true,
            RoomStatus::Occupied,
        ),
    ]
}
