use leptos::*;

use super::repository;
use crate::model::{Room, RoomStatus};

#[derive(Clone, Copy)]
pub struct RoomsViewModel {
    pub rooms: RwSignal<Vec<Room>>,
    /// Status badges only cycle once the room data has been loaded.
    pub status_toggle_enabled: RwSignal<bool>,
}

impl Default for RoomsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomsViewModel {
    pub fn new() -> Self {
        Self {
            rooms: create_rw_signal(repository::rooms()),
            status_toggle_enabled: create_rw_signal(false),
        }
    }

    pub fn load(&self) {
        self.rooms.set(repository::rooms());
        self.status_toggle_enabled.set(true);
    }

    /// Advances the named room to its next status. `None` when toggling is
    /// disabled or no room has that name.
    pub fn toggle_status(&self, room_name: &str) -> Option<RoomStatus> {
        if !self.status_toggle_enabled.get_untracked() {
            return None;
        }
        let mut updated = None;
        self.rooms.update(|rooms| {
            if let Some(room) = rooms.iter_mut().find(|room| room.name == room_name) {
                room.status = room.status.next();
                updated = Some(room.status);
            }
        });
        updated
    }
}
