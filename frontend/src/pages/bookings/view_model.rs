use leptos::*;
use std::time::Duration;

use super::repository;
use crate::{
    model::Booking,
    utils::{
        format::describe_date_range,
        scheduler::{Scheduler, TaskHandle},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableState {
    Loading,
    Ready(Vec<Booking>),
}

impl TableState {
    pub fn rows(&self) -> &[Booking] {
        match self {
            TableState::Loading => &[],
            TableState::Ready(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub start_date: String,
    pub end_date: String,
    pub room: String,
}

impl FilterCriteria {
    pub fn describe(&self) -> String {
        let room = if self.room.is_empty() {
            "all rooms"
        } else {
            self.room.as_str()
        };
        format!(
            "{} ({})",
            describe_date_range(&self.start_date, &self.end_date),
            room
        )
    }
}

#[derive(Clone, Copy)]
pub struct BookingFilterState {
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub room: RwSignal<String>,
}

impl Default for BookingFilterState {
    fn default() -> Self {
        Self {
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            room: create_rw_signal(String::new()),
        }
    }
}

impl BookingFilterState {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            room: self.room.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct BookingsViewModel {
    pub table: RwSignal<TableState>,
    pub filters: BookingFilterState,
    load_task: StoredValue<Option<TaskHandle>>,
}

impl Default for BookingsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingsViewModel {
    pub fn new() -> Self {
        Self {
            table: create_rw_signal(TableState::Ready(Vec::new())),
            filters: BookingFilterState::default(),
            load_task: store_value(None),
        }
    }

    /// Shows the loading row, then swaps in the mock list after `delay`.
    /// A populate still waiting from an earlier call is dropped.
    pub fn reload(&self, scheduler: &Scheduler, delay: Duration) {
        if let Some(previous) = self.load_task.get_value() {
            scheduler.cancel(previous);
        }
        self.table.set(TableState::Loading);
        let table = self.table;
        let handle = scheduler.set_timeout(delay, move || {
            table.set(TableState::Ready(repository::bookings()));
        });
        self.load_task.set_value(Some(handle));
    }

    /// Drops every row whose id matches. Returns how many were removed.
    pub fn remove(&self, booking_id: &str) -> usize {
        let mut removed = 0;
        self.table.update(|state| {
            if let TableState::Ready(rows) = state {
                let before = rows.len();
                rows.retain(|row| row.id.trim() != booking_id);
                removed = before - rows.len();
            }
        });
        removed
    }

    pub fn rows_untracked(&self) -> Vec<Booking> {
        self.table.with_untracked(|state| state.rows().to_vec())
    }
}
