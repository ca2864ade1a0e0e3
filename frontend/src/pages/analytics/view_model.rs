use leptos::*;
use std::time::Duration;

use super::repository;
use crate::utils::scheduler::{Scheduler, TaskHandle};

const BAR_STAGGER: Duration = Duration::from_millis(200);
const FILL_STAGGER: Duration = Duration::from_millis(300);
const FILL_RESTORE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsBar {
    pub label: String,
    pub height_percent: u8,
    /// Bumped on every restart so the bar element is rebuilt and its CSS
    /// animation plays again.
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageFill {
    pub label: String,
    pub percent: u8,
    pub displayed: u8,
}

#[derive(Clone, Copy)]
pub struct AnalyticsViewModel {
    pub utilization: RwSignal<u8>,
    pub bars: RwSignal<Vec<AnalyticsBar>>,
    pub usage: RwSignal<Vec<UsageFill>>,
    tasks: StoredValue<Vec<TaskHandle>>,
}

impl Default for AnalyticsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsViewModel {
    pub fn new() -> Self {
        let bars = repository::weekly_bookings()
            .into_iter()
            .map(|day| AnalyticsBar {
                label: day.day,
                height_percent: day.height_percent,
                generation: 0,
            })
            .collect();
        let usage = repository::room_usage()
            .into_iter()
            .map(|room| UsageFill {
                label: room.room,
                percent: room.percent,
                displayed: room.percent,
            })
            .collect();
        Self {
            utilization: create_rw_signal(0),
            bars: create_rw_signal(bars),
            usage: create_rw_signal(usage),
            tasks: store_value(Vec::new()),
        }
    }

    /// Sets the utilization ring and replays the bar and usage animations,
    /// staggered by position.
    pub fn refresh(&self, scheduler: &Scheduler, utilization_percent: u8) {
        for handle in self.tasks.get_value() {
            scheduler.cancel(handle);
        }
        self.utilization.set(utilization_percent.min(100));

        let mut handles = Vec::new();
        let bar_count = self.bars.with_untracked(Vec::len);
        for index in 0..bar_count {
            let bars = self.bars;
            handles.push(scheduler.set_timeout(BAR_STAGGER * index as u32, move || {
                bars.update(|list| {
                    if let Some(bar) = list.get_mut(index) {
                        bar.generation = bar.generation.wrapping_add(1);
                    }
                });
            }));
        }

        let fill_count = self.usage.with_untracked(Vec::len);
        for index in 0..fill_count {
            let usage = self.usage;
            let clock = scheduler.clone();
            handles.push(scheduler.set_timeout(FILL_STAGGER * index as u32, move || {
                usage.update(|list| {
                    if let Some(fill) = list.get_mut(index) {
                        fill.displayed = 0;
                    }
                });
                clock.set_timeout(FILL_RESTORE_DELAY, move || {
                    usage.update(|list| {
                        if let Some(fill) = list.get_mut(index) {
                            fill.displayed = fill.percent;
                        }
                    });
                });
            }));
        }
        self.tasks.set_value(handles);
    }
}

/// Background of the utilization ring: the used share in the primary color,
/// the rest in the muted one.
pub fn conic_gradient(percent: u8) -> String {
    let degrees = f64::from(u32::from(percent.min(100)) * 36) / 10.0;
    format!("conic-gradient(#1B3C53 0deg {degrees}deg, #D2C1B6 {degrees}deg 360deg)")
}
