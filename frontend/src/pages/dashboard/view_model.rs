use leptos::*;
use std::{collections::VecDeque, time::Duration};

use super::repository::{self, DashboardStat};
use crate::{
    model::ActivityEntry,
    utils::scheduler::{Scheduler, TaskControl, TaskHandle, FRAME_INTERVAL},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCounter {
    pub stat: DashboardStat,
    pub displayed: i64,
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats: RwSignal<Vec<StatCounter>>,
    pub activities: RwSignal<VecDeque<ActivityEntry>>,
    count_up_tasks: StoredValue<Vec<TaskHandle>>,
    feed_task: StoredValue<Option<TaskHandle>>,
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let stats = repository::stats()
            .into_iter()
            .map(|stat| StatCounter {
                displayed: stat.target,
                stat,
            })
            .collect();
        Self {
            stats: create_rw_signal(stats),
            activities: create_rw_signal(repository::initial_activities().into()),
            count_up_tasks: store_value(Vec::new()),
            feed_task: store_value(None),
        }
    }

    /// Resets every counter to zero and animates it back up to its target.
    pub fn start_count_up(&self, scheduler: &Scheduler, duration: Duration) {
        for handle in self.count_up_tasks.get_value() {
            scheduler.cancel(handle);
        }
        self.stats
            .update(|list| list.iter_mut().for_each(|counter| counter.displayed = 0));

        let count = self.stats.with_untracked(Vec::len);
        let handles = (0..count)
            .map(|index| {
                let stats = self.stats;
                let clock = scheduler.clone();
                let started = scheduler.now();
                scheduler.set_interval(FRAME_INTERVAL, move || {
                    let elapsed = clock.now().saturating_sub(started);
                    let mut finished = true;
                    stats.update(|list| {
                        if let Some(counter) = list.get_mut(index) {
                            counter.displayed =
                                animate_number(0, counter.stat.target, elapsed, duration);
                            finished = elapsed >= duration;
                        }
                    });
                    if finished {
                        TaskControl::Done
                    } else {
                        TaskControl::Continue
                    }
                })
            })
            .collect();
        self.count_up_tasks.set_value(handles);
    }

    /// Prepends a synthetic entry every `interval`, rotating through the
    /// sample pool. Replaces any feed started earlier.
    pub fn start_activity_feed(&self, scheduler: &Scheduler, interval: Duration, capacity: usize) {
        if let Some(previous) = self.feed_task.get_value() {
            scheduler.cancel(previous);
        }
        let activities = self.activities;
        let pool = repository::synthetic_activities();
        let mut cursor = 0usize;
        let handle = scheduler.set_interval(interval, move || {
            if let Some(entry) = pool.get(cursor % pool.len().max(1)).cloned() {
                cursor += 1;
                activities.update(|feed| push_activity(feed, entry, capacity));
            }
            TaskControl::Continue
        });
        self.feed_task.set_value(Some(handle));
    }

    pub fn feed_task(&self) -> Option<TaskHandle> {
        self.feed_task.get_value()
    }
}

/// Linear count-up from `start` to `end`, floored like the displayed integer.
pub fn animate_number(start: i64, end: i64, elapsed: Duration, duration: Duration) -> i64 {
    if duration.is_zero() {
        return end;
    }
    let progress = (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0);
    (start as f64 + (end - start) as f64 * progress).floor() as i64
}

/// Newest first, never more than `capacity` entries.
pub fn push_activity(feed: &mut VecDeque<ActivityEntry>, entry: ActivityEntry, capacity: usize) {
    feed.push_front(entry);
    while feed.len() > capacity {
        feed.pop_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn animate_number_interpolates_linearly() {
        assert_eq!(animate_number(0, 100, ms(0), ms(1000)), 0);
        assert_eq!(animate_number(0, 100, ms(250), ms(1000)), 25);
        assert_eq!(animate_number(0, 156, ms(500), ms(1000)), 78);
        assert_eq!(animate_number(0, 7, ms(999), ms(1000)), 6);
        assert_eq!(animate_number(0, 100, ms(5000), ms(1000)), 100);
        assert_eq!(animate_number(0, 100, ms(10), Duration::ZERO), 100);
    }

    #[test]
    fn feed_is_bounded_and_newest_first() {
        let mut feed = VecDeque::new();
        for n in 0..12 {
            let entry = ActivityEntry {
                icon: "fas fa-bell".into(),
                headline: format!("event {n}"),
                detail: String::new(),
                time: "Just now".into(),
            };
            push_activity(&mut feed, entry, 5);
            assert!(feed.len() <= 5);
        }
        assert_eq!(feed.len(), 5);
        assert_eq!(feed.front().unwrap().headline, "event 11");
        assert_eq!(feed.back().unwrap().headline, "event 7");
    }

    #[test]
    fn count_up_reaches_targets_after_duration() {
        with_runtime(|| {
            let scheduler = Scheduler::new();
            let vm = DashboardViewModel::new();
            vm.start_count_up(&scheduler, ms(1000));
            assert!(vm.stats.get_untracked().iter().all(|c| c.displayed == 0));

            scheduler.advance(ms(500));
            let midway = vm.stats.get_untracked();
            assert!(midway
                .iter()
                .all(|c| c.displayed > 0 && c.displayed < c.stat.target));

            scheduler.advance(ms(520));
            assert!(vm
                .stats
                .get_untracked()
                .iter()
                .all(|c| c.displayed == c.stat.target));
            assert_eq!(scheduler.pending(), 0);
        });
    }

    #[test]
    fn restarting_feed_replaces_previous_interval() {
        with_runtime(|| {
            let scheduler = Scheduler::new();
            let vm = DashboardViewModel::new();
            vm.start_activity_feed(&scheduler, ms(30_000), 5);
            let first = vm.feed_task().unwrap();
            vm.start_activity_feed(&scheduler, ms(30_000), 5);
            assert!(!scheduler.is_scheduled(first));
            assert_eq!(scheduler.pending(), 1);

            scheduler.advance(ms(30_000));
            let feed = vm.activities.get_untracked();
            assert_eq!(feed.front().unwrap().headline, "Room 301");
            assert_eq!(feed.len(), 4);

            scheduler.advance(ms(30_000 * 10));
            assert_eq!(vm.activities.get_untracked().len(), 5);
        });
    }
}
