use std::{cell::RefCell, rc::Rc, time::Duration};

/// Interval used for count-up animation frames and for the browser driver.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskControl {
    Continue,
    Done,
}

enum TaskKind {
    Once(Box<dyn FnOnce()>),
    Repeating {
        period: Duration,
        callback: Box<dyn FnMut() -> TaskControl>,
    },
}

struct ScheduledTask {
    due: Duration,
    /// Tie-breaker among tasks due at the same instant; renewed on every re-arm.
    seq: u64,
    handle: TaskHandle,
    kind: TaskKind,
}

#[derive(Default)]
struct SchedulerInner {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    tasks: Vec<ScheduledTask>,
    running: Option<TaskHandle>,
    running_cancelled: bool,
}

impl SchedulerInner {
    fn push(&mut self, due: Duration, kind: TaskKind) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.enqueue(due, handle, kind);
        handle
    }

    fn enqueue(&mut self, due: Duration, handle: TaskHandle, kind: TaskKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(ScheduledTask {
            due,
            seq,
            handle,
            kind,
        });
    }

    fn take_next_due(&mut self, until: Duration) -> Option<ScheduledTask> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.seq))
            .map(|(index, _)| index)?;
        Some(self.tasks.swap_remove(index))
    }
}

/// Single-threaded timer queue on a virtual clock.
///
/// Nothing runs until the clock is advanced: tests call [`Scheduler::advance`]
/// directly, the browser build moves it forward from a `gloo-timers` interval
/// (see [`drive_with_browser_clock`]). Tasks may schedule or cancel other
/// tasks, including themselves, while they run.
#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn set_timeout(&self, delay: Duration, task: impl FnOnce() + 'static) -> TaskHandle {
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + delay;
        inner.push(due, TaskKind::Once(Box::new(task)))
    }

    /// Runs `task` every `period` until it returns [`TaskControl::Done`] or is
    /// cancelled. A zero period is treated as one millisecond.
    pub fn set_interval(
        &self,
        period: Duration,
        task: impl FnMut() -> TaskControl + 'static,
    ) -> TaskHandle {
        let period = period.max(Duration::from_millis(1));
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + period;
        inner.push(
            due,
            TaskKind::Repeating {
                period,
                callback: Box::new(task),
            },
        )
    }

    /// Returns true when a pending task was removed.
    pub fn cancel(&self, handle: TaskHandle) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.running == Some(handle) {
            inner.running_cancelled = true;
            return true;
        }
        let before = inner.tasks.len();
        inner.tasks.retain(|task| task.handle != handle);
        inner.tasks.len() != before
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.inner
            .borrow()
            .tasks
            .iter()
            .any(|task| task.handle == handle)
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Moves the clock forward, running every task that falls due on the way
    /// in due-time order (ties in scheduling order).
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let next = inner.take_next_due(target);
                if let Some(task) = next.as_ref() {
                    inner.now = task.due;
                    inner.running = Some(task.handle);
                    inner.running_cancelled = false;
                }
                next
            };
            let Some(task) = next else {
                break;
            };
            match task.kind {
                TaskKind::Once(callback) => {
                    callback();
                    self.finish_running();
                }
                TaskKind::Repeating {
                    period,
                    mut callback,
                } => {
                    let control = callback();
                    let cancelled = self.finish_running();
                    if control == TaskControl::Continue && !cancelled {
                        self.inner.borrow_mut().enqueue(
                            task.due + period,
                            task.handle,
                            TaskKind::Repeating { period, callback },
                        );
                    }
                }
            }
        }
        self.inner.borrow_mut().now = target;
    }

    pub fn advance_to(&self, instant: Duration) {
        let now = self.now();
        if instant > now {
            self.advance(instant - now);
        }
    }

    fn finish_running(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.running = None;
        std::mem::take(&mut inner.running_cancelled)
    }
}

/// Advances `scheduler` to wall-clock elapsed time on every animation frame
/// for the lifetime of the page.
#[cfg(target_arch = "wasm32")]
pub fn drive_with_browser_clock(scheduler: Scheduler) {
    let origin = js_sys::Date::now();
    let frame_ms = FRAME_INTERVAL.as_millis() as u32;
    gloo_timers::callback::Interval::new(frame_ms, move || {
        let elapsed = (js_sys::Date::now() - origin).max(0.0);
        scheduler.advance_to(Duration::from_millis(elapsed as u64));
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn timeout_fires_once_when_due() {
        let scheduler = Scheduler::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        scheduler.set_timeout(ms(1000), move || counter.set(counter.get() + 1));

        scheduler.advance(ms(999));
        assert_eq!(fired.get(), 0);
        scheduler.advance(ms(1));
        assert_eq!(fired.get(), 1);
        scheduler.advance(ms(5000));
        assert_eq!(fired.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn tasks_run_in_due_order_then_schedule_order() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (label, delay) in [("c", 300), ("a", 100), ("b", 100)] {
            let log = log.clone();
            scheduler.set_timeout(ms(delay), move || log.borrow_mut().push(label));
        }
        scheduler.advance(ms(300));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn rearmed_interval_queues_behind_earlier_timeout() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let ticks = log.clone();
        scheduler.set_interval(ms(10), move || {
            ticks.borrow_mut().push("interval");
            TaskControl::Continue
        });
        scheduler.advance(ms(5));
        let fired = log.clone();
        scheduler.set_timeout(ms(15), move || fired.borrow_mut().push("timeout"));

        // The second interval run is re-armed at t=10, after the timeout was
        // scheduled, and both fall due at t=20.
        scheduler.advance(ms(15));
        assert_eq!(*log.borrow(), vec!["interval", "timeout", "interval"]);
    }

    #[test]
    fn interval_repeats_until_done() {
        let scheduler = Scheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        scheduler.set_interval(ms(10), move || {
            counter.set(counter.get() + 1);
            if counter.get() == 3 {
                TaskControl::Done
            } else {
                TaskControl::Continue
            }
        });
        scheduler.advance(ms(100));
        assert_eq!(ticks.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let scheduler = Scheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = scheduler.set_timeout(ms(50), move || flag.set(true));
        assert!(scheduler.is_scheduled(handle));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        scheduler.advance(ms(100));
        assert!(!fired.get());
    }

    #[test]
    fn interval_can_cancel_itself_while_running() {
        let scheduler = Scheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let handle_slot: Rc<Cell<Option<TaskHandle>>> = Rc::new(Cell::new(None));
        let (counter, slot, inner) = (ticks.clone(), handle_slot.clone(), scheduler.clone());
        let handle = scheduler.set_interval(ms(10), move || {
            counter.set(counter.get() + 1);
            if let Some(handle) = slot.get() {
                inner.cancel(handle);
            }
            TaskControl::Continue
        });
        handle_slot.set(Some(handle));
        scheduler.advance(ms(100));
        assert_eq!(ticks.get(), 1);
        assert!(!scheduler.is_scheduled(handle));
    }

    #[test]
    fn tasks_scheduled_while_running_fire_in_same_advance() {
        let scheduler = Scheduler::new();
        let fired_at = Rc::new(Cell::new(None));
        let (inner, slot) = (scheduler.clone(), fired_at.clone());
        scheduler.set_timeout(ms(100), move || {
            let (clock, slot) = (inner.clone(), slot.clone());
            inner.set_timeout(ms(100), move || slot.set(Some(clock.now())));
        });
        scheduler.advance(ms(250));
        assert_eq!(fired_at.get(), Some(ms(200)));
        assert_eq!(scheduler.now(), ms(250));
    }

    #[test]
    fn advance_to_ignores_past_instants() {
        let scheduler = Scheduler::new();
        scheduler.advance(ms(40));
        scheduler.advance_to(ms(10));
        assert_eq!(scheduler.now(), ms(40));
        scheduler.advance_to(ms(64));
        assert_eq!(scheduler.now(), ms(64));
    }
}
