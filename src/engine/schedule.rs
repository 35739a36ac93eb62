//! Cancellable deferred tasks on a logical clock
//!
//! The round never sleeps. Deferred work (the once-per-second tick, hint and
//! error auto-clear, the delayed outcome reveal) is queued here with a due
//! time and fired when the owner advances the clock past it. Every queued
//! task has a handle that cancels it.

use std::time::Duration;

/// Deferred work a round can queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Tick,
    ClearHint,
    ClearError,
    RevealOutcome,
}

/// Handle to one queued task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Pending {
    handle: TaskHandle,
    due: Duration,
    task: Task,
}

/// Queue of pending tasks plus the current logical time
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time
    #[inline]
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to fire `delay` from now
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: self.now + delay,
            task,
        });
        handle
    }

    /// Cancel a queued task
    ///
    /// Returns the time it still had to wait, or `None` if it already fired
    /// or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<Duration> {
        let index = self.pending.iter().position(|p| p.handle == handle)?;
        let pending = self.pending.remove(index);
        Some(pending.due.saturating_sub(self.now))
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Time until the earliest pending task
    #[must_use]
    pub fn time_to_next(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due.saturating_sub(self.now))
            .min()
    }

    /// Remove and return the earliest task due at or before `until`
    ///
    /// The clock moves to the task's due time. Tasks due at the same time
    /// come out in the order they were queued.
    pub fn pop_due(&mut self, until: Duration) -> Option<Task> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.handle.0))
            .map(|(i, _)| i)?;
        let pending = self.pending.remove(index);
        self.now = self.now.max(pending.due);
        Some(pending.task)
    }

    /// Move the clock forward to `time` without firing anything
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(2 * SEC, Task::ClearHint);
        scheduler.schedule(SEC, Task::Tick);

        assert_eq!(scheduler.pop_due(3 * SEC), Some(Task::Tick));
        assert_eq!(scheduler.now(), SEC);
        assert_eq!(scheduler.pop_due(3 * SEC), Some(Task::ClearHint));
        assert_eq!(scheduler.now(), 2 * SEC);
        assert_eq!(scheduler.pop_due(3 * SEC), None);
    }

    #[test]
    fn same_due_time_fires_in_queue_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(SEC, Task::ClearError);
        scheduler.schedule(SEC, Task::Tick);
        assert_eq!(scheduler.pop_due(SEC), Some(Task::ClearError));
        assert_eq!(scheduler.pop_due(SEC), Some(Task::Tick));
    }

    #[test]
    fn nothing_fires_before_due() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(SEC, Task::Tick);
        assert_eq!(scheduler.pop_due(Duration::from_millis(999)), None);
        assert_eq!(scheduler.time_to_next(), Some(SEC));
    }

    #[test]
    fn cancel_removes_task_and_reports_remaining() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(SEC, Task::Tick);
        scheduler.advance_to(Duration::from_millis(400));

        assert!(scheduler.is_pending(handle));
        assert_eq!(scheduler.cancel(handle), Some(Duration::from_millis(600)));
        assert!(!scheduler.is_pending(handle));
        assert_eq!(scheduler.cancel(handle), None);
        assert_eq!(scheduler.pop_due(10 * SEC), None);
    }

    #[test]
    fn delays_are_relative_to_now() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(5 * SEC);
        scheduler.schedule(SEC, Task::RevealOutcome);
        assert_eq!(scheduler.pop_due(5 * SEC), None);
        assert_eq!(scheduler.pop_due(6 * SEC), Some(Task::RevealOutcome));
    }
}
