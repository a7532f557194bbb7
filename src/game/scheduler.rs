//! Virtual-time task queue.
//!
//! The session never sleeps or reads a wall clock. Delayed work is queued
//! here with a deadline relative to the scheduler's own `now`, and the owner
//! drains due tasks with [`Scheduler::pop_due`] whenever time is fed in.
//!
//! # Invariants
//!
//! - `now` never goes backwards.
//! - A cancelled task never fires.
//! - Tasks due at the same instant fire in the order they were scheduled.

use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TaskId,
    due: Duration,
    period: Option<Duration>,
    task: T,
}

#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Scheduler {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn schedule_once(&mut self, delay: Duration, task: T) -> TaskId {
        self.push(delay, None, task)
    }

    /// Fires every `period`, first after one full period.
    pub fn schedule_repeating(&mut self, period: Duration, task: T) -> TaskId {
        let period = period.max(MIN_PERIOD);
        self.push(period, Some(period), task)
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry {
            id,
            due: self.now.saturating_add(delay),
            period,
            task,
        });
        id
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn deadline(&self, id: TaskId) -> Option<Duration> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.due)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Removes and returns the earliest task due at or before `until`,
    /// moving `now` up to its deadline. Repeating tasks are re-armed one
    /// period later instead of being removed.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskId, T)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(idx, _)| idx)?;

        self.now = self.now.max(self.entries[idx].due);

        match self.entries[idx].period {
            Some(period) => {
                let entry = &mut self.entries[idx];
                entry.due = entry.due.saturating_add(period);
                Some((entry.id, entry.task.clone()))
            }
            None => {
                let entry = self.entries.remove(idx);
                Some((entry.id, entry.task))
            }
        }
    }

    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain(scheduler: &mut Scheduler<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some((_, task)) = scheduler.pop_due(until) {
            fired.push(task);
        }
        scheduler.advance_to(until);
        fired
    }

    #[test]
    fn once_tasks_fire_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(ms(500), "late");
        scheduler.schedule_once(ms(100), "early");

        assert_eq!(drain(&mut scheduler, ms(99)), Vec::<&str>::new());
        assert_eq!(drain(&mut scheduler, ms(1000)), vec!["early", "late"]);
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.now(), ms(1000));
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(ms(10), "a");
        scheduler.schedule_once(ms(10), "b");
        scheduler.schedule_once(ms(10), "c");
        assert_eq!(drain(&mut scheduler, ms(10)), vec!["a", "b", "c"]);
    }

    #[test]
    fn repeating_task_rearms() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule_repeating(ms(1000), "tick");

        assert_eq!(drain(&mut scheduler, ms(3500)), vec!["tick", "tick", "tick"]);
        assert_eq!(scheduler.deadline(id), Some(ms(4000)));
        assert!(scheduler.is_pending(id));
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut scheduler = Scheduler::new();
        let hide = scheduler.schedule_once(ms(100), "hide");
        let tick = scheduler.schedule_repeating(ms(50), "tick");

        assert!(scheduler.cancel(hide));
        assert!(!scheduler.cancel(hide));
        assert_eq!(drain(&mut scheduler, ms(120)), vec!["tick", "tick"]);

        scheduler.cancel(tick);
        assert_eq!(drain(&mut scheduler, ms(10_000)), Vec::<&str>::new());
    }

    #[test]
    fn cancel_all_empties_the_queue() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(ms(1), "a");
        scheduler.schedule_repeating(ms(1), "b");
        scheduler.cancel_all();
        assert_eq!(scheduler.next_deadline(), None);
        assert_eq!(drain(&mut scheduler, ms(100)), Vec::<&str>::new());
    }

    #[test]
    fn delays_are_relative_to_now() {
        let mut scheduler: Scheduler<&str> = Scheduler::new();
        scheduler.advance_to(ms(2000));
        let id = scheduler.schedule_once(ms(500), "x");
        assert_eq!(scheduler.deadline(id), Some(ms(2500)));

        scheduler.advance_to(ms(100));
        assert_eq!(scheduler.now(), ms(2000));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule_repeating(Duration::ZERO, "spin");
        assert_eq!(scheduler.deadline(id), Some(MIN_PERIOD));
        assert_eq!(drain(&mut scheduler, ms(3)).len(), 3);
    }
}
