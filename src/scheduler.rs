//! Deferred callback scheduling on a virtual clock
//!
//! Stands in for the host's timer queue. Tasks are plain values; whoever
//! owns the scheduler pops the due ones and runs them. Time only moves when
//! the owner asks it to, which keeps tests deterministic and lets the
//! terminal front end drive the clock from real elapsed time.
//!
//! There is no cancellation: once scheduled, a task will be handed back.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug)]
struct Timer<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Timer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Timer<T> {}

impl<T> PartialOrd for Timer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Timer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Timer queue ordered by due time, then by scheduling order
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Timer<T>>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Scheduler {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to become due `delay` after the current time
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let timer = Timer {
            due: self.now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(timer));
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its due time. Tasks scheduled by the caller in response are eligible
    /// on the next call if they also fall before `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let due = self.queue.peek()?.0.due;
        if due > until {
            return None;
        }
        let Reverse(timer) = self.queue.pop()?;
        self.now = self.now.max(timer.due);
        Some(timer.task)
    }

    /// Move the clock forward to `until` once nothing else is due
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_due_order_then_fifo() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), "late");
        scheduler.schedule(ms(50), "first");
        scheduler.schedule(ms(50), "second");

        assert_eq!(scheduler.pop_due(ms(40)), None);
        assert_eq!(scheduler.pop_due(ms(200)), Some("first"));
        assert_eq!(scheduler.now(), ms(50));
        assert_eq!(scheduler.pop_due(ms(200)), Some("second"));
        assert_eq!(scheduler.pop_due(ms(200)), Some("late"));
        assert_eq!(scheduler.pop_due(ms(200)), None);
        scheduler.settle(ms(200));
        assert_eq!(scheduler.now(), ms(200));
    }

    #[test]
    fn test_chained_tasks_are_relative_to_their_parent() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), 1);
        let mut fired = Vec::new();
        while let Some(n) = scheduler.pop_due(ms(350)) {
            fired.push((n, scheduler.now()));
            scheduler.schedule(ms(100), n + 1);
        }
        assert_eq!(fired, vec![(1, ms(100)), (2, ms(200)), (3, ms(300))]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.pop_due(ms(400)), Some(4));
    }
}
