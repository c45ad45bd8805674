//! Virtual-time event queue
//!
//! Events are ordered by due time, then by scheduling order, so events due
//! at the same instant fire in the order they were queued.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug)]
struct Entry<E> {
    due: Duration,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        (self.due, self.seq) == (other.due, other.seq)
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<Entry<E>>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<E> Scheduler<E> {
    /// Current virtual time
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Queue `event` to fire `delay` after the current virtual time
    pub fn schedule_in(&mut self, delay: Duration, event: E) {
        let entry = Entry {
            due: self.now + delay,
            seq: self.seq,
            event,
        };
        self.seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Move virtual time forward and pop every event now due, in order
    pub fn advance(&mut self, elapsed: Duration) -> Vec<E> {
        self.now += elapsed;
        let mut due = Vec::new();
        while self
            .queue
            .peek()
            .is_some_and(|Reverse(entry)| entry.due <= self.now)
        {
            if let Some(Reverse(entry)) = self.queue.pop() {
                due.push(entry.event);
            }
        }
        due
    }

    /// Time until the next event fires, if any
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue
            .peek()
            .map(|Reverse(entry)| entry.due.saturating_sub(self.now))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending event
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_due_order() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule_in(ms(800), 'c');
        scheduler.schedule_in(ms(0), 'a');
        scheduler.schedule_in(ms(400), 'b');

        assert_eq!(scheduler.advance(ms(0)), vec!['a']);
        assert_eq!(scheduler.next_due(), Some(ms(400)));
        assert_eq!(scheduler.advance(ms(1000)), vec!['b', 'c']);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn same_instant_keeps_queue_order() {
        let mut scheduler = Scheduler::default();
        for n in 0..5 {
            scheduler.schedule_in(ms(100), n);
        }
        assert_eq!(scheduler.advance(ms(100)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn delay_is_relative_to_now() {
        let mut scheduler = Scheduler::default();
        scheduler.advance(ms(250));
        scheduler.schedule_in(ms(100), ());
        assert!(scheduler.advance(ms(99)).is_empty());
        assert_eq!(scheduler.advance(ms(1)).len(), 1);
        assert_eq!(scheduler.now(), ms(350));
    }

    #[test]
    fn clear_drops_pending() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule_in(ms(10), 1);
        scheduler.clear();
        assert!(scheduler.advance(ms(100)).is_empty());
        assert_eq!(scheduler.next_due(), None);
    }
}
