//! Deferred action queue
//!
//! Time ordered list of actions waiting for their fire time. The queue
//! knows nothing about what an action does; it only keeps them sorted and
//! hands out the ones that are due.

use embassy_time::{Duration, Instant};
use heapless::Vec;

/// Action paired with the time it becomes eligible to run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheduled<A> {
    pub fire_at: Instant,
    pub action: A,
}

/// Fixed capacity queue of deferred actions, sorted by fire time
///
/// N is the maximum number of pending actions.
/// Entries with equal fire times keep their scheduling order.
#[derive(Debug)]
pub struct ActionQueue<A, const N: usize> {
    inner: Vec<Scheduled<A>, N>,
}

impl<A, const N: usize> ActionQueue<A, N> {
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Schedule `action` to fire at an absolute time
    ///
    /// Returns the action if the queue is full.
    pub fn schedule_at(&mut self, fire_at: Instant, action: A) -> Result<(), A> {
        // After every entry with the same fire time, so ties stay FIFO
        let position = self
            .inner
            .iter()
            .position(|entry| entry.fire_at > fire_at)
            .unwrap_or(self.inner.len());

        self.inner
            .insert(position, Scheduled { fire_at, action })
            .map_err(|entry| entry.action)
    }

    /// Schedule `action` to fire `delay` after `now`
    ///
    /// Returns the action if the queue is full.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, action: A) -> Result<(), A> {
        self.schedule_at(fire_time(now, delay), action)
    }

    /// Pop the earliest entry if its fire time is strictly before `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<Scheduled<A>> {
        let first = self.inner.first()?;
        if first.fire_at < now {
            Some(self.inner.remove(0))
        } else {
            None
        }
    }

    /// Execute every due entry in order
    ///
    /// `execute` receives the queue back, so an action may schedule follow-up
    /// work. Follow-ups that are already due run in the same call.
    /// Returns the number of executed entries.
    pub fn drain<F>(&mut self, now: Instant, mut execute: F) -> usize
    where
        F: FnMut(&mut Self, Scheduled<A>),
    {
        drain_queue(self, |queue| queue, now, execute)
    }

    /// Fire time of the earliest entry
    pub fn next_fire_time(&self) -> Option<Instant> {
        self.inner.first().map(|entry| entry.fire_at)
    }

    /// Discard every entry without executing it
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate pending entries in firing order
    pub fn iter(&self) -> impl Iterator<Item = &Scheduled<A>> {
        self.inner.iter()
    }
}

impl<A, const N: usize> Default for ActionQueue<A, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// `now + delay`, saturating at the end of time
pub(crate) fn fire_time(now: Instant, delay: Duration) -> Instant {
    now.checked_add(delay).unwrap_or(Instant::MAX)
}

/// Execute every due entry of the queue reached through `queue`
///
/// `execute` gets the owner back, so it can reach the queue again to
/// schedule follow-ups. Returns the number of executed entries.
pub(crate) fn drain_queue<T, A, Q, F, const N: usize>(
    owner: &mut T,
    mut queue: Q,
    now: Instant,
    mut execute: F,
) -> usize
where
    Q: FnMut(&mut T) -> &mut ActionQueue<A, N>,
    F: FnMut(&mut T, Scheduled<A>),
{
    let mut executed = 0;
    while let Some(entry) = queue(owner).pop_due(now) {
        execute(owner, entry);
        executed += 1;
    }
    executed
}
