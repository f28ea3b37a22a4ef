//! `WaitQueue` — FIFO backlog of trucks denied a charger slot.
//!
//! A truck appears at most once.  Membership is tracked in a dense `Vec<bool>`
//! indexed by `TruckId` so `push`/`contains` are O(1); `remove` is O(len) but
//! the queue never holds more than the fleet size.

use std::collections::VecDeque;

use fc_core::TruckId;

#[derive(Clone, Debug, Default)]
pub struct WaitQueue {
    inner:  VecDeque<TruckId>,
    queued: Vec<bool>,
}

impl WaitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size membership for a fleet of `count` trucks.
    pub fn with_fleet_size(count: usize) -> Self {
        Self {
            inner:  VecDeque::with_capacity(count),
            queued: vec![false; count],
        }
    }

    /// Append `truck` at the back.  Returns `false` if it was already queued.
    pub fn push(&mut self, truck: TruckId) -> bool {
        let i = truck.index();
        if i >= self.queued.len() {
            self.queued.resize(i + 1, false);
        }
        if self.queued[i] {
            return false;
        }
        self.queued[i] = true;
        self.inner.push_back(truck);
        true
    }

    /// Remove and return the truck that has waited longest.
    pub fn pop_front(&mut self) -> Option<TruckId> {
        let truck = self.inner.pop_front()?;
        self.queued[truck.index()] = false;
        Some(truck)
    }

    /// Put a truck back at the head (used when a dequeued truck could not be
    /// placed after all).
    pub fn push_front(&mut self, truck: TruckId) {
        if self.contains(truck) {
            return;
        }
        let i = truck.index();
        if i >= self.queued.len() {
            self.queued.resize(i + 1, false);
        }
        self.queued[i] = true;
        self.inner.push_front(truck);
    }

    pub fn front(&self) -> Option<TruckId> {
        self.inner.front().copied()
    }

    /// Drop `truck` from wherever it sits.  Returns `true` if it was queued.
    pub fn remove(&mut self, truck: TruckId) -> bool {
        if !self.contains(truck) {
            return false;
        }
        self.queued[truck.index()] = false;
        if let Some(pos) = self.inner.iter().position(|&t| t == truck) {
            self.inner.remove(pos);
        }
        true
    }

    #[inline]
    pub fn contains(&self, truck: TruckId) -> bool {
        self.queued.get(truck.index()).copied().unwrap_or(false)
    }

    /// `true` if nobody is ahead of `truck`: the queue is empty or `truck` is
    /// at its head.
    #[inline]
    pub fn is_next(&self, truck: TruckId) -> bool {
        self.inner.front().is_none_or(|&head| head == truck)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Queued trucks, head first.
    pub fn iter(&self) -> impl Iterator<Item = TruckId> + '_ {
        self.inner.iter().copied()
    }
}
