//! Indexed binary min-heap with decrease-key
//!
//! This module implements the priority queue behind Dijkstra's and Prim's
//! algorithms. A position map keyed by [`NodeId`] gives O(1) lookup of a
//! node's slot in the heap, which makes decrease-key an O(log n) sift
//! instead of a linear scan, and lets `push` transparently lower the
//! priority of an entry that is already queued.
//!
//! # Invariants
//!
//! After every public operation the array satisfies the min-heap order
//! (parent ≤ children) and the position map points at the slot currently
//! holding each queued node.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::graph::NodeId;

/// Errors raised by queue operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriorityQueueError {
    #[error("node {0} is outside the queue's capacity")]
    IdOutOfRange(NodeId),

    #[error("node {0} is not present in the queue")]
    NotPresent(NodeId),

    #[error("new priority for node {0} does not lower its current priority")]
    NotLower(NodeId),
}

/// What a [`push`] call did.
///
/// [`push`]: IndexedPriorityQueue::push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The node was not queued and has been inserted.
    Inserted,
    /// The node was queued with a higher priority, which has been lowered.
    Lowered,
    /// The node was queued with an equal or lower priority; nothing changed.
    Unchanged,
}

/// Operation counters in the style of the algorithm metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatistics {
    pub pushes: u64,
    pub pops: u64,
    pub decrease_keys: u64,
    pub comparisons: u64,
}

#[derive(Debug, Clone)]
struct Entry<P> {
    id: NodeId,
    priority: P,
}

/// Indexed binary min-heap over the dense node identifiers `0..capacity`.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<P> {
    heap: Vec<Entry<P>>,
    positions: Vec<Option<usize>>,
    stats: QueueStatistics,
}

impl<P: Ord> IndexedPriorityQueue<P> {
    /// Creates an empty queue able to hold the node identifiers
    /// `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            stats: QueueStatistics::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.positions
            .get(id.index())
            .map_or(false, Option::is_some)
    }

    pub fn statistics(&self) -> QueueStatistics {
        self.stats
    }

    /// Minimum entry without removing it.
    pub fn peek(&self) -> Option<(NodeId, &P)> {
        self.heap.first().map(|e| (e.id, &e.priority))
    }

    /// Inserts `id` with `priority`, or lowers its priority when the node is
    /// already queued with a higher one. Queued entries with an equal or
    /// lower priority are left untouched.
    pub fn push(&mut self, id: NodeId, priority: P) -> Result<PushOutcome, PriorityQueueError> {
        if id.index() >= self.positions.len() {
            return Err(PriorityQueueError::IdOutOfRange(id));
        }

        match self.positions[id.index()] {
            Some(slot) => {
                self.stats.comparisons += 1;
                if priority < self.heap[slot].priority {
                    self.heap[slot].priority = priority;
                    self.stats.decrease_keys += 1;
                    self.sift_up(slot);
                    Ok(PushOutcome::Lowered)
                } else {
                    Ok(PushOutcome::Unchanged)
                }
            }
            None => {
                let slot = self.heap.len();
                self.heap.push(Entry { id, priority });
                self.positions[id.index()] = Some(slot);
                self.stats.pushes += 1;
                self.sift_up(slot);
                Ok(PushOutcome::Inserted)
            }
        }
    }

    /// Lowers the priority of a queued node.
    pub fn decrease_key(&mut self, id: NodeId, priority: P) -> Result<(), PriorityQueueError> {
        if id.index() >= self.positions.len() {
            return Err(PriorityQueueError::IdOutOfRange(id));
        }
        let slot = self.positions[id.index()].ok_or(PriorityQueueError::NotPresent(id))?;

        self.stats.comparisons += 1;
        if priority >= self.heap[slot].priority {
            return Err(PriorityQueueError::NotLower(id));
        }

        self.heap[slot].priority = priority;
        self.stats.decrease_keys += 1;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the minimum entry.
    pub fn pop(&mut self) -> Option<(NodeId, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let root = self.heap.pop().map(|e| (e.id, e.priority));

        if let Some((id, _)) = root {
            self.positions[id.index()] = None;
            self.stats.pops += 1;
        }
        if !self.heap.is_empty() {
            self.positions[self.heap[0].id.index()] = Some(0);
            self.sift_down(0);
        }
        root
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            self.stats.comparisons += 1;
            if self.heap[slot].priority < self.heap[parent].priority {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < self.heap.len() {
                self.stats.comparisons += 1;
                if self.heap[left].priority < self.heap[smallest].priority {
                    smallest = left;
                }
            }
            if right < self.heap.len() {
                self.stats.comparisons += 1;
                if self.heap[right].priority < self.heap[smallest].priority {
                    smallest = right;
                }
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].id.index()] = Some(a);
        self.positions[self.heap[b].id.index()] = Some(b);
    }
}
