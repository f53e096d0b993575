// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending set of entities awaiting the next render pass.
//!
//! [`RenderQueue`] is an explicitly constructed [`PassScheduler`]. It keeps
//! registrations in an [`understory_dirty`] tracker under a single
//! [`REDRAW`] channel, so a slot registered twice is still drained once.
//! There is no process-wide registry: whoever owns the queue decides when a
//! pass runs.

use alloc::vec::Vec;

use understory_dirty::{Channel, CycleHandling, DirtyTracker};

use crate::gate::PassScheduler;
use crate::visual::EntityId;

/// Entity registered for the next render pass.
pub const REDRAW: Channel = Channel::new(0);

/// The pending set for one scheduler.
#[derive(Debug)]
pub struct RenderQueue {
    pending: DirtyTracker<u32>,
    /// Generation of each slot at registration time.
    generations: Vec<u32>,
    len: usize,
    registrations: u64,
}

impl Default for RenderQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            generations: Vec::new(),
            len: 0,
            registrations: 0,
        }
    }

    /// Number of entities waiting for the next pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no entity is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total registrations since the queue was created.
    #[must_use]
    pub fn registrations(&self) -> u64 {
        self.registrations
    }

    /// Drops a pending registration, e.g. when the entity is removed.
    pub fn forget(&mut self, id: EntityId) {
        self.pending.remove_key(id.idx);
        self.len = self.len.saturating_sub(1);
    }

    /// Drains every pending entity in deterministic order, leaving the queue
    /// empty.
    pub fn take_pass(&mut self) -> Vec<EntityId> {
        let slots: Vec<u32> = self.pending.drain(REDRAW).deterministic().run().collect();
        self.len = 0;
        slots
            .into_iter()
            .map(|idx| EntityId {
                idx,
                generation: self.generations.get(idx as usize).copied().unwrap_or(0),
            })
            .collect()
    }
}

impl PassScheduler for RenderQueue {
    fn register_for_next_pass(&mut self, id: EntityId) {
        let slot = id.idx as usize;
        if self.generations.len() <= slot {
            self.generations.resize(slot + 1, 0);
        }
        self.generations[slot] = id.generation;
        self.pending.mark(id.idx, REDRAW);
        self.len += 1;
        self.registrations += 1;
    }
}
