// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invalidation gate.
//!
//! Each entity carries one [`DirtyFlag`]. The first mutation after a render
//! pass sets the flag and registers the entity with the [`PassScheduler`];
//! every further mutation before the pass is a no-op. The flag is cleared
//! once per pass, after the entity has been drawn (or skipped because its
//! node is detached).

use crate::visual::EntityId;

/// The scheduler-facing side of a render pass.
///
/// Implemented by [`RenderQueue`](crate::queue::RenderQueue); tests and
/// embedders can supply their own.
pub trait PassScheduler {
    /// Asks for `id` to be drawn in the next pass.
    fn register_for_next_pass(&mut self, id: EntityId);
}

/// Per-entity pending-redraw flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyFlag {
    dirty: bool,
}

impl DirtyFlag {
    /// Creates a clean flag.
    #[must_use]
    pub const fn new() -> Self {
        Self { dirty: false }
    }

    /// Marks the entity dirty, registering it with `scheduler` if it was
    /// clean.
    ///
    /// Returns `true` if this call registered the entity.
    pub fn mark<S: PassScheduler + ?Sized>(&mut self, id: EntityId, scheduler: &mut S) -> bool {
        if self.dirty {
            return false;
        }
        self.dirty = true;
        scheduler.register_for_next_pass(id);
        true
    }

    /// Clears the flag after a pass.
    #[inline]
    pub fn clear(&mut self) {
        self.dirty = false;
    }

    /// Whether a redraw is pending.
    #[inline]
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }
}
