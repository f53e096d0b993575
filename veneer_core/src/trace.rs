// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for render passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Stage`](crate::stage::Stage) calls while running a render pass. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates [`ChannelWrite`] events and the
//!   corresponding `TraceSink` method.

use kurbo::Rect;

#[cfg(feature = "trace-rich")]
use crate::style::StyleChannel;
use crate::visual::EntityId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a render pass starts.
#[derive(Clone, Copy, Debug)]
pub struct PassBeginEvent {
    /// Monotonic pass counter.
    pub pass_index: u64,
    /// Entities drained from the queue for this pass.
    pub pending: usize,
}

/// Emitted after an entity was drawn.
#[derive(Clone, Copy, Debug)]
pub struct DrawEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// The entity that was drawn.
    pub entity: EntityId,
    /// Number of channels written (vendor aliases not counted).
    pub writes: u32,
    /// Logical bounding rectangle used for the pass.
    pub rect: Rect,
}

/// Why an entity selected for a pass was not drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The display node has no parent.
    Detached,
    /// The entity was removed after it was queued.
    Removed,
}

/// Emitted when an entity selected for a pass is skipped.
#[derive(Clone, Copy, Debug)]
pub struct DrawSkippedEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// The entity that was skipped.
    pub entity: EntityId,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Emitted when a render pass finishes.
#[derive(Clone, Copy, Debug)]
pub struct PassEndEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Entities drawn.
    pub drawn: usize,
    /// Entities skipped.
    pub skipped: usize,
}

/// A single channel write.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct ChannelWrite {
    /// Slot index of the entity.
    pub entity_index: u32,
    /// Which channel was written.
    pub channel: StyleChannel,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from render passes.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a pass starts.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called after an entity was drawn.
    fn on_draw(&mut self, e: &DrawEvent) {
        _ = e;
    }

    /// Called when an entity is skipped.
    fn on_draw_skipped(&mut self, e: &DrawSkippedEvent) {
        _ = e;
    }

    /// Called when a pass ends.
    fn on_pass_end(&mut self, e: &PassEndEvent) {
        _ = e;
    }

    /// Called with the channels written for one entity (requires
    /// `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_channel_writes(&mut self, pass_index: u64, writes: &[ChannelWrite]) {
        _ = (pass_index, writes);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DrawEvent`].
    #[inline]
    pub fn draw(&mut self, e: &DrawEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_draw(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DrawSkippedEvent`].
    #[inline]
    pub fn draw_skipped(&mut self, e: &DrawSkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_draw_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassEndEvent`].
    #[inline]
    pub fn pass_end(&mut self, e: &PassEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits per-entity channel writes.
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn channel_writes(&mut self, pass_index: u64, writes: &[ChannelWrite]) {
        if let Some(s) = &mut self.sink {
            s.on_channel_writes(pass_index, writes);
        }
    }
}
