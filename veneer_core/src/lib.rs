// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty tracking and style diffing for retained display nodes.
//!
//! `veneer_core` keeps a retained display node (a DOM element, or anything
//! else implementing [`DisplayNode`](node::DisplayNode)) in sync with the
//! logical visual state of an entity, while writing as little as possible to
//! the node. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   Stage::set_*() ──► DirtyFlag::mark() ──► RenderQueue (pending set)
//!                                                  │
//!                 ┌────────────────────────────────┘
//!                 ▼
//!   Stage::render_pass() ──► NodeRenderer::draw() ──► DisplayNode writes
//!                                  │
//!                                  ▼
//!                        DrawnEvent ──► DrawListener
//! ```
//!
//! **[`stage`]**: Slot storage for entities with generational handles.
//! Every visual-state mutation goes through the invalidation gate; capability
//! changes go straight to the class synchronizer.
//!
//! **[`gate`]** / **[`queue`]**: Per-entity dirty flag and the explicit,
//! scheduler-facing pending set built on `understory_dirty`. Any number of
//! mutations between two passes cost one registration.
//!
//! **[`draw`]**: The per-entity renderer: composes the transform, diffs
//! every channel against the [`StyleCache`](style::StyleCache), writes only
//! what changed and reports a [`DrawnEvent`](draw::DrawnEvent).
//!
//! **[`compose`]**: Pure composition of the CSS transform expression.
//!
//! **[`style`]**: Channels, the style cache, property-name conversion and
//! unit suffixing.
//!
//! **[`class_list`]**: Capability sets mirrored onto the node's class list.
//!
//! **[`coords`]**: Screen-to-logical coordinate translation.
//!
//! **[`platform`]**: Platform capability detection results.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! render-pass instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-channel
//!   write events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod class_list;
pub mod compose;
pub mod coords;
pub mod draw;
pub mod gate;
pub mod node;
pub mod platform;
pub mod queue;
pub mod stage;
pub mod style;
pub mod trace;
pub mod visual;
