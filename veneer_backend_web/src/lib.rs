// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for veneer.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomNode`]: an `HtmlElement` implementing [`DisplayNode`]
//! - [`detect_support`]: probes 3D transform support and the vendor prefix
//! - [`FrameLoop`]: `requestAnimationFrame` driver for render passes
//! - [`inner_position`], [`computed_style`], [`document_scroll`],
//!   [`translate`]: element geometry and client-to-logical coordinates

#![no_std]

extern crate alloc;

mod dom;
mod frame;
mod geometry;
mod support;

pub use dom::DomNode;
pub use frame::{FrameInfo, FrameLoop};
pub use geometry::{
    computed_style, document_scroll, inner_position, set_pixel_art, translate, window_size,
};
pub use support::detect_support;
pub use veneer_core::node::DisplayNode;
