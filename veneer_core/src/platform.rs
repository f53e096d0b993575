// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform capability detection results.
//!
//! Backends probe the platform once and hand the result to the
//! [`Stage`](crate::stage::Stage). The values are read-only and assumed stable
//! for the lifetime of the process.

use alloc::format;
use alloc::string::String;

use crate::style::StyleChannel;

/// What the platform supports for node styling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Support {
    /// Whether 3D CSS transforms are available (`translate3d`, `rotateZ`).
    pub css3d_transform: bool,
    /// Vendor prefix in script notation (`Webkit`, `Moz`, `ms`, `O`), or empty
    /// when the platform needs no aliases.
    pub vendor_prefix: String,
}

impl Support {
    /// Creates a support record.
    #[must_use]
    pub fn new(css3d_transform: bool, vendor_prefix: impl Into<String>) -> Self {
        Self {
            css3d_transform,
            vendor_prefix: vendor_prefix.into(),
        }
    }

    /// Returns the vendor-prefixed alias of `channel` in CSS notation
    /// (`-webkit-transform`), if the channel has one and a prefix is set.
    #[must_use]
    pub fn vendor_alias(&self, channel: StyleChannel) -> Option<String> {
        if !channel.has_vendor_alias() || self.vendor_prefix.is_empty() {
            return None;
        }
        Some(format!(
            "-{}-{}",
            self.vendor_prefix.to_ascii_lowercase(),
            channel.css_name()
        ))
    }
}
