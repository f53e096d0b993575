// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity identity and logical visual state.

use core::fmt;

use kurbo::{Point, Rect};

/// A handle to an entity in a [`Stage`](crate::stage::Stage).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after an entity is removed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId {
    /// Slot index into the stage's arrays.
    pub(crate) idx: u32,
    /// Generation counter; must match the stage's generation for this slot.
    pub(crate) generation: u32,
}

impl EntityId {
    /// Creates a handle from raw parts.
    ///
    /// Only useful for driving a [`NodeRenderer`](crate::draw::NodeRenderer)
    /// outside a stage; the stage hands out its own handles.
    #[inline]
    #[must_use]
    pub const fn from_raw(idx: u32, generation: u32) -> Self {
        Self { idx, generation }
    }

    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({}@gen{})", self.idx, self.generation)
    }
}

/// An oriented bounding box.
///
/// Its presence means the entity is rotated about `origin`, so the draw pass
/// writes a transform origin and a rotation term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox {
    /// Rotation pivot, relative to the entity's top-left corner.
    pub origin: Point,
}

impl OrientedBox {
    /// Creates an oriented box rotating about `origin`.
    #[must_use]
    pub const fn new(origin: Point) -> Self {
        Self { origin }
    }
}

/// Logical transform and visual state of an entity.
///
/// Width and height are expected to be non-negative. Alpha is passed through
/// as-is; the node clamps it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Left edge in logical units.
    pub x: f64,
    /// Top edge in logical units.
    pub y: f64,
    /// Width in logical units.
    pub width: f64,
    /// Height in logical units.
    pub height: f64,
    /// Layering order.
    pub z: i32,
    /// Opacity, nominally `0.0..=1.0`.
    pub alpha: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Mirror horizontally.
    pub flip_x: bool,
    /// Mirror vertically.
    pub flip_y: bool,
    /// Whether the entity is shown.
    pub visible: bool,
    /// Present when the entity is rotated about an origin.
    pub oriented: Option<OrientedBox>,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            z: 0,
            alpha: 1.0,
            rotation: 0.0,
            flip_x: false,
            flip_y: false,
            visible: true,
            oriented: None,
        }
    }
}

impl VisualState {
    /// Returns the logical bounding rectangle `{x, y, w, h}`.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_visible_and_opaque() {
        let s = VisualState::default();
        assert!(s.visible);
        assert_eq!(s.alpha, 1.0);
        assert!(s.oriented.is_none());
    }

    #[test]
    fn rect_spans_position_and_size() {
        let s = VisualState {
            x: 5.0,
            y: 6.0,
            width: 10.0,
            height: 20.0,
            ..VisualState::default()
        };
        let r = s.rect();
        assert_eq!((r.x0, r.y0, r.width(), r.height()), (5.0, 6.0, 10.0, 20.0));
    }

    #[test]
    fn entity_id_debug() {
        let id = EntityId::from_raw(3, 1);
        assert_eq!(alloc::format!("{id:?}"), "EntityId(3@gen1)");
    }
}
