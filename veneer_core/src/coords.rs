// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-to-logical coordinate translation.
//!
//! Input events arrive in screen (client) coordinates. Converting them to the
//! logical space entities live in takes the stage's position on screen, the
//! document scroll offset and the current viewport into account:
//!
//! ```text
//! logical = (screen - stage_origin + scroll) / viewport.scale - viewport.offset
//! ```

use kurbo::{Point, Vec2};

/// The current view onto logical space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Logical offset of the view (the viewport's x/y).
    pub offset: Vec2,
    /// Zoom factor; 1.0 means one logical unit per pixel.
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Converts a screen-space point to logical coordinates.
///
/// `stage_origin` is the stage's top-left corner in screen space and
/// `scroll` is the document scroll offset.
#[must_use]
pub fn screen_to_logical(
    screen: Point,
    stage_origin: Point,
    scroll: Vec2,
    viewport: &Viewport,
) -> Point {
    Point::new(
        (screen.x - stage_origin.x + scroll.x) / viewport.scale - viewport.offset.x,
        (screen.y - stage_origin.y + scroll.y) / viewport.scale - viewport.offset.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_viewport_subtracts_stage_origin() {
        let p = screen_to_logical(
            Point::new(110.0, 60.0),
            Point::new(10.0, 10.0),
            Vec2::ZERO,
            &Viewport::default(),
        );
        assert_eq!(p, Point::new(100.0, 50.0));
    }

    #[test]
    fn scroll_scale_and_offset_apply_in_order() {
        let viewport = Viewport {
            offset: Vec2::new(5.0, -5.0),
            scale: 2.0,
        };
        let p = screen_to_logical(
            Point::new(50.0, 50.0),
            Point::new(10.0, 20.0),
            Vec2::new(10.0, 10.0),
            &viewport,
        );
        // ((50 - 10 + 10) / 2 - 5, (50 - 20 + 10) / 2 + 5)
        assert_eq!(p, Point::new(20.0, 25.0));
    }
}
