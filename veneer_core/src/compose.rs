// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of the CSS transform expression.
//!
//! [`compose_transform`] is a pure function of [`TransformInputs`]. It picks
//! between two forms:
//!
//! - **Accelerated**: 3D transforms are available and the entity has not
//!   opted out. Position becomes a `translate3d()` term with whole-pixel
//!   coordinates, and rotation uses `rotateZ()`.
//! - **Fallback**: Position is written through the separate `left`/`top`
//!   channels by the draw pass, so no translation term is produced. Rotation
//!   uses `rotate()`.
//!
//! Terms always appear in the order translate, rotate, horizontal mirror,
//! vertical mirror, joined by single spaces. An empty term list composes to
//! the empty string, which clears any previous transform.

use alloc::string::String;
use core::fmt::{self, Write as _};

/// Everything the transform expression depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformInputs {
    /// Left edge in logical units.
    pub x: f64,
    /// Top edge in logical units.
    pub y: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Mirror horizontally.
    pub flip_x: bool,
    /// Mirror vertically.
    pub flip_y: bool,
    /// Whether the platform supports 3D transforms.
    pub accelerated: bool,
    /// Whether the entity opted out of the accelerated path.
    pub avoid_accelerated: bool,
    /// Whether an oriented bounding box is present.
    pub oriented: bool,
}

impl TransformInputs {
    /// Whether position is carried by a `translate3d()` term rather than the
    /// `left`/`top` channels.
    #[inline]
    #[must_use]
    pub const fn uses_translate(&self) -> bool {
        self.accelerated && !self.avoid_accelerated
    }
}

/// One term of a composed transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformTerm {
    /// `translate3d(<x>px,<y>px,0)` with whole-pixel offsets.
    Translate3d {
        /// Horizontal offset in whole pixels.
        x: i64,
        /// Vertical offset in whole pixels.
        y: i64,
    },
    /// `rotateZ(<deg>deg)`, used when 3D transforms are available.
    RotateZ(f64),
    /// `rotate(<deg>deg)`.
    Rotate(f64),
    /// `scaleX(-1)`.
    MirrorX,
    /// `scaleY(-1)`.
    MirrorY,
}

impl fmt::Display for TransformTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translate3d { x, y } => write!(f, "translate3d({x}px,{y}px,0)"),
            Self::RotateZ(deg) => write!(f, "rotateZ({deg}deg)"),
            Self::Rotate(deg) => write!(f, "rotate({deg}deg)"),
            Self::MirrorX => f.write_str("scaleX(-1)"),
            Self::MirrorY => f.write_str("scaleY(-1)"),
        }
    }
}

/// Truncates toward zero to whole pixels.
///
/// Sub-pixel precision is dropped on purpose: fractional offsets blur the
/// node through anti-aliasing. `NaN` maps to zero.
#[inline]
#[must_use]
pub fn whole_px(v: f64) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the intended rounding"
    )]
    let px = v as i64;
    px
}

/// Returns the terms for `inputs`, in output order.
#[must_use]
pub fn transform_terms(inputs: &TransformInputs) -> TermList {
    let mut terms = TermList::default();
    if inputs.uses_translate() {
        terms.push(TransformTerm::Translate3d {
            x: whole_px(inputs.x),
            y: whole_px(inputs.y),
        });
    }
    if inputs.oriented {
        // The rotation flavor follows platform support only, not the opt out.
        terms.push(if inputs.accelerated {
            TransformTerm::RotateZ(inputs.rotation)
        } else {
            TransformTerm::Rotate(inputs.rotation)
        });
    }
    if inputs.flip_x {
        terms.push(TransformTerm::MirrorX);
    }
    if inputs.flip_y {
        terms.push(TransformTerm::MirrorY);
    }
    terms
}

/// Composes the transform expression for `inputs`.
#[must_use]
pub fn compose_transform(inputs: &TransformInputs) -> String {
    let mut out = String::new();
    for (i, term) in transform_terms(inputs).iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{term}");
    }
    out
}

/// Up to four transform terms, stored inline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TermList {
    terms: [Option<TransformTerm>; 4],
    len: usize,
}

impl TermList {
    fn push(&mut self, term: TransformTerm) {
        self.terms[self.len] = Some(term);
        self.len += 1;
    }

    /// Number of terms.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no terms.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the terms in output order.
    pub fn iter(&self) -> impl Iterator<Item = TransformTerm> + '_ {
        self.terms[..self.len].iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accelerated() -> TransformInputs {
        TransformInputs {
            accelerated: true,
            ..TransformInputs::default()
        }
    }

    #[test]
    fn accelerated_translation_truncates() {
        let inputs = TransformInputs {
            x: 10.7,
            y: 20.2,
            ..accelerated()
        };
        assert_eq!(compose_transform(&inputs), "translate3d(10px,20px,0)");
    }

    #[test]
    fn fallback_has_no_translation() {
        let inputs = TransformInputs {
            x: 10.7,
            y: 20.2,
            ..TransformInputs::default()
        };
        assert!(!inputs.uses_translate());
        assert_eq!(compose_transform(&inputs), "");
    }

    #[test]
    fn opt_out_drops_translation_but_keeps_3d_rotation() {
        let inputs = TransformInputs {
            x: 4.0,
            rotation: 45.0,
            oriented: true,
            avoid_accelerated: true,
            ..accelerated()
        };
        assert_eq!(compose_transform(&inputs), "rotateZ(45deg)");
    }

    #[test]
    fn rotation_only_with_oriented_box() {
        let mut inputs = TransformInputs {
            rotation: 30.0,
            ..TransformInputs::default()
        };
        assert_eq!(compose_transform(&inputs), "");
        inputs.oriented = true;
        assert_eq!(compose_transform(&inputs), "rotate(30deg)");
    }

    #[test]
    fn terms_in_fixed_order() {
        let inputs = TransformInputs {
            x: -3.9,
            y: 0.5,
            rotation: 12.5,
            flip_x: true,
            flip_y: true,
            oriented: true,
            ..accelerated()
        };
        assert_eq!(
            compose_transform(&inputs),
            "translate3d(-3px,0px,0) rotateZ(12.5deg) scaleX(-1) scaleY(-1)"
        );
        assert_eq!(transform_terms(&inputs).len(), 4);
    }

    #[test]
    fn pure_and_sensitive_only_to_changed_term() {
        let base = TransformInputs {
            x: 1.0,
            y: 2.0,
            flip_x: true,
            ..accelerated()
        };
        assert_eq!(compose_transform(&base), compose_transform(&base));

        let flipped = TransformInputs {
            flip_y: true,
            ..base
        };
        let a: alloc::vec::Vec<_> = transform_terms(&base).iter().collect();
        let b: alloc::vec::Vec<_> = transform_terms(&flipped).iter().collect();
        assert_eq!(a[..], b[..2], "unchanged terms are identical");
        assert_eq!(b[2], TransformTerm::MirrorY);
    }

    #[test]
    fn whole_px_truncates_toward_zero() {
        assert_eq!(whole_px(10.7), 10);
        assert_eq!(whole_px(-0.5), 0);
        assert_eq!(whole_px(f64::NAN), 0);
    }
}
