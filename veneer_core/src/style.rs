// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style channels, the per-entity style cache, and property-name helpers.
//!
//! A *channel* is one style property that the draw pass tracks on its own.
//! The nine [`StyleChannel`]s are the statically typed subset; any other
//! property name passes through the generic css API untyped and is never
//! cached.
//!
//! The [`StyleCache`] holds the last value written for each channel. The
//! display node cannot be read back cheaply, so the cache is the only source
//! of truth for change detection: a channel is written when its current value
//! differs from the cached one, and the cache is updated in the same step.

use alloc::format;
use alloc::string::{String, ToString};

/// A typed style channel tracked by the draw pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleChannel {
    /// `visibility`: `visible` or `hidden`.
    Visibility,
    /// `left`, only written when the accelerated transform path is not used.
    Left,
    /// `top`, only written when the accelerated transform path is not used.
    Top,
    /// `width` in whole pixels.
    Width,
    /// `height` in whole pixels.
    Height,
    /// `z-index`.
    ZIndex,
    /// `opacity`, plus the vendor alias.
    Opacity,
    /// `transform-origin`, plus the vendor alias.
    TransformOrigin,
    /// `transform`, plus the vendor alias.
    Transform,
}

impl StyleChannel {
    /// Number of typed channels.
    pub const COUNT: usize = 9;

    /// All channels, in the order the draw pass visits them.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Visibility,
        Self::Left,
        Self::Top,
        Self::Width,
        Self::Height,
        Self::ZIndex,
        Self::Opacity,
        Self::TransformOrigin,
        Self::Transform,
    ];

    /// Returns the hyphenated CSS property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::Left => "left",
            Self::Top => "top",
            Self::Width => "width",
            Self::Height => "height",
            Self::ZIndex => "z-index",
            Self::Opacity => "opacity",
            Self::TransformOrigin => "transform-origin",
            Self::Transform => "transform",
        }
    }

    /// Returns the position of this channel in [`ALL`](Self::ALL).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether writes to this channel are mirrored onto a vendor-prefixed
    /// alias property.
    #[must_use]
    pub const fn has_vendor_alias(self) -> bool {
        matches!(self, Self::Opacity | Self::TransformOrigin | Self::Transform)
    }

    /// Resolves a property name in either CSS (`z-index`) or camel-case
    /// (`zIndex`) notation.
    ///
    /// Returns `None` for properties outside the typed subset.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let css = csselize(name);
        Self::ALL.into_iter().find(|c| c.css_name() == css)
    }
}

/// The last value written to a channel.
///
/// Comparison is strict value equality: two transform strings composed from
/// different inputs but spelled the same are equal. Numbers compare by bit
/// pattern, so a `NaN` equals itself and a redraw of it writes nothing.
#[derive(Clone, Debug, Default)]
pub enum CachedValue {
    /// Nothing has been written since the cache was created or reset.
    #[default]
    Unset,
    /// A boolean source value (visibility).
    Flag(bool),
    /// A numeric source value (position, size, layering, opacity).
    Number(f64),
    /// A composed string (transform, transform origin).
    Text(String),
}

impl PartialEq for CachedValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unset, Self::Unset) => true,
            (Self::Flag(a), Self::Flag(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// Per-entity map from channel to last written value.
///
/// Invariant: after a draw, every channel that was written holds exactly the
/// value that was written, and no channel holds a value whose write was
/// skipped.
#[derive(Clone, Debug, Default)]
pub struct StyleCache {
    values: [CachedValue; StyleChannel::COUNT],
}

impl StyleCache {
    /// Creates a cache with every channel unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last value written to `channel`, or
    /// [`CachedValue::Unset`].
    #[inline]
    #[must_use]
    pub fn get(&self, channel: StyleChannel) -> &CachedValue {
        &self.values[channel.index()]
    }

    /// Records `value` as the last value written to `channel`.
    #[inline]
    pub fn set(&mut self, channel: StyleChannel, value: CachedValue) {
        self.values[channel.index()] = value;
    }

    /// Forgets the cached value of one channel, so the next draw writes it.
    #[inline]
    pub fn forget(&mut self, channel: StyleChannel) {
        self.values[channel.index()] = CachedValue::Unset;
    }

    /// Forgets every cached value.
    pub fn reset(&mut self) {
        for v in &mut self.values {
            *v = CachedValue::Unset;
        }
    }

    /// Returns whether every channel is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| *v == CachedValue::Unset)
    }
}

/// A value passed to the generic css API.
///
/// Numbers are suffixed with `px` unless the property is unitless.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A number; rendered with a `px` suffix for length properties.
    Number(f64),
    /// A literal CSS value.
    Text(String),
}

impl StyleValue {
    /// Renders the value for the given property (either notation).
    #[must_use]
    pub fn to_css(&self, property: &str) -> String {
        match self {
            Self::Number(n) if is_unitless(&csselize(property)) => format!("{n}"),
            Self::Number(n) => format!("{n}px"),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Returns whether a hyphenated CSS property takes unitless numbers.
#[must_use]
pub fn is_unitless(css_name: &str) -> bool {
    matches!(
        css_name,
        "opacity"
            | "z-index"
            | "line-height"
            | "font-weight"
            | "flex-grow"
            | "flex-shrink"
            | "order"
            | "zoom"
    )
}

/// Converts camel-case notation to CSS notation (`textAlign` → `text-align`).
///
/// Names already in CSS notation are returned unchanged. The `ms` vendor
/// prefix is the one lower-case prefix browsers expose, so `msTransform`
/// also gains a leading hyphen (`-ms-transform`).
#[must_use]
pub fn csselize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    if name
        .strip_prefix("ms")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
    {
        out.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_resolve_in_both_notations() {
        assert_eq!(StyleChannel::from_name("z-index"), Some(StyleChannel::ZIndex));
        assert_eq!(StyleChannel::from_name("zIndex"), Some(StyleChannel::ZIndex));
        assert_eq!(
            StyleChannel::from_name("transformOrigin"),
            Some(StyleChannel::TransformOrigin)
        );
        assert_eq!(StyleChannel::from_name("text-align"), None);
    }

    #[test]
    fn channel_index_matches_all_order() {
        for (i, c) in StyleChannel::ALL.into_iter().enumerate() {
            assert_eq!(c.index(), i, "{c:?} out of place");
        }
    }

    #[test]
    fn cache_starts_unset_and_resets() {
        let mut cache = StyleCache::new();
        assert!(cache.is_empty());
        assert_eq!(*cache.get(StyleChannel::Opacity), CachedValue::Unset);

        cache.set(StyleChannel::Opacity, CachedValue::Number(0.5));
        assert_eq!(*cache.get(StyleChannel::Opacity), CachedValue::Number(0.5));
        assert!(!cache.is_empty());

        cache.reset();
        assert!(cache.is_empty());
    }

    #[test]
    fn unset_differs_from_every_value() {
        assert_ne!(CachedValue::Unset, CachedValue::Text(String::new()));
        assert_ne!(CachedValue::Unset, CachedValue::Flag(false));
        assert_ne!(CachedValue::Unset, CachedValue::Number(0.0));
    }

    #[test]
    fn csselize_handles_vendor_prefixes() {
        assert_eq!(csselize("textAlign"), "text-align");
        assert_eq!(csselize("WebkitTransform"), "-webkit-transform");
        assert_eq!(csselize("msTransform"), "-ms-transform");
        assert_eq!(csselize("-ms-transform"), "-ms-transform");
        assert_eq!(csselize("border-left-width"), "border-left-width");
        // Lower-case names that merely start with "ms" are not vendor names.
        assert_eq!(csselize("mso"), "mso");
    }

    #[test]
    fn nan_numbers_compare_equal() {
        assert_eq!(CachedValue::Number(f64::NAN), CachedValue::Number(f64::NAN));
        assert_ne!(CachedValue::Number(0.0), CachedValue::Number(-0.0));
        assert_ne!(CachedValue::Number(1.0), CachedValue::Text("1".into()));
    }

    #[test]
    fn forget_clears_one_channel() {
        let mut cache = StyleCache::new();
        cache.set(StyleChannel::ZIndex, CachedValue::Number(2.0));
        cache.set(StyleChannel::Opacity, CachedValue::Number(1.0));
        cache.forget(StyleChannel::ZIndex);
        assert_eq!(*cache.get(StyleChannel::ZIndex), CachedValue::Unset);
        assert_eq!(*cache.get(StyleChannel::Opacity), CachedValue::Number(1.0));
    }

    #[test]
    fn numbers_get_px_except_unitless() {
        assert_eq!(StyleValue::from(12.0).to_css("width"), "12px");
        assert_eq!(StyleValue::from(0.5).to_css("opacity"), "0.5");
        assert_eq!(StyleValue::from(3).to_css("zIndex"), "3");
        assert_eq!(StyleValue::from("center").to_css("text-align"), "center");
    }
}
