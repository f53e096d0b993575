// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element geometry, computed styles and client-to-logical coordinates.

use alloc::string::String;

use kurbo::{Point, Size, Vec2};
use veneer_core::coords::{Viewport, screen_to_logical};
use veneer_core::style::csselize;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlElement};

/// Reads the computed value of `property` (either notation) on `el`.
///
/// Falls back to the element's inline style when `getComputedStyle` is not
/// available or reports nothing, as it does for detached elements. Empty
/// values yield `None`.
#[must_use]
pub fn computed_style(el: &Element, property: &str) -> Option<String> {
    let css_name = csselize(property);
    let computed = web_sys::window()
        .and_then(|w| w.get_computed_style(el).ok().flatten())
        .and_then(|decl| decl.get_property_value(&css_name).ok());
    prefer_non_empty(computed, || {
        el.dyn_ref::<HtmlElement>()?
            .style()
            .get_property_value(&css_name)
            .ok()
    })
}

fn prefer_non_empty(
    computed: Option<String>,
    inline: impl FnOnce() -> Option<String>,
) -> Option<String> {
    computed
        .filter(|value| !value.is_empty())
        .or_else(inline)
        .filter(|value| !value.is_empty())
}

/// Returns the page position of `el`'s padding box: its bounding client rect
/// shifted by the page scroll and its left/top border widths.
#[must_use]
pub fn inner_position(el: &Element) -> Point {
    let rect = el.get_bounding_client_rect();
    let scroll = page_offset();
    let border = |side: &str| {
        computed_style(el, side)
            .and_then(|value| parse_leading_int(&value))
            .unwrap_or(0)
    };
    Point::new(
        rect.left() + scroll.x + f64::from(border("border-left-width")),
        rect.top() + scroll.y + f64::from(border("border-top-width")),
    )
}

/// Returns the document scroll offset, read from the root element and then
/// the body. Missing values count as zero.
#[must_use]
pub fn document_scroll() -> Vec2 {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec2::ZERO;
    };
    let root = doc.document_element();
    let body = doc.body();
    let pick = |read: fn(&Element) -> i32| {
        let from_root = root.as_ref().map(read).unwrap_or(0);
        if from_root != 0 {
            return from_root;
        }
        body.as_ref().map(|b| read(b)).unwrap_or(0)
    };
    Vec2::new(
        f64::from(pick(Element::scroll_left)),
        f64::from(pick(Element::scroll_top)),
    )
}

/// Converts browser client coordinates to logical coordinates.
///
/// `stage_origin` is the stage element's position on the page, typically
/// from [`inner_position`].
#[must_use]
pub fn translate(client: Point, stage_origin: Point, viewport: &Viewport) -> Point {
    screen_to_logical(client, stage_origin, document_scroll(), viewport)
}

/// Returns the size of the browser window's layout viewport.
///
/// Uses `innerWidth`/`innerHeight`, falling back to the root element's and
/// then the body's client size.
#[must_use]
pub fn window_size() -> Option<Size> {
    let window = web_sys::window()?;
    let inner = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).filter(|v| *v > 0.0)
    };
    if let (Some(w), Some(h)) = (inner(window.inner_width()), inner(window.inner_height())) {
        return Some(Size::new(w, h));
    }
    let doc = window.document()?;
    let el: Element = match doc.document_element() {
        Some(root) if root.client_width() > 0 => root,
        _ => doc.body()?.into(),
    };
    Some(Size::new(
        f64::from(el.client_width()),
        f64::from(el.client_height()),
    ))
}

/// Switches image smoothing on `el` off (`enabled`) or back on.
pub fn set_pixel_art(el: &HtmlElement, enabled: bool) {
    let style = el.style();
    for (property, value) in pixel_art_declarations(enabled) {
        // Engines drop values they do not understand; the last accepted one
        // wins.
        let _ = style.set_property(property, value);
    }
}

fn pixel_art_declarations(enabled: bool) -> &'static [(&'static str, &'static str)] {
    if enabled {
        &[
            ("image-rendering", "optimizeSpeed"),
            ("image-rendering", "-moz-crisp-edges"),
            ("image-rendering", "-o-crisp-edges"),
            ("image-rendering", "-webkit-optimize-contrast"),
            ("-ms-interpolation-mode", "nearest-neighbor"),
            ("image-rendering", "optimize-contrast"),
            ("image-rendering", "pixelated"),
            ("image-rendering", "crisp-edges"),
        ]
    } else {
        &[
            ("image-rendering", "optimizeQuality"),
            ("-ms-interpolation-mode", "bicubic"),
            ("image-rendering", "auto"),
        ]
    }
}

/// Reads the page scroll offset (`pageXOffset`/`pageYOffset`).
fn page_offset() -> Vec2 {
    let Some(window) = web_sys::window() else {
        return Vec2::ZERO;
    };
    Vec2::new(
        window.page_x_offset().unwrap_or(0.0),
        window.page_y_offset().unwrap_or(0.0),
    )
}

/// Parses the leading integer of a CSS length such as `"2px"` or `"-3.5em"`.
fn parse_leading_int(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i32 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
