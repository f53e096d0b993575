// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform capability detection.

use alloc::format;

use veneer_core::platform::Support;
use wasm_bindgen::JsValue;

/// Vendor prefixes in script notation, in probe order.
const PREFIXES: [&str; 4] = ["Webkit", "Moz", "ms", "O"];

/// Probes the document body's style declaration for 3D transform support and
/// a vendor prefix.
///
/// Returns an all-false [`Support`] when no window, document or body is
/// available.
#[must_use]
pub fn detect_support() -> Support {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return Support::default();
    };
    let style = body.style();
    let has = |name: &str| js_sys::Reflect::has(&style, &JsValue::from_str(name)).unwrap_or(false);
    support_from_probe(has)
}

/// Builds a [`Support`] from a style-property existence probe.
fn support_from_probe(has: impl Fn(&str) -> bool) -> Support {
    let prefix = PREFIXES
        .iter()
        .copied()
        .find(|prefix| has(&format!("{prefix}Transform")))
        .unwrap_or("");
    let css3d_transform =
        has("perspective") || (!prefix.is_empty() && has(&format!("{prefix}Perspective")));
    Support::new(css3d_transform, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_engine_without_prefix() {
        let support = support_from_probe(|name| matches!(name, "perspective" | "transform"));
        assert!(support.css3d_transform, "unprefixed perspective detected");
        assert_eq!(support.vendor_prefix, "");
    }

    #[test]
    fn prefixed_engine() {
        let support = support_from_probe(|name| matches!(name, "MozTransform" | "MozPerspective"));
        assert!(support.css3d_transform, "prefixed perspective detected");
        assert_eq!(support.vendor_prefix, "Moz");
    }

    #[test]
    fn flat_engine() {
        let support = support_from_probe(|name| name == "msTransform");
        assert!(!support.css3d_transform, "no perspective property");
        assert_eq!(support.vendor_prefix, "ms");
    }
}
