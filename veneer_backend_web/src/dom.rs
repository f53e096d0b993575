// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM elements as display nodes.

use alloc::string::String;

use veneer_core::node::DisplayNode;
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

use crate::geometry::computed_style;

/// An `HtmlElement` driven by a [`NodeRenderer`].
///
/// Style writes go through the element's inline style declaration and reads
/// return the computed value. Failed writes are reported with `log::warn!`
/// and otherwise ignored.
///
/// [`NodeRenderer`]: veneer_core::draw::NodeRenderer
pub struct DomNode {
    el: HtmlElement,
}

impl core::fmt::Debug for DomNode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomNode")
            .field("id", &self.el.id())
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl DomNode {
    /// Wraps an existing element.
    #[must_use]
    pub fn new(el: HtmlElement) -> Self {
        Self { el }
    }

    /// Creates a `<div>` and appends it to `container`.
    ///
    /// Returns `None` if the container has no owner document or the element
    /// cannot be created or appended.
    #[must_use]
    pub fn create(container: &HtmlElement) -> Option<Self> {
        let doc = container.owner_document()?;
        let el: HtmlElement = match doc.create_element("div") {
            Ok(el) => el.unchecked_into(),
            Err(err) => {
                log::warn!("create_element(\"div\") failed: {err:?}");
                return None;
            }
        };
        if let Err(err) = container.append_child(&el) {
            log::warn!("append_child failed: {err:?}");
            return None;
        }
        Some(Self { el })
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.el
    }

    /// Unwraps the element.
    #[must_use]
    pub fn into_element(self) -> HtmlElement {
        self.el
    }
}

impl DisplayNode for DomNode {
    fn is_attached(&self) -> bool {
        self.el.parent_node().is_some()
    }

    fn set_style(&mut self, property: &str, value: &str) {
        if let Err(err) = self.el.style().set_property(property, value) {
            log::warn!("failed to set {property}: {value} on #{}: {err:?}", self.el.id());
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        computed_style(&self.el, property)
    }

    fn set_class_name(&mut self, classes: &str) {
        self.el.set_class_name(classes);
    }

    fn set_id(&mut self, id: &str) {
        self.el.set_id(id);
    }

    fn id(&self) -> String {
        self.el.id()
    }

    fn detach(&mut self) {
        self.el.remove();
    }
}
