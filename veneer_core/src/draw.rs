// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-entity draw synchronization.
//!
//! [`NodeRenderer`] owns an entity's display node and its
//! [`StyleCache`]. Each [`draw`](NodeRenderer::draw) walks the typed channels
//! in a fixed order, compares the value derived from the current
//! [`VisualState`] with the cached one, and writes only on inequality:
//!
//! | Channel | Written as | Condition |
//! |---------|-----------|-----------|
//! | visibility | `visible` / `hidden` | always diffed |
//! | left, top | whole pixels | fallback path only; emptied once on leaving it |
//! | width, height | whole pixels | always diffed |
//! | z-index | number | always diffed |
//! | opacity | number, plus vendor alias | always diffed |
//! | transform-origin | `<x>px <y>px`, plus vendor alias | oriented box present |
//! | transform | [`compose_transform`], plus vendor alias | always diffed |
//!
//! A vendor alias is written in the same step as its channel and is not a
//! separate change. After the channels, the renderer reports a
//! [`DrawnEvent`] carrying the node, the render kind and the logical
//! rectangle; dependent layers key their own effects off that event.

use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::Rect;

use crate::class_list::{self, CapabilitySet};
use crate::compose::{TransformInputs, compose_transform, whole_px};
use crate::gate::{DirtyFlag, PassScheduler};
use crate::node::DisplayNode;
use crate::platform::Support;
use crate::style::{CachedValue, StyleCache, StyleChannel, StyleValue, csselize};
use crate::visual::{EntityId, VisualState};

/// Which rendering path produced a [`DrawnEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderKind {
    /// A retained display node.
    Node,
}

impl RenderKind {
    /// Returns a short label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
        }
    }
}

/// The set of channels written during one draw.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WrittenChannels(u16);

impl WrittenChannels {
    fn insert(&mut self, channel: StyleChannel) {
        self.0 |= 1 << channel.index();
    }

    /// Whether `channel` was written.
    #[must_use]
    pub const fn contains(self, channel: StyleChannel) -> bool {
        self.0 & (1 << channel.index()) != 0
    }

    /// Number of channels written.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether nothing was written.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the written channels in draw order.
    pub fn iter(self) -> impl Iterator<Item = StyleChannel> {
        StyleChannel::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl fmt::Debug for WrittenChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Reported after a node has been brought up to date.
#[derive(Debug)]
pub struct DrawnEvent<'a, N> {
    /// The entity that was drawn.
    pub entity: EntityId,
    /// The node whose style was written.
    pub style: &'a N,
    /// Which rendering path was used.
    pub kind: RenderKind,
    /// Logical bounding rectangle used for the pass.
    pub rect: Rect,
    /// Channels written during this draw.
    pub written: WrittenChannels,
}

/// Receives [`DrawnEvent`]s during a render pass.
pub trait DrawListener<N> {
    /// Called once for every entity drawn.
    fn on_drawn(&mut self, event: &DrawnEvent<'_, N>) {
        _ = event;
    }
}

/// A [`DrawListener`] that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl<N> DrawListener<N> for NoopListener {}

/// Draw synchronizer for one entity.
///
/// The renderer is the only writer of its node's style and class list, which
/// is what makes diffing against the cache sound.
#[derive(Debug)]
pub struct NodeRenderer<N> {
    id: EntityId,
    node: N,
    cache: StyleCache,
    dirty: DirtyFlag,
    avoid_css3d_transforms: bool,
}

impl<N: DisplayNode> NodeRenderer<N> {
    /// Takes ownership of `node` for entity `id`.
    ///
    /// The node is positioned absolutely and given the id `ent<index>`. The
    /// cache starts empty, so the first draw writes every channel.
    pub fn attach(id: EntityId, mut node: N) -> Self {
        node.set_style("position", "absolute");
        node.set_id(&format!("ent{}", id.idx));
        Self {
            id,
            node,
            cache: StyleCache::new(),
            dirty: DirtyFlag::new(),
            avoid_css3d_transforms: false,
        }
    }

    /// Returns the entity this renderer draws.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        self.id
    }

    /// Returns the display node.
    #[must_use]
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Gives up the display node.
    #[must_use]
    pub fn into_node(self) -> N {
        self.node
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self) -> &mut N {
        &mut self.node
    }

    /// Returns the node's identifier.
    #[must_use]
    pub fn node_id(&self) -> String {
        self.node.id()
    }

    /// Returns the style cache.
    #[must_use]
    pub fn cache(&self) -> &StyleCache {
        &self.cache
    }

    /// Whether a redraw is pending.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    /// Whether this entity opted out of 3D transforms for positioning.
    #[must_use]
    pub fn avoid_css3d_transforms(&self) -> bool {
        self.avoid_css3d_transforms
    }

    /// Opts in or out of 3D transforms for positioning.
    pub fn set_avoid_css3d_transforms<S: PassScheduler + ?Sized>(
        &mut self,
        avoid: bool,
        scheduler: &mut S,
    ) {
        if self.avoid_css3d_transforms != avoid {
            self.avoid_css3d_transforms = avoid;
            self.invalidate(scheduler);
        }
    }

    /// Marks the entity for redraw. Returns `true` if this registered it.
    pub fn invalidate<S: PassScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.dirty.mark(self.id, scheduler)
    }

    /// Brings the node up to date with `state`.
    ///
    /// Returns `None` without writing anything if the node is detached. The
    /// dirty flag is cleared either way.
    pub fn draw(&mut self, state: &VisualState, support: &Support) -> Option<DrawnEvent<'_, N>> {
        self.dirty.clear();
        if !self.node.is_attached() {
            return None;
        }

        let inputs = TransformInputs {
            x: state.x,
            y: state.y,
            rotation: state.rotation,
            flip_x: state.flip_x,
            flip_y: state.flip_y,
            accelerated: support.css3d_transform,
            avoid_accelerated: self.avoid_css3d_transforms,
            oriented: state.oriented.is_some(),
        };
        let mut written = WrittenChannels::default();

        self.sync(
            support,
            &mut written,
            StyleChannel::Visibility,
            CachedValue::Flag(state.visible),
            || String::from(if state.visible { "visible" } else { "hidden" }),
        );

        if !inputs.uses_translate() {
            self.sync(
                support,
                &mut written,
                StyleChannel::Left,
                CachedValue::Number(state.x),
                || format!("{}px", whole_px(state.x)),
            );
            self.sync(
                support,
                &mut written,
                StyleChannel::Top,
                CachedValue::Number(state.y),
                || format!("{}px", whole_px(state.y)),
            );
        } else {
            // Left over from the fallback path; translate3d now positions the node.
            self.clear(&mut written, StyleChannel::Left);
            self.clear(&mut written, StyleChannel::Top);
        }

        self.sync(
            support,
            &mut written,
            StyleChannel::Width,
            CachedValue::Number(state.width),
            || format!("{}px", whole_px(state.width)),
        );
        self.sync(
            support,
            &mut written,
            StyleChannel::Height,
            CachedValue::Number(state.height),
            || format!("{}px", whole_px(state.height)),
        );
        self.sync(
            support,
            &mut written,
            StyleChannel::ZIndex,
            CachedValue::Number(f64::from(state.z)),
            || format!("{}", state.z),
        );
        self.sync(
            support,
            &mut written,
            StyleChannel::Opacity,
            CachedValue::Number(state.alpha),
            || format!("{}", state.alpha),
        );

        if let Some(oriented) = state.oriented {
            let origin = format!("{}px {}px", oriented.origin.x, oriented.origin.y);
            self.sync(
                support,
                &mut written,
                StyleChannel::TransformOrigin,
                CachedValue::Text(origin.clone()),
                || origin,
            );
        }

        let transform = compose_transform(&inputs);
        self.sync(
            support,
            &mut written,
            StyleChannel::Transform,
            CachedValue::Text(transform.clone()),
            || transform,
        );

        Some(DrawnEvent {
            entity: self.id,
            style: &self.node,
            kind: RenderKind::Node,
            rect: state.rect(),
            written,
        })
    }

    /// Empties `channel` on the node if a value is cached for it.
    fn clear(&mut self, written: &mut WrittenChannels, channel: StyleChannel) {
        if *self.cache.get(channel) == CachedValue::Unset {
            return;
        }
        self.node.set_style(channel.css_name(), "");
        self.cache.forget(channel);
        written.insert(channel);
    }

    /// Writes `channel` if `value` differs from the cached value.
    fn sync(
        &mut self,
        support: &Support,
        written: &mut WrittenChannels,
        channel: StyleChannel,
        value: CachedValue,
        css: impl FnOnce() -> String,
    ) {
        if *self.cache.get(channel) == value {
            return;
        }
        let css = css();
        self.node.set_style(channel.css_name(), &css);
        if let Some(alias) = support.vendor_alias(channel) {
            self.node.set_style(&alias, &css);
        }
        self.cache.set(channel, value);
        written.insert(channel);
    }

    /// Replaces the display node, returning the old one detached.
    ///
    /// The style cache is reset because it describes what was written to the
    /// old node; the entity is marked for redraw so the new node catches up.
    pub fn replace_node<S: PassScheduler + ?Sized>(&mut self, node: N, scheduler: &mut S) -> N {
        let mut old = core::mem::replace(&mut self.node, node);
        old.detach();
        self.node.set_style("position", "absolute");
        self.node.set_id(&format!("ent{}", self.id.idx));
        self.cache.reset();
        self.invalidate(scheduler);
        old
    }

    /// Removes the node from its parent.
    pub fn undraw(&mut self) {
        if self.node.is_attached() {
            self.node.detach();
        }
    }

    /// Sets one style property in either notation.
    ///
    /// Numbers get a `px` suffix unless the property is unitless. A name that
    /// resolves to a typed channel forgets that channel's cached value, so the
    /// next draw writes the entity's own value back. The entity is marked for
    /// redraw.
    pub fn set_css<S: PassScheduler + ?Sized>(
        &mut self,
        name: &str,
        value: impl Into<StyleValue>,
        scheduler: &mut S,
    ) {
        self.write_css(name, &value.into());
        self.invalidate(scheduler);
    }

    /// Sets several style properties at once, marking the entity for redraw
    /// once.
    pub fn set_css_map<S, I, K, V>(&mut self, entries: I, scheduler: &mut S)
    where
        S: PassScheduler + ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StyleValue>,
    {
        for (name, value) in entries {
            self.write_css(name.as_ref(), &value.into());
        }
        self.invalidate(scheduler);
    }

    /// Reads one style property in either notation.
    ///
    /// Returns whatever the node reports, which for a live DOM node is the
    /// computed value. Unknown or unset properties yield `None`.
    #[must_use]
    pub fn css(&self, name: &str) -> Option<String> {
        self.node.style(&csselize(name))
    }

    fn write_css(&mut self, name: &str, value: &StyleValue) {
        if let Some(channel) = StyleChannel::from_name(name) {
            self.cache.forget(channel);
        }
        let css_name = csselize(name);
        let css = value.to_css(&css_name);
        self.node.set_style(&css_name, &css);
    }

    /// Rewrites the class list after a capability was added to `set`.
    pub fn on_capability_added(&mut self, set: &CapabilitySet, name: &str) {
        class_list::on_capability_added(&mut self.node, set, name);
    }

    /// Rewrites the class list after a capability was removed.
    pub fn on_capability_removed(&mut self, set: &CapabilitySet, name: &str) {
        class_list::on_capability_removed(&mut self.node, set, name);
    }

    /// Writes the full class list for `set`, e.g. onto a substituted node.
    pub fn sync_classes(&mut self, set: &CapabilitySet) {
        self.node.set_class_name(&class_list::class_string(set, None));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::node::MemoryNode;
    use crate::queue::RenderQueue;
    use crate::visual::OrientedBox;

    fn renderer() -> NodeRenderer<MemoryNode> {
        let mut r = NodeRenderer::attach(EntityId::from_raw(0, 0), MemoryNode::new());
        r.node_mut().clear_writes();
        r
    }

    fn state() -> VisualState {
        VisualState {
            x: 10.7,
            y: 20.2,
            width: 32.0,
            height: 16.0,
            ..VisualState::default()
        }
    }

    fn written(
        r: &mut NodeRenderer<MemoryNode>,
        s: &VisualState,
        support: &Support,
    ) -> WrittenChannels {
        r.draw(s, support).expect("node is attached").written
    }

    #[test]
    fn attach_positions_and_names_node() {
        let r = NodeRenderer::attach(EntityId::from_raw(7, 0), MemoryNode::new());
        assert_eq!(r.node().style("position").as_deref(), Some("absolute"));
        assert_eq!(r.node_id(), "ent7");
        assert!(r.cache().is_empty());
    }

    #[test]
    fn accelerated_path_uses_translate3d_and_skips_left_top() {
        let mut r = renderer();
        let support = Support::new(true, "");
        let w = written(&mut r, &state(), &support);

        assert_eq!(
            r.node().style("transform").as_deref(),
            Some("translate3d(10px,20px,0)")
        );
        assert!(!w.contains(StyleChannel::Left) && !w.contains(StyleChannel::Top));
        assert!(!r.node().was_written("left"));
        assert!(!r.node().was_written("top"));
    }

    #[test]
    fn fallback_path_writes_truncated_left_top() {
        let mut r = renderer();
        let support = Support::default();
        written(&mut r, &state(), &support);

        assert_eq!(r.node().style("left").as_deref(), Some("10px"));
        assert_eq!(r.node().style("top").as_deref(), Some("20px"));
        assert_eq!(r.node().style("transform").as_deref(), Some(""));
    }

    #[test]
    fn opt_out_forces_fallback_path() {
        let mut r = renderer();
        let mut queue = RenderQueue::new();
        r.set_avoid_css3d_transforms(true, &mut queue);
        assert!(r.is_dirty());

        written(&mut r, &state(), &Support::new(true, ""));
        assert_eq!(r.node().style("left").as_deref(), Some("10px"));
        assert_eq!(r.node().style("transform").as_deref(), Some(""));
    }

    #[test]
    fn first_draw_writes_every_applicable_channel() {
        let mut r = renderer();
        let w = written(&mut r, &state(), &Support::default());
        // Everything except transform-origin (no oriented box).
        assert_eq!(w.len(), 8);
        assert!(!w.contains(StyleChannel::TransformOrigin));
        assert_eq!(r.node().style("visibility").as_deref(), Some("visible"));
        assert_eq!(r.node().style("width").as_deref(), Some("32px"));
        assert_eq!(r.node().style("z-index").as_deref(), Some("0"));
        assert_eq!(r.node().style("opacity").as_deref(), Some("1"));
    }

    #[test]
    fn redraw_without_change_writes_nothing() {
        let mut r = renderer();
        let support = Support::new(true, "Webkit");
        let s = VisualState {
            oriented: Some(OrientedBox::new(Point::new(16.0, 8.0))),
            rotation: 90.0,
            flip_x: true,
            ..state()
        };
        written(&mut r, &s, &support);
        r.node_mut().clear_writes();

        let w = written(&mut r, &s, &support);
        assert!(w.is_empty(), "unexpected writes: {w:?}");
        assert!(r.node().writes().is_empty());
    }

    #[test]
    fn only_changed_channels_are_written() {
        let mut r = renderer();
        let support = Support::default();
        let mut s = state();
        written(&mut r, &s, &support);
        r.node_mut().clear_writes();

        s.alpha = 0.5;
        s.width = 40.9;
        let w = written(&mut r, &s, &support);
        assert_eq!(
            w.iter().collect::<alloc::vec::Vec<_>>(),
            [StyleChannel::Width, StyleChannel::Opacity]
        );
        assert_eq!(r.node().style("width").as_deref(), Some("40px"));
        assert_eq!(r.node().style("opacity").as_deref(), Some("0.5"));
    }

    #[test]
    fn vendor_aliases_ride_along() {
        let mut r = renderer();
        let support = Support::new(true, "Webkit");
        let s = VisualState {
            alpha: 0.25,
            oriented: Some(OrientedBox::new(Point::new(5.0, 6.0))),
            rotation: 45.0,
            ..state()
        };
        let w = written(&mut r, &s, &support);

        assert!(w.contains(StyleChannel::Opacity));
        assert_eq!(r.node().style("-webkit-opacity").as_deref(), Some("0.25"));
        assert_eq!(r.node().style("transform-origin").as_deref(), Some("5px 6px"));
        assert_eq!(
            r.node().style("-webkit-transform-origin").as_deref(),
            Some("5px 6px")
        );
        assert_eq!(
            r.node().style("-webkit-transform").as_deref(),
            Some("translate3d(10px,20px,0) rotateZ(45deg)")
        );
    }

    #[test]
    fn fallback_rotation_uses_rotate() {
        let mut r = renderer();
        let s = VisualState {
            oriented: Some(OrientedBox::new(Point::new(0.0, 0.0))),
            rotation: 30.0,
            flip_y: true,
            ..state()
        };
        written(&mut r, &s, &Support::default());
        assert_eq!(
            r.node().style("transform").as_deref(),
            Some("rotate(30deg) scaleY(-1)")
        );
    }

    #[test]
    fn flip_toggled_twice_is_not_rewritten() {
        let mut r = renderer();
        let support = Support::new(true, "");
        let mut s = state();
        written(&mut r, &s, &support);
        r.node_mut().clear_writes();

        s.flip_x = true;
        s.flip_x = false;
        let w = written(&mut r, &s, &support);
        assert!(!w.contains(StyleChannel::Transform));
        assert!(!r.node().was_written("transform"));
    }

    #[test]
    fn hidden_entity_writes_hidden() {
        let mut r = renderer();
        let s = VisualState {
            visible: false,
            ..state()
        };
        written(&mut r, &s, &Support::default());
        assert_eq!(r.node().style("visibility").as_deref(), Some("hidden"));
    }

    #[test]
    fn detached_node_is_skipped_and_flag_cleared() {
        let mut r = renderer();
        let mut queue = RenderQueue::new();
        r.invalidate(&mut queue);
        r.undraw();
        assert!(!r.node().is_attached());

        assert!(r.draw(&state(), &Support::default()).is_none());
        assert!(!r.is_dirty(), "flag cleared even when skipped");
        assert!(r.node().writes().is_empty());
        assert!(r.cache().is_empty(), "skipped writes are not cached");
    }

    #[test]
    fn drawn_event_reports_logical_rect() {
        let mut r = renderer();
        let s = VisualState {
            x: 10.5,
            y: 20.25,
            ..state()
        };
        let event = r.draw(&s, &Support::default()).expect("attached");
        assert_eq!(event.kind, RenderKind::Node);
        assert_eq!(event.entity, EntityId::from_raw(0, 0));
        assert_eq!(event.rect, Rect::new(10.5, 20.25, 42.5, 36.25));
        assert_eq!(event.style.style("width").as_deref(), Some("32px"));
    }

    #[test]
    fn replacing_node_resets_cache_and_redraws() {
        let mut r = renderer();
        let mut queue = RenderQueue::new();
        let support = Support::default();
        written(&mut r, &state(), &support);

        let old = r.replace_node(MemoryNode::new(), &mut queue);
        assert!(!old.is_attached(), "old node is detached");
        assert!(r.cache().is_empty());
        assert!(r.is_dirty());
        assert_eq!(queue.len(), 1);
        assert_eq!(r.node().style("position").as_deref(), Some("absolute"));

        let w = written(&mut r, &state(), &support);
        assert_eq!(w.len(), 8, "new node receives every channel");
        assert_eq!(r.node().style("left").as_deref(), Some("10px"));
    }

    #[test]
    fn css_round_trip_and_unit_suffix() {
        let mut r = renderer();
        let mut queue = RenderQueue::new();
        r.set_css_map(
            [
                ("opacity", StyleValue::from(0.5)),
                ("textAlign", "center".into()),
            ],
            &mut queue,
        );
        assert_eq!(r.css("opacity").as_deref(), Some("0.5"));
        assert_eq!(r.css("text-align").as_deref(), Some("center"));

        r.set_css("zIndex", 4_i32, &mut queue);
        r.set_css("margin-left", 3.0_f64, &mut queue);
        assert_eq!(r.css("z-index").as_deref(), Some("4"));
        assert_eq!(r.css("marginLeft").as_deref(), Some("3px"));
        assert_eq!(r.css("unknown-property"), None);
        assert_eq!(queue.registrations(), 1, "css writes register once");
    }

    #[test]
    fn ms_camel_case_name_reaches_the_prefixed_property() {
        let mut r = renderer();
        let mut queue = RenderQueue::new();
        r.set_css("msTransform", "rotate(1deg)", &mut queue);
        assert!(r.node().was_written("-ms-transform"));
        assert!(!r.node().was_written("ms-transform"));
        assert_eq!(r.css("-ms-transform").as_deref(), Some("rotate(1deg)"));
        assert_eq!(r.css("msTransform").as_deref(), Some("rotate(1deg)"));
    }

    #[test]
    fn hand_written_typed_channel_is_restored_by_next_draw() {
        let mut r = renderer();
        let mut queue = RenderQueue::new();
        let support = Support::default();
        let s = VisualState { z: 2, ..state() };
        written(&mut r, &s, &support);

        r.set_css("zIndex", 5_i32, &mut queue);
        assert_eq!(r.css("z-index").as_deref(), Some("5"));
        assert_eq!(*r.cache().get(StyleChannel::ZIndex), CachedValue::Unset);
        // Untyped properties leave the cache alone.
        r.set_css("textAlign", "center", &mut queue);
        assert_eq!(*r.cache().get(StyleChannel::Opacity), CachedValue::Number(1.0));

        let w = written(&mut r, &s, &support);
        assert_eq!((w.len(), w.contains(StyleChannel::ZIndex)), (1, true), "{w:?}");
        assert_eq!(r.css("z-index").as_deref(), Some("2"));
    }

    #[test]
    fn leaving_the_fallback_path_clears_left_top() {
        let mut r = renderer();
        let mut queue = RenderQueue::new();
        let support = Support::new(true, "");
        r.set_avoid_css3d_transforms(true, &mut queue);
        written(&mut r, &state(), &support);
        assert_eq!(r.node().style("left").as_deref(), Some("10px"));

        r.set_avoid_css3d_transforms(false, &mut queue);
        let w = written(&mut r, &state(), &support);
        assert!(w.contains(StyleChannel::Left) && w.contains(StyleChannel::Top));
        assert_eq!(r.node().style("left").as_deref(), Some(""));
        assert_eq!(r.node().style("top").as_deref(), Some(""));
        assert_eq!(
            r.node().style("transform").as_deref(),
            Some("translate3d(10px,20px,0)")
        );

        // Cleared once; later draws leave left/top alone.
        r.node_mut().clear_writes();
        let w = written(&mut r, &state(), &support);
        assert!(w.is_empty(), "unexpected writes: {w:?}");
    }

    #[test]
    fn nan_alpha_redraw_writes_nothing() {
        let mut r = renderer();
        let support = Support::default();
        let s = VisualState {
            alpha: f64::NAN,
            ..state()
        };
        written(&mut r, &s, &support);
        assert_eq!(r.node().style("opacity").as_deref(), Some("NaN"));

        r.node_mut().clear_writes();
        let w = written(&mut r, &s, &support);
        assert!(w.is_empty(), "unexpected writes: {w:?}");
        assert!(r.node().writes().is_empty());
    }

    #[test]
    fn capability_changes_rewrite_class_list() {
        let mut r = renderer();
        let mut set: CapabilitySet = ["A", "B"].into_iter().collect();
        set.insert("C");
        r.on_capability_added(&set, "C");
        assert_eq!(r.node().class_name(), "A B C");

        set.remove("B");
        r.on_capability_removed(&set, "B");
        assert_eq!(r.node().class_name(), "A C");
    }
}
