// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays entity storage and render-pass driver.
//!
//! A [`Stage`] owns every entity's [`VisualState`], [`CapabilitySet`] and
//! [`NodeRenderer`], plus the [`RenderQueue`] that collects dirty entities.
//!
//! - Visual-state mutations go through the invalidation gate: the first one
//!   after a pass registers the entity, later ones are free.
//! - Capability changes bypass the gate and rewrite the node's class list
//!   immediately.
//! - [`render_pass`](Stage::render_pass) drains the queue and draws each
//!   entity in the order the queue yields them.

use alloc::string::String;
use alloc::vec::Vec;

use crate::class_list::CapabilitySet;
use crate::draw::{DrawListener, NodeRenderer};
use crate::node::DisplayNode;
use crate::platform::Support;
use crate::queue::RenderQueue;
use crate::style::StyleValue;
use crate::trace::{
    DrawEvent, DrawSkippedEvent, PassBeginEvent, PassEndEvent, SkipReason, Tracer,
};
use crate::visual::{EntityId, OrientedBox, VisualState};

/// Storage for all entities drawn through one render queue.
///
/// Entities are addressed by [`EntityId`] handles. Removed entities free their
/// slot for reuse, and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct Stage<N> {
    // -- Per-entity state --
    state: Vec<VisualState>,
    capabilities: Vec<CapabilitySet>,
    renderers: Vec<Option<NodeRenderer<N>>>,

    // -- Allocation --
    generation: Vec<u32>,
    free_list: Vec<u32>,
    len: u32,

    // -- Scheduling --
    queue: RenderQueue,
    support: Support,
    pass_index: u64,
}

impl<N: DisplayNode> Stage<N> {
    /// Creates an empty stage for a platform with the given capabilities.
    #[must_use]
    pub fn new(support: Support) -> Self {
        Self {
            state: Vec::new(),
            capabilities: Vec::new(),
            renderers: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            queue: RenderQueue::new(),
            support,
            pass_index: 0,
        }
    }

    // -- Allocation API --

    /// Adds an entity drawn into `node` and returns its handle.
    ///
    /// The entity starts with default visual state and no capabilities, and
    /// is queued for the next pass.
    pub fn spawn(&mut self, node: N) -> EntityId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.state[idx as usize] = VisualState::default();
            self.capabilities[idx as usize] = CapabilitySet::new();
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.state.push(VisualState::default());
            self.capabilities.push(CapabilitySet::new());
            self.renderers.push(None);
            self.generation.push(0);
            idx
        };

        let id = EntityId {
            idx,
            generation: self.generation[idx as usize],
        };
        let mut renderer = NodeRenderer::attach(id, node);
        renderer.invalidate(&mut self.queue);
        self.renderers[idx as usize] = Some(renderer);
        id
    }

    /// Removes an entity, detaching and returning its node.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn despawn(&mut self, id: EntityId) -> N {
        self.validate(id);
        let idx = id.idx as usize;
        let Some(mut renderer) = self.renderers[idx].take() else {
            unreachable!("live entity without renderer");
        };
        if renderer.is_dirty() {
            self.queue.forget(id);
        }
        renderer.undraw();

        // Bump generation so old handles immediately fail validation.
        self.generation[idx] += 1;
        self.free_list.push(id.idx);
        renderer.into_node()
    }

    /// Returns whether the given handle refers to a live entity.
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        id.idx < self.len
            && self.generation[id.idx as usize] == id.generation
            && self.renderers[id.idx as usize].is_some()
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Getters (no invalidation) --

    /// Returns the visual state of an entity.
    #[must_use]
    pub fn state(&self, id: EntityId) -> &VisualState {
        self.validate(id);
        &self.state[id.idx as usize]
    }

    /// Returns the capability set of an entity.
    #[must_use]
    pub fn capabilities(&self, id: EntityId) -> &CapabilitySet {
        self.validate(id);
        &self.capabilities[id.idx as usize]
    }

    /// Returns the renderer of an entity.
    #[must_use]
    pub fn renderer(&self, id: EntityId) -> &NodeRenderer<N> {
        self.validate(id);
        self.renderer_at(id.idx)
    }

    /// Returns the identifier of an entity's node.
    #[must_use]
    pub fn node_id(&self, id: EntityId) -> String {
        self.renderer(id).node_id()
    }

    /// Returns the platform support record.
    #[must_use]
    pub fn support(&self) -> &Support {
        &self.support
    }

    /// Returns the render queue.
    #[must_use]
    pub fn queue(&self) -> &RenderQueue {
        &self.queue
    }

    /// Returns the number of passes run so far.
    #[must_use]
    pub fn pass_index(&self) -> u64 {
        self.pass_index
    }

    // -- Visual-state mutation (marks dirty) --

    /// Applies `f` to an entity's visual state and marks it dirty.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn update(&mut self, id: EntityId, f: impl FnOnce(&mut VisualState)) {
        self.validate(id);
        let idx = id.idx as usize;
        f(&mut self.state[idx]);
        if let Some(renderer) = self.renderers[idx].as_mut() {
            renderer.invalidate(&mut self.queue);
        }
    }

    /// Moves an entity.
    pub fn set_position(&mut self, id: EntityId, x: f64, y: f64) {
        self.update(id, |s| {
            s.x = x;
            s.y = y;
        });
    }

    /// Resizes an entity.
    pub fn set_size(&mut self, id: EntityId, width: f64, height: f64) {
        self.update(id, |s| {
            s.width = width;
            s.height = height;
        });
    }

    /// Sets the layering order.
    pub fn set_z(&mut self, id: EntityId, z: i32) {
        self.update(id, |s| s.z = z);
    }

    /// Sets the opacity.
    pub fn set_alpha(&mut self, id: EntityId, alpha: f64) {
        self.update(id, |s| s.alpha = alpha);
    }

    /// Sets the clockwise rotation in degrees.
    pub fn set_rotation(&mut self, id: EntityId, degrees: f64) {
        self.update(id, |s| s.rotation = degrees);
    }

    /// Sets horizontal and vertical mirroring.
    pub fn set_flip(&mut self, id: EntityId, flip_x: bool, flip_y: bool) {
        self.update(id, |s| {
            s.flip_x = flip_x;
            s.flip_y = flip_y;
        });
    }

    /// Shows or hides an entity.
    pub fn set_visible(&mut self, id: EntityId, visible: bool) {
        self.update(id, |s| s.visible = visible);
    }

    /// Sets or clears the oriented bounding box.
    pub fn set_oriented(&mut self, id: EntityId, oriented: Option<OrientedBox>) {
        self.update(id, |s| s.oriented = oriented);
    }

    /// Opts an entity in or out of 3D transforms for positioning.
    pub fn set_avoid_css3d_transforms(&mut self, id: EntityId, avoid: bool) {
        self.validate(id);
        if let Some(renderer) = self.renderers[id.idx as usize].as_mut() {
            renderer.set_avoid_css3d_transforms(avoid, &mut self.queue);
        }
    }

    // -- Style passthrough (marks dirty) --

    /// Sets one style property on an entity's node.
    pub fn set_css(&mut self, id: EntityId, name: &str, value: impl Into<StyleValue>) {
        self.validate(id);
        if let Some(renderer) = self.renderers[id.idx as usize].as_mut() {
            renderer.set_css(name, value, &mut self.queue);
        }
    }

    /// Sets several style properties on an entity's node.
    pub fn set_css_map<I, K, V>(&mut self, id: EntityId, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StyleValue>,
    {
        self.validate(id);
        if let Some(renderer) = self.renderers[id.idx as usize].as_mut() {
            renderer.set_css_map(entries, &mut self.queue);
        }
    }

    /// Reads one style property from an entity's node.
    #[must_use]
    pub fn css(&self, id: EntityId, name: &str) -> Option<String> {
        self.renderer(id).css(name)
    }

    // -- Node management --

    /// Substitutes an entity's node, returning the old one detached.
    ///
    /// The new node receives the entity's class list right away; its style
    /// cache is reset and it is queued for the next pass.
    pub fn replace_node(&mut self, id: EntityId, node: N) -> N {
        self.validate(id);
        let idx = id.idx as usize;
        let Some(renderer) = self.renderers[idx].as_mut() else {
            unreachable!("live entity without renderer");
        };
        let old = renderer.replace_node(node, &mut self.queue);
        renderer.sync_classes(&self.capabilities[idx]);
        old
    }

    /// Detaches an entity's node from its parent. The entity stays alive;
    /// later passes skip it.
    pub fn undraw(&mut self, id: EntityId) {
        self.validate(id);
        if let Some(renderer) = self.renderers[id.idx as usize].as_mut() {
            renderer.undraw();
        }
    }

    // -- Capabilities (immediate class sync) --

    /// Attaches a capability tag. Returns `false` if it was already present.
    pub fn add_capability(&mut self, id: EntityId, name: &str) -> bool {
        self.validate(id);
        let idx = id.idx as usize;
        if !self.capabilities[idx].insert(name) {
            return false;
        }
        if let Some(renderer) = self.renderers[idx].as_mut() {
            renderer.on_capability_added(&self.capabilities[idx], name);
        }
        true
    }

    /// Detaches a capability tag. Returns `false` if it was not present.
    pub fn remove_capability(&mut self, id: EntityId, name: &str) -> bool {
        self.validate(id);
        let idx = id.idx as usize;
        if !self.capabilities[idx].remove(name) {
            return false;
        }
        if let Some(renderer) = self.renderers[idx].as_mut() {
            renderer.on_capability_removed(&self.capabilities[idx], name);
        }
        true
    }

    // -- Render pass --

    /// Draws every entity queued since the last pass.
    ///
    /// Each drawn entity is reported to `listener`. Entities whose node is
    /// detached, or that were removed after being queued, are skipped.
    /// Returns the number of entities drawn.
    pub fn render_pass<L: DrawListener<N> + ?Sized>(
        &mut self,
        listener: &mut L,
        tracer: &mut Tracer<'_>,
    ) -> usize {
        let pass_index = self.pass_index;
        self.pass_index += 1;

        let pending = self.queue.take_pass();
        tracer.pass_begin(&PassBeginEvent {
            pass_index,
            pending: pending.len(),
        });

        let mut drawn = 0;
        let mut skipped = 0;
        for id in pending {
            if !self.is_alive(id) {
                skipped += 1;
                tracer.draw_skipped(&DrawSkippedEvent {
                    pass_index,
                    entity: id,
                    reason: SkipReason::Removed,
                });
                continue;
            }
            let idx = id.idx as usize;
            let Some(renderer) = self.renderers[idx].as_mut() else {
                continue;
            };
            if !renderer.is_dirty() {
                continue;
            }
            match renderer.draw(&self.state[idx], &self.support) {
                Some(event) => {
                    drawn += 1;
                    tracer.draw(&DrawEvent {
                        pass_index,
                        entity: id,
                        writes: event.written.len(),
                        rect: event.rect,
                    });
                    #[cfg(feature = "trace-rich")]
                    {
                        let writes: Vec<crate::trace::ChannelWrite> = event
                            .written
                            .iter()
                            .map(|channel| crate::trace::ChannelWrite {
                                entity_index: id.idx,
                                channel,
                            })
                            .collect();
                        tracer.channel_writes(pass_index, &writes);
                    }
                    listener.on_drawn(&event);
                }
                None => {
                    skipped += 1;
                    tracer.draw_skipped(&DrawSkippedEvent {
                        pass_index,
                        entity: id,
                        reason: SkipReason::Detached,
                    });
                }
            }
        }

        tracer.pass_end(&PassEndEvent {
            pass_index,
            drawn,
            skipped,
        });
        drawn
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    fn validate(&self, id: EntityId) {
        assert!(
            self.is_alive(id),
            "stale EntityId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    fn renderer_at(&self, idx: u32) -> &NodeRenderer<N> {
        match &self.renderers[idx as usize] {
            Some(renderer) => renderer,
            None => unreachable!("live entity without renderer"),
        }
    }

    #[cfg(test)]
    fn renderer_mut(&mut self, id: EntityId) -> &mut NodeRenderer<N> {
        self.validate(id);
        match &mut self.renderers[id.idx as usize] {
            Some(renderer) => renderer,
            None => unreachable!("live entity without renderer"),
        }
    }
}
