// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the watch registry and the hosting environment.

use affix_engine::StylePatch;

/// Everything the watch registry needs from its hosting environment:
/// layout measurements and style writes over opaque node handles.
///
/// The registry never interprets a [`Node`](Self::Node) beyond cloning it
/// and comparing it for equality, so hosts are free to hand out DOM
/// references, arena indices, or test fixtures. Equality should follow the
/// host's notion of node identity; two handles to the same node must
/// compare equal.
///
/// Measurements are live reads. The registry queries them once per
/// evaluation pass and treats the answers as ground truth for that pass;
/// nothing is cached across passes. A host whose measurement primitives can
/// fail (detached nodes, missing layout) decides for itself whether to
/// propagate, default, or log; the registry does not catch anything.
pub trait StickyHost {
    /// Opaque node handle.
    type Node: Clone + PartialEq;

    /// The node's layout parent, used as the default bounding container.
    ///
    /// Returning `None` makes the registry ignore an [`add`] call that did
    /// not name a container explicitly.
    ///
    /// [`add`]: crate::Watcher::add
    fn layout_parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Whether the node's computed positioning mode is the default static
    /// flow mode.
    fn is_statically_positioned(&self, node: &Self::Node) -> bool;

    /// Gives the node a non-static positioning mode (`position: relative`)
    /// so descendants with container-relative absolute positioning resolve
    /// against it.
    ///
    /// Only called for nodes that answered `true` to
    /// [`is_statically_positioned`](Self::is_statically_positioned); any
    /// other existing mode is left untouched.
    fn promote_to_positioned(&mut self, node: &Self::Node);

    /// Commits a style patch to the node's live style.
    ///
    /// All three fields must be written; unset fields clear the property
    /// rather than leaving it alone.
    fn apply_patch(&mut self, node: &Self::Node, patch: &StylePatch);

    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;

    /// Current height of the viewport.
    fn viewport_extent(&self) -> f64;

    /// The node's top offset within its positioning ancestor.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// The node's layout height.
    fn extent(&self, node: &Self::Node) -> f64;

    /// The top of the node's bounding rect in viewport coordinates.
    fn viewport_top(&self, node: &Self::Node) -> f64;
}
