// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The watch registry and its evaluation pass.

use affix_engine::{DirectionTracker, Geometry, PinMargins, PinState, StylePatch, resolve};
use smallvec::SmallVec;

use crate::gate::FrameGate;
use crate::host::StickyHost;

/// One registered sticky target.
#[derive(Clone, Debug)]
struct Watched<N> {
    element: N,
    container: N,
    margins: PinMargins,
    state: PinState,
}

/// Registry of watched elements, evaluated once per rendered frame.
///
/// The watcher owns exactly the bookkeeping the behavior needs: the flat
/// entry list, the scroll direction tracker, and the frame gate. It holds
/// no reference to the hosting environment; every driver method borrows the
/// host explicitly, which also means the borrow checker rules out registry
/// mutation from inside a pass.
///
/// Entries are evaluated in registration order, independently of each
/// other. Registering the same element twice creates two independent
/// entries; [`remove`](Self::remove) then removes them one at a time, first
/// registration first.
pub struct Watcher<H: StickyHost> {
    entries: SmallVec<[Watched<H::Node>; 4]>,
    direction: DirectionTracker,
    gate: FrameGate,
}

impl<H: StickyHost> core::fmt::Debug for Watcher<H>
where
    H::Node: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Watcher")
            .field("entries", &self.entries)
            .field("direction", &self.direction)
            .field("gate", &self.gate)
            .finish()
    }
}

impl<H: StickyHost> Default for Watcher<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StickyHost> Watcher<H> {
    /// Creates an empty watcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            direction: DirectionTracker::new(),
            gate: FrameGate::new(),
        }
    }

    /// Registers `element` as a sticky target bounded by `container`.
    ///
    /// With no explicit container, the element's layout parent is used; an
    /// element without one is ignored. A statically-positioned container is
    /// promoted to a relative positioning context so the element's
    /// container-relative offsets resolve against it; any other mode is
    /// left untouched. The element itself is taken out of normal flow with
    /// its insets unset ([`StylePatch::DETACHED`]), and one evaluation pass
    /// runs immediately so the element is placed correctly before any
    /// further scrolling.
    ///
    /// No deduplication or validation is performed: negative margins, a
    /// container that is not an ancestor of the element, or a node the host
    /// cannot measure are the host environment's problem, not checked here.
    pub fn add(
        &mut self,
        host: &mut H,
        element: H::Node,
        container: Option<H::Node>,
        margins: PinMargins,
    ) {
        let Some(container) = container.or_else(|| host.layout_parent(&element)) else {
            return;
        };
        if host.is_statically_positioned(&container) {
            host.promote_to_positioned(&container);
        }
        host.apply_patch(&element, &StylePatch::DETACHED);
        self.entries.push(Watched {
            element,
            container,
            margins,
            state: PinState::AbsoluteTop,
        });
        self.run_pass(host);
    }

    /// Stops watching `element`, resetting its style to the fully unset
    /// configuration ([`StylePatch::CLEARED`]).
    ///
    /// Returns `true` if an entry was found and removed. Removing an
    /// element that is not watched is a no-op returning `false`, with no
    /// style write.
    pub fn remove(&mut self, host: &mut H, element: &H::Node) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.element == *element)
        else {
            return false;
        };
        host.apply_patch(element, &StylePatch::CLEARED);
        self.entries.remove(index);
        true
    }

    /// Reports a scroll notification.
    ///
    /// Returns `true` if the host should schedule [`run_pass`](Self::run_pass)
    /// on the next rendered frame; `false` means a pass is already pending
    /// and this notification is dropped.
    pub fn notify_scroll(&mut self) -> bool {
        self.gate.request()
    }

    /// Forces one immediate evaluation pass, e.g. after a layout-affecting
    /// change unrelated to scrolling.
    pub fn trigger(&mut self, host: &mut H) {
        self.run_pass(host);
    }

    /// Runs one evaluation pass over every watched entry.
    ///
    /// Hosts call this from their frame callback after
    /// [`notify_scroll`](Self::notify_scroll) returned `true`. The pass
    /// reads the scroll offset current at pass time, advances the direction
    /// tracker once, and evaluates entries in registration order; entries
    /// whose state does not change generate no style write. The frame gate
    /// reopens at the end of the pass.
    pub fn run_pass(&mut self, host: &mut H) {
        let scroll = host.scroll_offset();
        let direction = self.direction.advance(scroll);
        let viewport_extent = host.viewport_extent();
        for entry in &mut self.entries {
            let container_top = host.offset_top(&entry.container);
            let geometry = Geometry {
                scroll,
                viewport_extent,
                container_top,
                container_extent: host.extent(&entry.container),
                element_top: container_top + host.offset_top(&entry.element),
                element_extent: host.extent(&entry.element),
                element_viewport_top: host.viewport_top(&entry.element),
            };
            if let Some(transition) = resolve(&geometry, entry.margins, direction, entry.state) {
                host.apply_patch(&entry.element, &transition.patch);
                entry.state = transition.state;
            }
        }
        self.gate.complete();
    }

    /// The current positioning state of the first entry watching `element`,
    /// or `None` if it is not watched.
    #[must_use]
    pub fn state_of(&self, element: &H::Node) -> Option<PinState> {
        self.entries
            .iter()
            .find(|entry| entry.element == *element)
            .map(|entry| entry.state)
    }

    /// Number of watched entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are watched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
