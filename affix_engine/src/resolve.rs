// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll-driven position-transition function.

use crate::direction::ScrollDirection;
use crate::geometry::{Geometry, PinMargins};
use crate::patch::StylePatch;
use crate::state::PinState;

/// A state change produced by [`resolve`], together with the style patch
/// that realizes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// The state the element moves into.
    pub state: PinState,
    /// The style write that puts the element there.
    pub patch: StylePatch,
}

/// Decides whether a watched element changes positioning state this pass.
///
/// Six predicates are evaluated in a fixed order; every predicate that
/// matches overwrites the pending transition, so when several match in the
/// same pass the last one wins. The ordering is a deliberate tie-break: the
/// fixed-to-absolute handoffs sit after the plain edge pins so that leaving
/// a pin takes precedence over re-entering one, and the container-edge
/// rests come last.
///
/// Returns `None` when no predicate matches, which is the common case while
/// an element rides along in a stable state; callers must then leave both
/// the stored state and the node's style untouched.
#[must_use]
pub fn resolve(
    geometry: &Geometry,
    margins: PinMargins,
    direction: ScrollDirection,
    state: PinState,
) -> Option<Transition> {
    let window_top = geometry.window_top(margins);
    let window_bottom = geometry.window_bottom(margins);
    let container_top = geometry.container_top;
    let container_bottom = geometry.container_bottom();
    let element_top = geometry.element_top;
    let element_bottom = geometry.element_bottom();

    let mut next = None;

    // Scrolling down, viewport bottom past the element but not yet past the
    // container: pin to the viewport's bottom edge.
    if window_bottom > element_bottom
        && window_bottom < container_bottom
        && direction == ScrollDirection::Down
        && state != PinState::FixedBottom
    {
        next = Some(Transition {
            state: PinState::FixedBottom,
            patch: StylePatch::fixed_bottom(margins.bottom),
        });
    }

    // Scrolling up, viewport top at or above the element while still inside
    // the container: pin to the viewport's top edge.
    if window_top <= element_top
        && window_top > container_top
        && direction == ScrollDirection::Up
        && state != PinState::FixedTop
    {
        next = Some(Transition {
            state: PinState::FixedTop,
            patch: StylePatch::fixed_top(margins.top),
        });
    }

    // Scrolling up out of a bottom pin: drop the element at the container
    // offset matching its current viewport position, so the handoff from
    // fixed to absolute is seamless.
    if window_top <= container_bottom
        && window_top > container_top
        && direction == ScrollDirection::Up
        && state == PinState::FixedBottom
    {
        next = Some(Transition {
            state: PinState::AbsoluteBottom,
            patch: StylePatch::absolute_bottom(container_bottom - window_bottom),
        });
    }

    // Scrolling down out of a top pin: same seamless handoff, anchored from
    // the top.
    if window_bottom > container_top
        && window_bottom < container_bottom
        && direction == ScrollDirection::Down
        && state == PinState::FixedTop
    {
        next = Some(Transition {
            state: PinState::AbsoluteTop,
            patch: StylePatch::absolute_top(
                window_top - container_top - geometry.element_viewport_top,
            ),
        });
    }

    // Viewport top at or above the container: rest against the container's
    // top edge.
    if window_top <= container_top
        && direction == ScrollDirection::Up
        && state != PinState::AbsoluteTop
    {
        next = Some(Transition {
            state: PinState::AbsoluteTop,
            patch: StylePatch::absolute_top(0.0),
        });
    }

    // Viewport bottom past the container: rest against the container's
    // bottom edge.
    if window_bottom > container_bottom
        && direction == ScrollDirection::Down
        && state != PinState::AbsoluteBottom
    {
        next = Some(Transition {
            state: PinState::AbsoluteBottom,
            patch: StylePatch::absolute_bottom(0.0),
        });
    }

    next
}

#[cfg(test)]
mod tests {
    use super::{Transition, resolve};
    use crate::direction::ScrollDirection;
    use crate::geometry::{Geometry, PinMargins};
    use crate::patch::{PositionMode, StyleOffset, StylePatch};
    use crate::state::PinState;

    // Container spanning 500..2500 in an 800px viewport, with a 100px
    // element resting at the container's top.
    fn geometry_at(scroll: f64) -> Geometry {
        Geometry {
            scroll,
            viewport_extent: 800.0,
            container_top: 500.0,
            container_extent: 2000.0,
            element_top: 500.0,
            element_extent: 100.0,
            element_viewport_top: 0.0,
        }
    }

    #[test]
    fn down_past_element_pins_to_viewport_bottom() {
        let transition = resolve(
            &geometry_at(100.0),
            PinMargins::default(),
            ScrollDirection::Down,
            PinState::AbsoluteTop,
        )
        .expect("viewport bottom is past the element and inside the container");
        assert_eq!(transition.state, PinState::FixedBottom);
        assert_eq!(transition.patch, StylePatch::fixed_bottom(0.0));
    }

    #[test]
    fn bottom_pin_honors_the_bottom_margin() {
        let margins = PinMargins::new(0.0, 30.0);
        let transition = resolve(
            &geometry_at(100.0),
            margins,
            ScrollDirection::Down,
            PinState::AbsoluteTop,
        )
        .expect("viewport bottom is past the element and inside the container");
        assert_eq!(transition.patch, StylePatch::fixed_bottom(30.0));
    }

    #[test]
    fn up_at_element_pins_to_viewport_top() {
        // Element resting near the container's bottom; viewport top reaches it
        // on the way up.
        let geometry = Geometry {
            element_top: 2300.0,
            ..geometry_at(2200.0)
        };
        let transition = resolve(
            &geometry,
            PinMargins::default(),
            ScrollDirection::Up,
            PinState::AbsoluteBottom,
        )
        .expect("viewport top is at the element and inside the container");
        assert_eq!(transition.state, PinState::FixedTop);
        assert_eq!(transition.patch, StylePatch::fixed_top(0.0));
    }

    #[test]
    fn up_out_of_a_bottom_pin_hands_off_to_absolute() {
        let transition = resolve(
            &geometry_at(1600.0),
            PinMargins::default(),
            ScrollDirection::Up,
            PinState::FixedBottom,
        )
        .expect("viewport top is inside the container while pinned on the bottom");
        assert_eq!(transition.state, PinState::AbsoluteBottom);
        // container_bottom 2500 minus window_bottom 2400.
        assert_eq!(transition.patch, StylePatch::absolute_bottom(100.0));
    }

    #[test]
    fn bottom_handoff_inset_is_non_negative_at_the_boundary() {
        // The handoff can only fire while window_bottom <= container_bottom
        // (otherwise the element would still be pinned), so the computed
        // inset never goes negative right at the transition frame.
        for scroll in [1699.0, 1700.0] {
            let geometry = geometry_at(scroll);
            if let Some(Transition { patch, .. }) = resolve(
                &geometry,
                PinMargins::default(),
                ScrollDirection::Up,
                PinState::FixedBottom,
            ) {
                let expected =
                    geometry.container_bottom() - geometry.window_bottom(PinMargins::default());
                assert_eq!(patch, StylePatch::absolute_bottom(expected));
                assert!(expected >= 0.0, "handoff inset must not be negative");
            }
        }
    }

    #[test]
    fn down_out_of_a_top_pin_hands_off_to_absolute() {
        let geometry = Geometry {
            element_viewport_top: 0.0,
            ..geometry_at(900.0)
        };
        let transition = resolve(
            &geometry,
            PinMargins::default(),
            ScrollDirection::Down,
            PinState::FixedTop,
        )
        .expect("viewport bottom is inside the container while pinned on top");
        assert_eq!(transition.state, PinState::AbsoluteTop);
        // window_top 900 minus container_top 500 minus viewport top 0.
        assert_eq!(transition.patch, StylePatch::absolute_top(400.0));
    }

    #[test]
    fn top_handoff_subtracts_the_live_viewport_offset() {
        let geometry = Geometry {
            element_viewport_top: 60.0,
            ..geometry_at(900.0)
        };
        let transition = resolve(
            &geometry,
            PinMargins::default(),
            ScrollDirection::Down,
            PinState::FixedTop,
        )
        .expect("viewport bottom is inside the container while pinned on top");
        assert_eq!(transition.patch, StylePatch::absolute_top(340.0));
    }

    #[test]
    fn up_past_the_container_rests_on_its_top_edge() {
        let transition = resolve(
            &geometry_at(400.0),
            PinMargins::default(),
            ScrollDirection::Up,
            PinState::FixedTop,
        )
        .expect("viewport top is above the container");
        assert_eq!(transition.state, PinState::AbsoluteTop);
        assert_eq!(transition.patch, StylePatch::absolute_top(0.0));
    }

    #[test]
    fn down_past_the_container_rests_on_its_bottom_edge() {
        let transition = resolve(
            &geometry_at(1800.0),
            PinMargins::default(),
            ScrollDirection::Down,
            PinState::FixedBottom,
        )
        .expect("viewport bottom is past the container");
        assert_eq!(transition.state, PinState::AbsoluteBottom);
        assert_eq!(transition.patch, StylePatch::absolute_bottom(0.0));
    }

    #[test]
    fn settled_states_produce_no_transition() {
        // Already pinned on the bottom while scrolling down.
        assert!(
            resolve(
                &geometry_at(100.0),
                PinMargins::default(),
                ScrollDirection::Down,
                PinState::FixedBottom,
            )
            .is_none()
        );
        // Already resting on top with the viewport above the container.
        assert!(
            resolve(
                &geometry_at(0.0),
                PinMargins::default(),
                ScrollDirection::Up,
                PinState::AbsoluteTop,
            )
            .is_none()
        );
        // Already resting on the bottom with the viewport past the container.
        assert!(
            resolve(
                &geometry_at(1900.0),
                PinMargins::default(),
                ScrollDirection::Down,
                PinState::AbsoluteBottom,
            )
            .is_none()
        );
    }

    #[test]
    fn resolving_twice_from_the_new_state_is_idempotent() {
        let geometry = geometry_at(100.0);
        let transition = resolve(
            &geometry,
            PinMargins::default(),
            ScrollDirection::Down,
            PinState::AbsoluteTop,
        )
        .expect("first evaluation transitions");
        assert!(
            resolve(
                &geometry,
                PinMargins::default(),
                ScrollDirection::Down,
                transition.state,
            )
            .is_none(),
            "unchanged geometry must not transition again"
        );
    }

    #[test]
    fn top_pin_and_bottom_handoff_overlap_resolves_to_the_handoff() {
        // Scrolling up while pinned on the bottom, with the viewport top both
        // at the element and inside the container: the viewport-top pin and
        // the fixed-to-absolute handoff both match, and the later handoff
        // wins.
        let geometry = Geometry {
            element_top: 2300.0,
            ..geometry_at(2200.0)
        };
        let transition = resolve(
            &geometry,
            PinMargins::default(),
            ScrollDirection::Up,
            PinState::FixedBottom,
        )
        .expect("both predicates match");
        assert_eq!(transition.state, PinState::AbsoluteBottom);
    }

    #[test]
    fn bottom_pin_and_top_handoff_overlap_resolves_to_the_handoff() {
        // Scrolling down while pinned on top, with the viewport bottom past
        // the element but inside the container: the viewport-bottom pin and
        // the fixed-to-absolute handoff both match, and the later handoff
        // wins.
        let transition = resolve(
            &geometry_at(900.0),
            PinMargins::default(),
            ScrollDirection::Down,
            PinState::FixedTop,
        )
        .expect("both predicates match");
        assert_eq!(transition.state, PinState::AbsoluteTop);
    }

    #[test]
    fn fast_jump_past_a_short_container_skips_the_handoff() {
        // A container barely taller than the element: one wheel notch moves
        // the viewport bottom clear past the container, so the element goes
        // straight from a top pin to resting on the container's bottom edge
        // without an intermediate handoff.
        let geometry = Geometry {
            scroll: 550.0,
            viewport_extent: 800.0,
            container_top: 500.0,
            container_extent: 700.0,
            element_top: 500.0,
            element_extent: 100.0,
            element_viewport_top: 0.0,
        };
        let transition = resolve(
            &geometry,
            PinMargins::default(),
            ScrollDirection::Down,
            PinState::FixedTop,
        )
        .expect("viewport bottom is past the short container");
        assert_eq!(transition.state, PinState::AbsoluteBottom);
        assert_eq!(transition.patch, StylePatch::absolute_bottom(0.0));
    }

    #[test]
    fn patches_always_write_all_three_fields() {
        // Every transition patch either sets or explicitly unsets each
        // field, so appliers can never leave a stale inset behind.
        let geometry = geometry_at(100.0);
        let transition = resolve(
            &geometry,
            PinMargins::default(),
            ScrollDirection::Down,
            PinState::AbsoluteTop,
        )
        .expect("transition fires");
        assert_eq!(transition.patch.position, PositionMode::Fixed);
        assert_eq!(transition.patch.top, StyleOffset::Unset);
        assert_eq!(transition.patch.bottom, StyleOffset::Px(0.0));
    }
}
