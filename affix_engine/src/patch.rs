// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style write that realizes a pin state.

/// Positioning scheme written to a node's `position` property.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PositionMode {
    /// Viewport-relative positioning (`position: fixed`).
    Fixed,
    /// Container-relative positioning (`position: absolute`).
    Absolute,
    /// The property is removed.
    Unset,
}

/// One vertical inset value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleOffset {
    /// Concrete inset in CSS pixels.
    Px(f64),
    /// The property is removed.
    Unset,
}

/// The full set of style fields a transition writes to a node.
///
/// Appliers must commit all three fields. [`PositionMode::Unset`] and
/// [`StyleOffset::Unset`] mean "remove the property", never "leave it as
/// is", so a value from a prior state cannot linger after a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StylePatch {
    /// Positioning scheme.
    pub position: PositionMode,
    /// Inset from the top edge of the positioning context.
    pub top: StyleOffset,
    /// Inset from the bottom edge of the positioning context.
    pub bottom: StyleOffset,
}

impl StylePatch {
    /// Base configuration applied at registration.
    ///
    /// Takes the element out of normal flow with both insets unset, which
    /// preserves its visual offset while making its own top offset
    /// meaningful for later geometry reads.
    pub const DETACHED: Self = Self {
        position: PositionMode::Absolute,
        top: StyleOffset::Unset,
        bottom: StyleOffset::Unset,
    };

    /// Fully unset configuration applied when a node stops being watched.
    pub const CLEARED: Self = Self {
        position: PositionMode::Unset,
        top: StyleOffset::Unset,
        bottom: StyleOffset::Unset,
    };

    /// Pins to the viewport's top edge, `top` pixels down.
    #[must_use]
    pub const fn fixed_top(top: f64) -> Self {
        Self {
            position: PositionMode::Fixed,
            top: StyleOffset::Px(top),
            bottom: StyleOffset::Unset,
        }
    }

    /// Pins to the viewport's bottom edge, `bottom` pixels up.
    #[must_use]
    pub const fn fixed_bottom(bottom: f64) -> Self {
        Self {
            position: PositionMode::Fixed,
            top: StyleOffset::Unset,
            bottom: StyleOffset::Px(bottom),
        }
    }

    /// Rests `top` pixels below the container's top edge.
    #[must_use]
    pub const fn absolute_top(top: f64) -> Self {
        Self {
            position: PositionMode::Absolute,
            top: StyleOffset::Px(top),
            bottom: StyleOffset::Unset,
        }
    }

    /// Rests `bottom` pixels above the container's bottom edge.
    #[must_use]
    pub const fn absolute_bottom(bottom: f64) -> Self {
        Self {
            position: PositionMode::Absolute,
            top: StyleOffset::Unset,
            bottom: StyleOffset::Px(bottom),
        }
    }
}
