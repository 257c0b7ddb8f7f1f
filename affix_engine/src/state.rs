// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning states a watched element moves through.

/// The last-applied positioning mode of a watched element.
///
/// The two `Absolute` states are resting states: the element is positioned
/// relative to its container and scrolls with the page. The two `Fixed`
/// states are pinned states: the element is positioned relative to the
/// viewport and appears to stay put while the page scrolls underneath.
///
/// State only changes through [`resolve`](crate::resolve); the variant a
/// transition targets also determines which style patch realizes it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PinState {
    /// Resting against the container's top edge. Initial state at
    /// registration.
    #[default]
    AbsoluteTop,
    /// Resting against the container's bottom edge.
    AbsoluteBottom,
    /// Pinned to the viewport's top edge, offset by the top margin.
    FixedTop,
    /// Pinned to the viewport's bottom edge, offset by the bottom margin.
    FixedBottom,
}

#[cfg(test)]
mod tests {
    use super::PinState;

    #[test]
    fn default_state_is_absolute_top() {
        assert_eq!(PinState::default(), PinState::AbsoluteTop);
    }
}
