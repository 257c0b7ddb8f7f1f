// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=affix_engine --heading-base-level=0

//! Affix Engine: the pure decision core for container-bounded sticky
//! positioning.
//!
//! A sticky element alternates between being pinned to an edge of the
//! viewport and being pinned to an edge of its bounding container as the
//! page scrolls, without ever visually escaping the container. This crate
//! holds the part of that behavior with actual decision logic and nothing
//! else:
//!
//! - [`Geometry`]: a per-evaluation snapshot of the measurements the
//!   decision needs (scroll offset, viewport extent, container and element
//!   positions).
//! - [`PinState`]: the four positioning states a watched element moves
//!   through.
//! - [`StylePatch`]: the exhaustive three-field style write that realizes a
//!   state, with unset fields cleared explicitly.
//! - [`DirectionTracker`]: derives an up/down signal from successive scroll
//!   offsets, classifying zero-delta frames as [`ScrollDirection::Up`].
//! - [`resolve`]: the transition function. Given a snapshot, the pin
//!   margins, the scroll direction, and the current state, it either
//!   produces the next state plus its style patch or reports that the
//!   element is settled.
//!
//! ## Design Philosophy
//!
//! The engine is a pure function over plain data. It does not subscribe to
//! scroll events, schedule frames, measure layout, or write styles; hosts
//! feed it snapshots and commit the patches it returns. This keeps every
//! geometric predicate and tie-break testable in isolation, with no DOM or
//! frame loop in sight. Registration bookkeeping and frame pacing live in
//! `affix_watch`; concrete DOM wiring lives in `affix_web`.
//!
//! ## Minimal example
//!
//! ```rust
//! use affix_engine::{Geometry, PinMargins, PinState, ScrollDirection, resolve};
//!
//! // Viewport 800px tall, scrolled 400px into the document. The watched
//! // element sits at the top of a 2000px container starting at offset 500.
//! let geometry = Geometry {
//!     scroll: 400.0,
//!     viewport_extent: 800.0,
//!     container_top: 500.0,
//!     container_extent: 2000.0,
//!     element_top: 500.0,
//!     element_extent: 100.0,
//!     element_viewport_top: 100.0,
//! };
//!
//! // Scrolling down with the viewport bottom past the element, but still
//! // inside the container, pins the element to the viewport's bottom edge.
//! let transition = resolve(
//!     &geometry,
//!     PinMargins::default(),
//!     ScrollDirection::Down,
//!     PinState::AbsoluteTop,
//! )
//! .expect("viewport bottom overtook the element while scrolling down");
//! assert_eq!(transition.state, PinState::FixedBottom);
//!
//! // Re-evaluating the same snapshot from the new state is a no-op: settled
//! // elements generate zero style writes.
//! assert!(resolve(&geometry, PinMargins::default(), ScrollDirection::Down, transition.state).is_none());
//! ```
//!
//! All offsets and extents live in CSS pixel space as `f64` and are expected
//! to be finite. This crate is `no_std` and allocation-free.

#![no_std]

mod direction;
mod geometry;
mod patch;
mod resolve;
mod state;

pub use direction::{DirectionTracker, ScrollDirection};
pub use geometry::{Geometry, PinMargins};
pub use patch::{PositionMode, StyleOffset, StylePatch};
pub use resolve::{Transition, resolve};
pub use state::PinState;
