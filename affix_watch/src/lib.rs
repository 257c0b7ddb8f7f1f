// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=affix_watch --heading-base-level=0

//! Affix Watch: registry and frame pacing for container-bounded sticky
//! elements.
//!
//! This crate drives the pure decision core in `affix_engine` against a
//! hosting environment. It provides:
//!
//! - [`StickyHost`]: the seam to the host. Layout measurements and style
//!   writes happen through this trait over an opaque node handle type, so
//!   the registry works against real DOM nodes, arena indices, or test
//!   fixtures alike.
//! - [`Watcher`]: the registry of watched elements. `add` and `remove`
//!   manage entries; `run_pass` evaluates every entry once against the
//!   current scroll offset and commits the style patches of whatever
//!   transitions fire.
//! - [`FrameGate`]: the pending flag that coalesces scroll-event bursts
//!   into at most one evaluation pass per rendered frame.
//!
//! ## Design Philosophy
//!
//! The watcher holds exactly the state the behavior needs: the entry list,
//! the last scroll offset, and the gate flag. It owns no reference to the
//! host; every driver method borrows it explicitly. Besides keeping the
//! crate free of any particular UI stack, the explicit borrow means the
//! registry cannot be mutated from inside an evaluation pass, so removal
//! during iteration is a compile error rather than a runtime hazard.
//! Everything here is single-threaded and frame-driven; the only
//! "concurrency" is the frame gate dropping redundant notifications.
//!
//! ## Minimal example
//!
//! ```rust
//! use affix_engine::{PinMargins, PinState, StylePatch};
//! use affix_watch::{StickyHost, Watcher};
//!
//! // A toy page: node 0 is a 100px element at the top of node 1, a 2000px
//! // container starting 500px into the document, in an 800px viewport.
//! struct Page {
//!     scroll: f64,
//!     applied: Vec<(u32, StylePatch)>,
//! }
//!
//! impl StickyHost for Page {
//!     type Node = u32;
//!
//!     fn layout_parent(&self, node: &u32) -> Option<u32> {
//!         (*node == 0).then_some(1)
//!     }
//!     fn is_statically_positioned(&self, _node: &u32) -> bool {
//!         false
//!     }
//!     fn promote_to_positioned(&mut self, _node: &u32) {}
//!     fn apply_patch(&mut self, node: &u32, patch: &StylePatch) {
//!         self.applied.push((*node, *patch));
//!     }
//!     fn scroll_offset(&self) -> f64 {
//!         self.scroll
//!     }
//!     fn viewport_extent(&self) -> f64 {
//!         800.0
//!     }
//!     fn offset_top(&self, node: &u32) -> f64 {
//!         if *node == 1 { 500.0 } else { 0.0 }
//!     }
//!     fn extent(&self, node: &u32) -> f64 {
//!         if *node == 1 { 2000.0 } else { 100.0 }
//!     }
//!     fn viewport_top(&self, _node: &u32) -> f64 {
//!         0.0
//!     }
//! }
//!
//! let mut page = Page { scroll: 0.0, applied: Vec::new() };
//! let mut watcher = Watcher::new();
//!
//! // Watch the element; the container defaults to its layout parent.
//! watcher.add(&mut page, 0, None, PinMargins::default());
//! assert_eq!(watcher.state_of(&0), Some(PinState::AbsoluteTop));
//!
//! // A burst of scroll events coalesces into one pass on the next frame.
//! page.scroll = 300.0;
//! assert!(watcher.notify_scroll());
//! assert!(!watcher.notify_scroll());
//! watcher.run_pass(&mut page);
//!
//! // Scrolling down pinned the element to the viewport's bottom edge.
//! assert_eq!(watcher.state_of(&0), Some(PinState::FixedBottom));
//! ```
//!
//! A live DOM implementation of [`StickyHost`] ships in `affix_web`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod gate;
mod host;
mod watcher;

pub use gate::FrameGate;
pub use host::StickyHost;
pub use watcher::Watcher;
