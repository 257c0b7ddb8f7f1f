// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=affix_web --heading-base-level=0

//! Affix Web: the live DOM host for container-bounded sticky elements.
//!
//! This crate connects the renderer-agnostic registry in `affix_watch` to a
//! real browser page when targeting `wasm32`:
//!
//! - [`DomHost`] implements `affix_watch::StickyHost` over
//!   `web_sys::HtmlElement` nodes: layout queries go through `offsetTop`,
//!   `offsetHeight`, and `getBoundingClientRect`, and style patches are
//!   committed to the element's inline style.
//! - [`Sticky`] owns a `DomHost` plus a watcher and wires them to the page:
//!   construction attaches a window `scroll` listener, bursts of scroll
//!   events coalesce into one evaluation per `requestAnimationFrame`, and
//!   dropping the value detaches the listener again.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn watch_sidebar(
//!     sidebar: web_sys::HtmlElement,
//! ) -> Result<affix_web::Sticky, wasm_bindgen::JsValue> {
//!     let sticky = affix_web::Sticky::new()?;
//!     // Bounded by its layout parent, pinned 16px below the viewport top.
//!     sticky.add(sidebar, None, affix_web::PinMargins::new(16.0, 0.0));
//!     Ok(sticky)
//! }
//! ```
//!
//! Notes:
//! - Failed style writes and frame-scheduling failures are logged through
//!   the `log` facade and otherwise skipped; measurement getters fall back
//!   to zero. There are no recoverable failure states in this layer.
//! - Dropping a [`Sticky`] stops watching but leaves the last applied
//!   styles in place; call [`Sticky::remove`] per element first to restore
//!   their unset style configuration.
//!
//! On other targets the crate compiles to the re-exports alone.

#![no_std]

extern crate alloc;

pub use affix_engine::{PinMargins, PinState, StylePatch};

#[cfg(target_arch = "wasm32")]
use alloc::format;
#[cfg(target_arch = "wasm32")]
use alloc::rc::Rc;
#[cfg(target_arch = "wasm32")]
use alloc::string::String;
#[cfg(target_arch = "wasm32")]
use core::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use core::fmt;

#[cfg(target_arch = "wasm32")]
use affix_engine::{PositionMode, StyleOffset};
#[cfg(target_arch = "wasm32")]
use affix_watch::{StickyHost, Watcher};
#[cfg(target_arch = "wasm32")]
use log::error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{CssStyleDeclaration, HtmlElement, Window};

/// Writes or removes one inline style property, best-effort.
#[cfg(target_arch = "wasm32")]
fn set_or_clear(style: &CssStyleDeclaration, property: &str, value: Option<&str>) {
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
    if let Err(err) = result {
        error!("failed to write style property {property}: {err:?}");
    }
}

#[cfg(target_arch = "wasm32")]
fn offset_value(offset: StyleOffset) -> Option<String> {
    match offset {
        StyleOffset::Px(px) => Some(format!("{px}px")),
        StyleOffset::Unset => None,
    }
}

/// `affix_watch::StickyHost` over live DOM nodes.
///
/// Measurements come from the layout queries the browser exposes on
/// elements; style patches go to the element's inline style. All writes are
/// best-effort: a failing `web-sys` call is logged and skipped, since a
/// sticky element that misses one style write self-corrects on the next
/// transition.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct DomHost {
    window: Window,
}

#[cfg(target_arch = "wasm32")]
impl DomHost {
    /// Creates a host measuring against the given window.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Creates a host for the global window, if there is one.
    #[must_use]
    pub fn from_global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    /// The window this host measures against.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }
}

#[cfg(target_arch = "wasm32")]
impl StickyHost for DomHost {
    type Node = HtmlElement;

    fn layout_parent(&self, node: &HtmlElement) -> Option<HtmlElement> {
        node.parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    }

    fn is_statically_positioned(&self, node: &HtmlElement) -> bool {
        match self.window.get_computed_style(node) {
            Ok(Some(style)) => {
                let position = style.get_property_value("position").unwrap_or_default();
                position.is_empty() || position == "static"
            }
            // No computed style means a detached node; there is nothing to
            // promote.
            _ => false,
        }
    }

    fn promote_to_positioned(&mut self, node: &HtmlElement) {
        if let Err(err) = node.style().set_property("position", "relative") {
            error!("failed to promote a container to a positioning context: {err:?}");
        }
    }

    fn apply_patch(&mut self, node: &HtmlElement, patch: &StylePatch) {
        let style = node.style();
        let position = match patch.position {
            PositionMode::Fixed => Some("fixed"),
            PositionMode::Absolute => Some("absolute"),
            PositionMode::Unset => None,
        };
        set_or_clear(&style, "position", position);
        set_or_clear(&style, "top", offset_value(patch.top).as_deref());
        set_or_clear(&style, "bottom", offset_value(patch.bottom).as_deref());
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn viewport_extent(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default()
    }

    fn offset_top(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_top())
    }

    fn extent(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_height())
    }

    fn viewport_top(&self, node: &HtmlElement) -> f64 {
        node.get_bounding_client_rect().top()
    }
}

#[cfg(target_arch = "wasm32")]
struct Registry {
    host: DomHost,
    watcher: Watcher<DomHost>,
}

/// Watches DOM elements for as long as the value lives.
///
/// Construction attaches a `scroll` listener to the window. Each burst of
/// scroll events schedules at most one evaluation pass through
/// `requestAnimationFrame`; the pass reads the scroll offset current when
/// the frame fires. Dropping the value detaches the listener.
#[cfg(target_arch = "wasm32")]
pub struct Sticky {
    registry: Rc<RefCell<Registry>>,
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for Sticky {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sticky")
            .field("watched", &self.registry.borrow().watcher.len())
            .finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
impl Sticky {
    /// Attaches to the global window.
    ///
    /// # Errors
    ///
    /// Fails when there is no global window or the scroll listener cannot
    /// be attached.
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        Self::with_window(window)
    }

    /// Attaches to the given window.
    ///
    /// # Errors
    ///
    /// Fails when the scroll listener cannot be attached.
    pub fn with_window(window: Window) -> Result<Self, JsValue> {
        let registry = Rc::new(RefCell::new(Registry {
            host: DomHost::new(window.clone()),
            watcher: Watcher::new(),
        }));

        let on_frame: Rc<Closure<dyn FnMut()>> = {
            let registry = Rc::clone(&registry);
            Rc::new(Closure::new(move || {
                let registry = &mut *registry.borrow_mut();
                registry.watcher.run_pass(&mut registry.host);
            }))
        };

        let on_scroll: Closure<dyn FnMut()> = {
            let registry = Rc::clone(&registry);
            let window = window.clone();
            Closure::new(move || {
                if !registry.borrow_mut().watcher.notify_scroll() {
                    return;
                }
                let callback = (*on_frame).as_ref().unchecked_ref();
                if let Err(err) = window.request_animation_frame(callback) {
                    error!("failed to schedule an evaluation frame: {err:?}");
                }
            })
        };

        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;

        Ok(Self {
            registry,
            window,
            on_scroll,
        })
    }

    /// Registers `element` as a sticky target bounded by `container`, or by
    /// its layout parent when `container` is `None`.
    ///
    /// A statically-positioned container is promoted to `position:
    /// relative`; the element is placed immediately, before any further
    /// scrolling.
    pub fn add(&self, element: HtmlElement, container: Option<HtmlElement>, margins: PinMargins) {
        let registry = &mut *self.registry.borrow_mut();
        registry
            .watcher
            .add(&mut registry.host, element, container, margins);
    }

    /// Stops watching `element` and restores its unset style configuration.
    ///
    /// Returns `false` when the element was not being watched; nothing is
    /// written in that case.
    pub fn remove(&self, element: &HtmlElement) -> bool {
        let registry = &mut *self.registry.borrow_mut();
        registry.watcher.remove(&mut registry.host, element)
    }

    /// Forces one immediate evaluation pass, e.g. after a layout change
    /// unrelated to scrolling.
    pub fn trigger(&self) {
        let registry = &mut *self.registry.borrow_mut();
        registry.watcher.trigger(&mut registry.host);
    }

    /// The current positioning state of `element`, or `None` if it is not
    /// watched.
    #[must_use]
    pub fn state_of(&self, element: &HtmlElement) -> Option<PinState> {
        self.registry.borrow().watcher.state_of(element)
    }

    /// Number of watched elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().watcher.len()
    }

    /// Whether no elements are watched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.borrow().watcher.is_empty()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for Sticky {
    fn drop(&mut self) {
        let listener = self.on_scroll.as_ref().unchecked_ref();
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", listener)
        {
            error!("failed to detach the scroll listener: {err:?}");
        }
    }
}
