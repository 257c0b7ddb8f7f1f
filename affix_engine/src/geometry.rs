// Copyright 2025 the Affix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry snapshot taken fresh for each evaluation.

/// Pixel offsets from the viewport edges at which an element pins while
/// fixed.
///
/// Typical use is reserving room for a viewport-pinned header (`top`) or
/// footer (`bottom`). Both default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinMargins {
    /// Distance kept from the viewport's top edge while pinned on top.
    pub top: f64,
    /// Distance kept from the viewport's bottom edge while pinned on the
    /// bottom.
    pub bottom: f64,
}

impl PinMargins {
    /// Creates margins with the given top and bottom reservations.
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Measurements of one element/container pair at a single point in time.
///
/// All values are in CSS pixels. Vertical positions (`container_top`,
/// `element_top`) are document-relative except `element_viewport_top`,
/// which is the top of the element's bounding rect in viewport coordinates
/// (a live layout read, meaningful while the element is pinned).
///
/// The snapshot is supplied by the hosting environment; the engine never
/// measures anything itself and treats the values as ground truth for one
/// evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Current vertical scroll offset of the document.
    pub scroll: f64,
    /// Height of the viewport.
    pub viewport_extent: f64,
    /// Document-relative top of the bounding container.
    pub container_top: f64,
    /// Height of the bounding container.
    pub container_extent: f64,
    /// Document-relative top of the watched element.
    pub element_top: f64,
    /// Height of the watched element.
    pub element_extent: f64,
    /// Viewport-relative top of the watched element.
    pub element_viewport_top: f64,
}

impl Geometry {
    /// The viewport line below which a top-pinned element would start
    /// overlapping content.
    #[must_use]
    pub fn window_top(&self, margins: PinMargins) -> f64 {
        self.scroll + margins.top
    }

    /// The viewport line above which a bottom-pinned element would start
    /// overlapping content.
    #[must_use]
    pub fn window_bottom(&self, margins: PinMargins) -> f64 {
        self.scroll + self.viewport_extent - margins.bottom
    }

    /// Document-relative bottom of the bounding container.
    #[must_use]
    pub fn container_bottom(&self) -> f64 {
        self.container_top + self.container_extent
    }

    /// Document-relative bottom of the watched element.
    #[must_use]
    pub fn element_bottom(&self) -> f64 {
        self.element_top + self.element_extent
    }
}
