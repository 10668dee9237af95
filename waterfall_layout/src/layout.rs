// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Rect, Size};
use tracing::{trace, trace_span};

use crate::axis::Axis;
use crate::error::LayoutError;
use crate::section::{self, layout_section};
use crate::source::LayoutSource;
use crate::style::{LayoutStyle, ResolvedStyle};

/// Which kind of element a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A section header.
    Header,
    /// An item.
    Item,
    /// A section footer.
    Footer,
}

/// The computed placement of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementFrame {
    /// The section the element belongs to.
    pub section: usize,
    /// The element's index within its section. Always 0 for headers and
    /// footers.
    pub index: usize,
    /// Whether this is a header, item, or footer frame.
    pub kind: ElementKind,
    /// The line the element was assigned to. `None` for headers and
    /// footers, which span the full breadth.
    pub line: Option<usize>,
    /// The element's position and size in container coordinates.
    pub rect: Rect,
}

/// The immutable result of one layout pass.
///
/// A snapshot is pure output: re-querying it never recomputes anything.
/// When the underlying items or styling change, the host runs a fresh
/// [`WaterfallLayout::compute`] and replaces the snapshot wholesale; there
/// is no incremental patching.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    frames: Vec<ElementFrame>,
    content_size: Size,
}

impl LayoutSnapshot {
    /// All frames, in section order; within a section the header comes
    /// first, then items in index order, then the footer.
    pub fn frames(&self) -> &[ElementFrame] {
        &self.frames
    }

    /// The extent of the whole collection.
    ///
    /// The main-axis component is the accumulated extent of all sections;
    /// the cross-axis component is the container breadth the layout was
    /// computed with.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// The frames intersecting `rect`, typically the visible viewport.
    pub fn frames_in_rect(&self, rect: Rect) -> impl Iterator<Item = &ElementFrame> {
        self.frames
            .iter()
            .filter(move |frame| !frame.rect.intersect(rect).is_zero_area())
    }

    /// The frame of one item, if the item exists.
    pub fn item_frame(&self, section: usize, item: usize) -> Option<&ElementFrame> {
        self.frames.iter().find(|frame| {
            frame.kind == ElementKind::Item && frame.section == section && frame.index == item
        })
    }
}

/// A waterfall (masonry) layout solver.
///
/// Items are distributed into a fixed number of parallel lines (columns in
/// a [`Vertical`](Axis::Vertical) layout, rows in a
/// [`Horizontal`](Axis::Horizontal) one), each line growing independently
/// along the scroll direction. The solver holds only the scroll direction
/// and global styling; items and per-section overrides are pulled from a
/// [`LayoutSource`] on every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallLayout {
    axis: Axis,
    style: LayoutStyle,
}

impl Default for WaterfallLayout {
    fn default() -> Self {
        Self::new(Axis::Vertical)
    }
}

impl WaterfallLayout {
    /// Creates a layout scrolling along `axis`, with default styling.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            style: LayoutStyle::default(),
        }
    }

    /// Builder-style method to set the global styling defaults.
    pub fn with_style(mut self, style: LayoutStyle) -> Self {
        self.style = style;
        self
    }

    /// The scroll direction.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The global styling defaults.
    pub fn style(&self) -> &LayoutStyle {
        &self.style
    }

    /// The cross-axis width of one line in `section`, for a container of
    /// size `bounds`.
    ///
    /// Exposed so callers can pre-size content without running a full
    /// layout pass.
    pub fn line_width(
        &self,
        source: &dyn LayoutSource,
        bounds: Size,
        section: usize,
    ) -> Result<f64, LayoutError> {
        let num_sections = source.num_sections();
        if section >= num_sections {
            return Err(LayoutError::SectionOutOfBounds {
                section,
                num_sections,
            });
        }
        let style = ResolvedStyle::resolve(&self.style, source, section)?;
        Ok(section::line_width(&style, self.axis, bounds))
    }

    /// Runs one layout pass over everything the source reports.
    ///
    /// This is a pure function of the source's answers, the styling, and
    /// `bounds`: the same inputs always produce the same snapshot. Sections
    /// are laid out in index order, each starting where the previous one
    /// ended.
    pub fn compute(
        &self,
        source: &dyn LayoutSource,
        bounds: Size,
    ) -> Result<LayoutSnapshot, LayoutError> {
        let num_sections = source.num_sections();
        let _span = trace_span!("waterfall_layout", sections = num_sections).entered();

        let mut frames = Vec::new();
        let mut offset = 0.;
        for section in 0..num_sections {
            let style = ResolvedStyle::resolve(&self.style, source, section)?;
            let built = layout_section(self.axis, &style, source, section, bounds, offset);
            trace!(
                section,
                extent = built.extent,
                frames = built.frames.len(),
                "laid out section"
            );
            offset += built.extent;
            frames.extend(built.frames);
        }

        Ok(LayoutSnapshot {
            frames,
            content_size: self.axis.pack_size(offset, self.axis.minor(bounds)),
        })
    }
}
