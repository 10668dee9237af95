// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Insets, Size};

/// The pull-based query interface a layout pass reads its input through.
///
/// A [`WaterfallLayout`](crate::WaterfallLayout) never stores items; during
/// a pass it asks the source for the item counts and reference sizes it
/// needs, once per relevant item or section. The source must answer
/// consistently for the duration of one pass; re-layout after the underlying
/// data changes is the caller's responsibility.
///
/// Only the item structure and [`reference_size`](LayoutSource::reference_size)
/// are required. The styling queries are optional overrides: returning
/// `None` (the default) falls back to the global
/// [`LayoutStyle`](crate::LayoutStyle) for that section.
pub trait LayoutSource {
    /// The number of sections in the collection.
    fn num_sections(&self) -> usize;

    /// The number of items in `section`.
    fn num_items(&self, section: usize) -> usize;

    /// The reference size of one item.
    ///
    /// The main-axis component is the item's natural extent along the scroll
    /// direction. The cross-axis component only matters under
    /// [`ResizingMode::KeepAspectRatio`](crate::ResizingMode::KeepAspectRatio),
    /// where it anchors the aspect ratio the item is scaled with.
    fn reference_size(&self, section: usize, item: usize) -> Size;

    /// Per-section override for the number of lines.
    fn lines_in_section(&self, _section: usize) -> Option<usize> {
        None
    }

    /// Per-section override for the cross-axis gap between lines.
    fn line_spacing(&self, _section: usize) -> Option<f64> {
        None
    }

    /// Per-section override for the main-axis gap between items on a line.
    fn interitem_spacing(&self, _section: usize) -> Option<f64> {
        None
    }

    /// Per-section override for the header size.
    fn header_size(&self, _section: usize) -> Option<Size> {
        None
    }

    /// Per-section override for the footer size.
    fn footer_size(&self, _section: usize) -> Option<Size> {
        None
    }

    /// Per-section override for the section insets.
    fn section_insets(&self, _section: usize) -> Option<Insets> {
        None
    }

    /// Per-section override for the header insets.
    fn header_insets(&self, _section: usize) -> Option<Insets> {
        None
    }

    /// Per-section override for the footer insets.
    fn footer_insets(&self, _section: usize) -> Option<Insets> {
        None
    }
}
