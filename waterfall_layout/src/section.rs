// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Size;

use crate::axis::Axis;
use crate::layout::{ElementFrame, ElementKind};
use crate::lines::LineTracker;
use crate::measure::item_extent;
use crate::source::LayoutSource;
use crate::style::ResolvedStyle;

/// The placed frames of one section and its total main-axis extent,
/// both measured from the section's main-axis offset.
pub(crate) struct SectionLayout {
    pub(crate) frames: Vec<ElementFrame>,
    pub(crate) extent: f64,
}

/// The cross-axis width shared by every line of a section.
///
/// Clamped to zero for containers too narrow to fit the insets and
/// inter-line gaps.
pub(crate) fn line_width(style: &ResolvedStyle, axis: Axis, bounds: Size) -> f64 {
    let breadth = axis.minor(bounds);
    let (lead, trail) = axis.minor_insets(style.section_insets);
    let lines = style.lines as f64;
    let gaps = (lines - 1.) * style.line_spacing;
    ((breadth - lead - trail - gaps) / lines).max(0.)
}

/// Lays out one section: header, items, footer.
///
/// `offset` is the main-axis position the section starts at. The section is
/// laid out as if it were alone at offset zero and shifted; nothing in here
/// depends on any other section.
pub(crate) fn layout_section(
    axis: Axis,
    style: &ResolvedStyle,
    source: &dyn LayoutSource,
    section: usize,
    bounds: Size,
    offset: f64,
) -> SectionLayout {
    let breadth = axis.minor(bounds);
    let width = line_width(style, axis, bounds);
    let (lead_main, trail_main) = axis.major_insets(style.section_insets);
    let (lead_cross, _) = axis.minor_insets(style.section_insets);

    let num_items = source.num_items(section);
    let mut frames = Vec::with_capacity(num_items + 2);
    let mut main = offset;

    if let Some(rect_main) = supplementary_extent(axis, style.header_size) {
        let (ins_lead, ins_trail) = axis.major_insets(style.header_insets);
        let (ins_lead_cross, ins_trail_cross) = axis.minor_insets(style.header_insets);
        frames.push(ElementFrame {
            section,
            index: 0,
            kind: ElementKind::Header,
            line: None,
            rect: axis.pack_rect(
                main + ins_lead,
                ins_lead_cross,
                rect_main,
                (breadth - ins_lead_cross - ins_trail_cross).max(0.),
            ),
        });
        main += ins_lead + rect_main + ins_trail;
    }

    main += lead_main;
    let mut tracker = LineTracker::new(style.lines, main);
    for item in 0..num_items {
        let line = tracker.select(style.render_mode);
        let reference = source.reference_size(section, item);
        let extent = item_extent(reference, width, axis, style.resizing_mode);
        let cross = lead_cross + line as f64 * (width + style.line_spacing);
        frames.push(ElementFrame {
            section,
            index: item,
            kind: ElementKind::Item,
            line: Some(line),
            rect: axis.pack_rect(
                tracker.placement_origin(line, style.interitem_spacing),
                cross,
                extent,
                width,
            ),
        });
        tracker.advance(line, extent, style.interitem_spacing);
    }
    main += tracker.max_cursor();
    main += trail_main;

    if let Some(rect_main) = supplementary_extent(axis, style.footer_size) {
        let (ins_lead, ins_trail) = axis.major_insets(style.footer_insets);
        let (ins_lead_cross, ins_trail_cross) = axis.minor_insets(style.footer_insets);
        frames.push(ElementFrame {
            section,
            index: 0,
            kind: ElementKind::Footer,
            line: None,
            rect: axis.pack_rect(
                main + ins_lead,
                ins_lead_cross,
                rect_main,
                (breadth - ins_lead_cross - ins_trail_cross).max(0.),
            ),
        });
        main += ins_lead + rect_main + ins_trail;
    }

    SectionLayout {
        frames,
        extent: main - offset,
    }
}

/// A header or footer only takes part in layout when its main-axis
/// component is positive; its insets then count towards the section extent.
fn supplementary_extent(axis: Axis, size: Size) -> Option<f64> {
    let main = axis.major(size);
    (main > 0.).then_some(main)
}
