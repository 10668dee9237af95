// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

//! Scenario tests for [`WaterfallLayout`].

use assert_matches::assert_matches;
use float_cmp::assert_approx_eq;
use kurbo::{Insets, Rect, Size};
use waterfall_layout::{
    Axis, ElementKind, LayoutError, LayoutSource, LayoutStyle, RenderMode, ResizingMode,
    WaterfallLayout,
};

/// A source backed by per-section lists of reference sizes, with the same
/// optional overrides applied to every section.
#[derive(Default)]
struct Fixture {
    sections: Vec<Vec<Size>>,
    lines: Option<usize>,
    line_spacing: Option<f64>,
    interitem_spacing: Option<f64>,
    header_size: Option<Size>,
    footer_size: Option<Size>,
    section_insets: Option<Insets>,
    header_insets: Option<Insets>,
    footer_insets: Option<Insets>,
}

impl Fixture {
    fn with_heights(heights: &[f64]) -> Self {
        Self {
            sections: vec![heights.iter().map(|&h| Size::new(100., h)).collect()],
            ..Self::default()
        }
    }
}

impl LayoutSource for Fixture {
    fn num_sections(&self) -> usize {
        self.sections.len()
    }

    fn num_items(&self, section: usize) -> usize {
        self.sections[section].len()
    }

    fn reference_size(&self, section: usize, item: usize) -> Size {
        self.sections[section][item]
    }

    fn lines_in_section(&self, _section: usize) -> Option<usize> {
        self.lines
    }

    fn line_spacing(&self, _section: usize) -> Option<f64> {
        self.line_spacing
    }

    fn interitem_spacing(&self, _section: usize) -> Option<f64> {
        self.interitem_spacing
    }

    fn header_size(&self, _section: usize) -> Option<Size> {
        self.header_size
    }

    fn footer_size(&self, _section: usize) -> Option<Size> {
        self.footer_size
    }

    fn section_insets(&self, _section: usize) -> Option<Insets> {
        self.section_insets
    }

    fn header_insets(&self, _section: usize) -> Option<Insets> {
        self.header_insets
    }

    fn footer_insets(&self, _section: usize) -> Option<Insets> {
        self.footer_insets
    }
}

fn tight_style() -> LayoutStyle {
    LayoutStyle::default()
        .with_line_spacing(0.)
        .with_interitem_spacing(0.)
}

#[test]
fn shortest_first_balances_two_columns() {
    // Heights [10, 20, 5] into two columns: the first item takes column 0
    // (ties break low), the second goes to the still-empty column 1, and
    // the third lands under the first, leaving cursors at 15 and 20.
    let source = Fixture::with_heights(&[10., 20., 5.]);
    let layout = WaterfallLayout::new(Axis::Vertical).with_style(tight_style());
    let snapshot = layout.compute(&source, Size::new(100., 600.)).unwrap();

    let frames = snapshot.frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].line, Some(0));
    assert_eq!(frames[0].rect, Rect::new(0., 0., 50., 10.));
    assert_eq!(frames[1].line, Some(1));
    assert_eq!(frames[1].rect, Rect::new(50., 0., 100., 20.));
    assert_eq!(frames[2].line, Some(0));
    assert_eq!(frames[2].rect, Rect::new(0., 10., 50., 15.));

    assert_eq!(snapshot.content_size(), Size::new(100., 20.));
}

#[test]
fn every_item_spans_the_line_width() {
    let source = Fixture {
        sections: vec![
            vec![Size::new(80., 40.), Size::new(20., 90.), Size::new(50., 10.)],
            vec![Size::new(10., 25.), Size::new(300., 180.)],
        ],
        lines: Some(3),
        section_insets: Some(Insets::new(12., 4., 8., 4.)),
        ..Fixture::default()
    };
    let layout = WaterfallLayout::new(Axis::Vertical)
        .with_style(LayoutStyle::default().with_line_spacing(6.));
    let bounds = Size::new(250., 800.);

    let snapshot = layout.compute(&source, bounds).unwrap();
    for section in 0..2 {
        let width = layout.line_width(&source, bounds, section).unwrap();
        // (250 - 12 - 8 - 2*6) / 3
        assert_approx_eq!(f64, width, 218. / 3.);
        for frame in snapshot.frames().iter().filter(|f| f.section == section) {
            assert_approx_eq!(f64, frame.rect.width(), width);
            assert!(frame.rect.height() >= 0., "main extent must be non-negative");
        }
    }
}

#[test]
fn items_on_the_same_line_never_overlap() {
    let heights = [40., 10., 65., 20., 5., 90., 30., 30., 15., 50.];
    let source = Fixture {
        lines: Some(3),
        interitem_spacing: Some(6.),
        ..Fixture::with_heights(&heights)
    };
    let layout = WaterfallLayout::new(Axis::Vertical).with_style(LayoutStyle::default());
    let snapshot = layout.compute(&source, Size::new(300., 900.)).unwrap();

    for line in 0..3 {
        let mut on_line: Vec<_> = snapshot
            .frames()
            .iter()
            .filter(|f| f.line == Some(line))
            .collect();
        on_line.sort_by(|a, b| a.rect.y0.total_cmp(&b.rect.y0));
        for pair in on_line.windows(2) {
            assert!(
                pair[1].rect.y0 >= pair[0].rect.y1,
                "items {} and {} overlap on line {line}",
                pair[0].index,
                pair[1].index,
            );
        }
    }
}

#[test]
fn cyclic_render_modes_assign_lines_round_robin() {
    let heights = [40., 10., 30., 20., 60., 10., 20.];
    let source = Fixture {
        lines: Some(3),
        ..Fixture::with_heights(&heights)
    };

    let layout = WaterfallLayout::new(Axis::Vertical)
        .with_style(LayoutStyle::default().with_render_mode(RenderMode::StartToEnd));
    let snapshot = layout.compute(&source, Size::new(300., 900.)).unwrap();
    let lines: Vec<_> = snapshot.frames().iter().map(|f| f.line.unwrap()).collect();
    assert_eq!(lines, [0, 1, 2, 0, 1, 2, 0]);

    let layout = WaterfallLayout::new(Axis::Vertical)
        .with_style(LayoutStyle::default().with_render_mode(RenderMode::EndToStart));
    let snapshot = layout.compute(&source, Size::new(300., 900.)).unwrap();
    let lines: Vec<_> = snapshot.frames().iter().map(|f| f.line.unwrap()).collect();
    assert_eq!(lines, [2, 1, 0, 2, 1, 0, 2]);
}

#[test]
fn keep_aspect_ratio_preserves_the_reference_ratio() {
    let source = Fixture {
        sections: vec![vec![Size::new(120., 90.), Size::new(40., 100.)]],
        line_spacing: Some(10.),
        ..Fixture::default()
    };
    let layout = WaterfallLayout::new(Axis::Vertical).with_style(
        LayoutStyle::default().with_resizing_mode(ResizingMode::KeepAspectRatio),
    );
    let bounds = Size::new(130., 600.);
    let snapshot = layout.compute(&source, bounds).unwrap();

    let width = layout.line_width(&source, bounds, 0).unwrap();
    assert_approx_eq!(f64, width, 60.);

    let first = snapshot.item_frame(0, 0).unwrap().rect;
    assert_approx_eq!(f64, first.height(), 90. * (60. / 120.));
    assert_approx_eq!(f64, first.width() / first.height(), 120. / 90.);

    let second = snapshot.item_frame(0, 1).unwrap().rect;
    assert_approx_eq!(f64, second.height(), 100. * (60. / 40.));
    assert_approx_eq!(f64, second.width() / second.height(), 40. / 100.);
}

#[test]
fn section_extent_never_shrinks_when_items_are_added() {
    let heights = [30., 5., 80., 20., 45., 10.];
    let layout = WaterfallLayout::new(Axis::Vertical).with_style(LayoutStyle::default());

    let mut previous = 0.;
    for count in 0..=heights.len() {
        let source = Fixture::with_heights(&heights[..count]);
        let snapshot = layout.compute(&source, Size::new(200., 600.)).unwrap();
        let extent = snapshot.content_size().height;
        assert!(
            extent >= previous,
            "extent {extent} shrank from {previous} after item {count}"
        );
        previous = extent;
    }
}

#[test]
fn flipping_the_axis_transposes_every_frame() {
    let transpose_size = |s: Size| Size::new(s.height, s.width);
    let transpose_insets = |i: Insets| Insets::new(i.y0, i.x0, i.y1, i.x1);
    let transpose_rect = |r: Rect| Rect::new(r.y0, r.x0, r.y1, r.x1);

    let sizes = [
        Size::new(30., 40.),
        Size::new(50., 20.),
        Size::new(10., 60.),
        Size::new(25., 25.),
        Size::new(45., 5.),
    ];
    let insets = Insets::new(1., 2., 3., 4.);

    let vertical_source = Fixture {
        sections: vec![sizes.to_vec()],
        line_spacing: Some(8.),
        interitem_spacing: Some(4.),
        section_insets: Some(insets),
        header_size: Some(Size::new(0., 35.)),
        ..Fixture::default()
    };
    let horizontal_source = Fixture {
        sections: vec![sizes.iter().copied().map(transpose_size).collect()],
        line_spacing: Some(8.),
        interitem_spacing: Some(4.),
        section_insets: Some(transpose_insets(insets)),
        header_size: Some(Size::new(35., 0.)),
        ..Fixture::default()
    };

    let bounds = Size::new(200., 500.);
    let vertical = WaterfallLayout::new(Axis::Vertical)
        .compute(&vertical_source, bounds)
        .unwrap();
    let horizontal = WaterfallLayout::new(Axis::Horizontal)
        .compute(&horizontal_source, transpose_size(bounds))
        .unwrap();

    assert_eq!(
        horizontal.content_size(),
        transpose_size(vertical.content_size())
    );
    assert_eq!(vertical.frames().len(), horizontal.frames().len());
    for (v, h) in vertical.frames().iter().zip(horizontal.frames()) {
        assert_eq!(h.rect, transpose_rect(v.rect));
        assert_eq!(h.line, v.line);
        assert_eq!(h.kind, v.kind);
    }
}

#[test]
fn headers_footers_and_insets_add_up() {
    let source = Fixture {
        sections: vec![vec![
            Size::new(0., 50.),
            Size::new(0., 30.),
            Size::new(0., 20.),
        ]],
        section_insets: Some(Insets::new(10., 20., 10., 30.)),
        header_size: Some(Size::new(0., 40.)),
        header_insets: Some(Insets::new(5., 6., 5., 7.)),
        footer_size: Some(Size::new(0., 25.)),
        footer_insets: Some(Insets::new(0., 8., 0., 9.)),
        ..Fixture::default()
    };
    let layout = WaterfallLayout::new(Axis::Vertical).with_style(LayoutStyle::default());
    let snapshot = layout.compute(&source, Size::new(220., 1000.)).unwrap();

    let frames = snapshot.frames();
    assert_eq!(frames.len(), 5);

    let header = &frames[0];
    assert_eq!(header.kind, ElementKind::Header);
    assert_eq!(header.rect, Rect::new(5., 6., 215., 46.));

    // Items start below the header block and the section's top inset,
    // in columns of width (220 - 10 - 10 - 10) / 2 = 95.
    assert_eq!(frames[1].rect, Rect::new(10., 73., 105., 123.));
    assert_eq!(frames[2].rect, Rect::new(115., 73., 210., 103.));
    // Third item is stacked on column 1 with the 10-point interitem gap.
    assert_eq!(frames[3].rect, Rect::new(115., 113., 210., 133.));

    let footer = &frames[4];
    assert_eq!(footer.kind, ElementKind::Footer);
    assert_eq!(footer.rect, Rect::new(0., 171., 220., 196.));

    // header block (6+40+7) + top inset (20) + items (60) + bottom inset
    // (30) + footer block (8+25+9).
    assert_eq!(snapshot.content_size().height, 205.);
}

#[test]
fn sections_are_concatenated_in_order() {
    let source = Fixture {
        sections: vec![
            vec![Size::new(0., 10.), Size::new(0., 20.)],
            vec![Size::new(0., 30.)],
            vec![],
        ],
        ..Fixture::default()
    };
    let layout = WaterfallLayout::new(Axis::Vertical).with_style(tight_style());
    let snapshot = layout.compute(&source, Size::new(100., 600.)).unwrap();

    // Section 0 spans [0, 20); section 1 starts exactly there.
    assert_eq!(snapshot.item_frame(0, 1).unwrap().rect.y1, 20.);
    assert_eq!(snapshot.item_frame(1, 0).unwrap().rect.y0, 20.);
    // The empty trailing section contributes nothing.
    assert_eq!(snapshot.content_size(), Size::new(100., 50.));
}

#[test]
fn zero_lines_fails_fast() {
    let source = Fixture {
        lines: Some(0),
        ..Fixture::with_heights(&[10.])
    };
    let layout = WaterfallLayout::new(Axis::Vertical);
    let err = layout.compute(&source, Size::new(100., 100.)).unwrap_err();
    assert_matches!(err, LayoutError::InvalidLineCount { section: 0 });
}

#[test]
fn line_width_rejects_unknown_sections() {
    let source = Fixture::with_heights(&[10.]);
    let layout = WaterfallLayout::new(Axis::Vertical);
    let err = layout
        .line_width(&source, Size::new(100., 100.), 3)
        .unwrap_err();
    assert_matches!(
        err,
        LayoutError::SectionOutOfBounds {
            section: 3,
            num_sections: 1
        }
    );
}

#[test]
fn frames_in_rect_returns_only_intersecting_frames() {
    let source = Fixture::with_heights(&[10., 20., 5.]);
    let layout = WaterfallLayout::new(Axis::Vertical).with_style(tight_style());
    let snapshot = layout.compute(&source, Size::new(100., 600.)).unwrap();

    let visible: Vec<_> = snapshot
        .frames_in_rect(Rect::new(0., 0., 100., 10.))
        .map(|f| f.index)
        .collect();
    // Item 2 starts exactly at y=10 and only touches the viewport edge.
    assert_eq!(visible, [0, 1]);

    let below: Vec<_> = snapshot
        .frames_in_rect(Rect::new(0., 12., 100., 30.))
        .map(|f| f.index)
        .collect();
    assert_eq!(below, [1, 2]);
}
