// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Insets, Size};
use tracing::warn;

use crate::error::LayoutError;
use crate::source::LayoutSource;

/// Policy governing which line receives the next item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Fill the line whose accumulated extent is currently smallest,
    /// breaking ties towards the lowest line index.
    ///
    /// This keeps line extents balanced at the cost of a scattered
    /// reading order.
    #[default]
    ShortestFirst,
    /// Fill lines cyclically from the first line to the last,
    /// ignoring how full each line is.
    ///
    /// This keeps a predictable reading order at the cost of balance.
    StartToEnd,
    /// Fill lines cyclically from the last line to the first,
    /// ignoring how full each line is.
    EndToStart,
}

/// Policy governing how an item's reference size maps to its laid-out extent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResizingMode {
    /// Use the main-axis component of the reference size verbatim.
    #[default]
    UseOriginalSize,
    /// Scale the reference size so its cross-axis component fills the line
    /// width, preserving the reference aspect ratio.
    ///
    /// Items whose reference cross-axis component is not positive fall back
    /// to [`UseOriginalSize`](ResizingMode::UseOriginalSize).
    KeepAspectRatio,
}

/// Global styling defaults for a waterfall layout.
///
/// Every field can be overridden per section by the [`LayoutSource`];
/// a section falls back to these values for any query it leaves unanswered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStyle {
    /// Number of parallel lines a section's breadth is split into. Default 2.
    pub lines: usize,
    /// Cross-axis gap between adjacent lines. Default 10.
    pub line_spacing: f64,
    /// Main-axis gap between consecutive items on the same line. Default 10.
    pub interitem_spacing: f64,
    /// Header size; only the main-axis component is used. Default zero
    /// (no header).
    pub header_size: Size,
    /// Footer size; only the main-axis component is used. Default zero
    /// (no footer).
    pub footer_size: Size,
    /// Insets applied around the header. Default zero.
    pub header_insets: Insets,
    /// Insets applied around the footer. Default zero.
    pub footer_insets: Insets,
    /// Insets applied around a section's items. Default zero.
    pub section_insets: Insets,
    /// Line selection policy. Default [`RenderMode::ShortestFirst`].
    pub render_mode: RenderMode,
    /// Item sizing policy. Default [`ResizingMode::UseOriginalSize`].
    pub resizing_mode: ResizingMode,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            lines: 2,
            line_spacing: 10.,
            interitem_spacing: 10.,
            header_size: Size::ZERO,
            footer_size: Size::ZERO,
            header_insets: Insets::ZERO,
            footer_insets: Insets::ZERO,
            section_insets: Insets::ZERO,
            render_mode: RenderMode::default(),
            resizing_mode: ResizingMode::default(),
        }
    }
}

// --- MARK: BUILDERS
impl LayoutStyle {
    /// Builder-style method to set the number of lines.
    pub fn with_lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    /// Builder-style method to set the cross-axis gap between lines.
    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Builder-style method to set the main-axis gap between items.
    pub fn with_interitem_spacing(mut self, spacing: f64) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    /// Builder-style method to set the header size.
    pub fn with_header_size(mut self, size: Size) -> Self {
        self.header_size = size;
        self
    }

    /// Builder-style method to set the footer size.
    pub fn with_footer_size(mut self, size: Size) -> Self {
        self.footer_size = size;
        self
    }

    /// Builder-style method to set the header insets.
    pub fn with_header_insets(mut self, insets: Insets) -> Self {
        self.header_insets = insets;
        self
    }

    /// Builder-style method to set the footer insets.
    pub fn with_footer_insets(mut self, insets: Insets) -> Self {
        self.footer_insets = insets;
        self
    }

    /// Builder-style method to set the section insets.
    pub fn with_section_insets(mut self, insets: Insets) -> Self {
        self.section_insets = insets;
        self
    }

    /// Builder-style method to set the line selection policy.
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    /// Builder-style method to set the item sizing policy.
    pub fn with_resizing_mode(mut self, mode: ResizingMode) -> Self {
        self.resizing_mode = mode;
        self
    }
}

/// The styling of one section after per-section overrides and input
/// sanitizing have been applied.
///
/// Spacing and insets are clamped to be non-negative; a non-positive line
/// count is rejected outright since it appears as a divisor in the line
/// width formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedStyle {
    pub(crate) lines: usize,
    pub(crate) line_spacing: f64,
    pub(crate) interitem_spacing: f64,
    pub(crate) header_size: Size,
    pub(crate) footer_size: Size,
    pub(crate) header_insets: Insets,
    pub(crate) footer_insets: Insets,
    pub(crate) section_insets: Insets,
    pub(crate) render_mode: RenderMode,
    pub(crate) resizing_mode: ResizingMode,
}

impl ResolvedStyle {
    /// Layers the source's per-section overrides over the global style.
    pub(crate) fn resolve(
        defaults: &LayoutStyle,
        source: &dyn LayoutSource,
        section: usize,
    ) -> Result<Self, LayoutError> {
        let lines = source.lines_in_section(section).unwrap_or(defaults.lines);
        if lines == 0 {
            return Err(LayoutError::InvalidLineCount { section });
        }
        Ok(Self {
            lines,
            line_spacing: clamp_spacing(
                source.line_spacing(section).unwrap_or(defaults.line_spacing),
                section,
                "line_spacing",
            ),
            interitem_spacing: clamp_spacing(
                source
                    .interitem_spacing(section)
                    .unwrap_or(defaults.interitem_spacing),
                section,
                "interitem_spacing",
            ),
            header_size: source.header_size(section).unwrap_or(defaults.header_size),
            footer_size: source.footer_size(section).unwrap_or(defaults.footer_size),
            header_insets: clamp_insets(
                source
                    .header_insets(section)
                    .unwrap_or(defaults.header_insets),
                section,
                "header_insets",
            ),
            footer_insets: clamp_insets(
                source
                    .footer_insets(section)
                    .unwrap_or(defaults.footer_insets),
                section,
                "footer_insets",
            ),
            section_insets: clamp_insets(
                source
                    .section_insets(section)
                    .unwrap_or(defaults.section_insets),
                section,
                "section_insets",
            ),
            render_mode: defaults.render_mode,
            resizing_mode: defaults.resizing_mode,
        })
    }
}

fn clamp_spacing(value: f64, section: usize, name: &str) -> f64 {
    if value < 0. {
        warn!("negative {name} {value} in section {section}, clamping to 0");
        0.
    } else {
        value
    }
}

fn clamp_insets(insets: Insets, section: usize, name: &str) -> Insets {
    if insets.x0 < 0. || insets.y0 < 0. || insets.x1 < 0. || insets.y1 < 0. {
        warn!("negative {name} {insets:?} in section {section}, clamping to 0");
        Insets::new(
            insets.x0.max(0.),
            insets.y0.max(0.),
            insets.x1.max(0.),
            insets.y1.max(0.),
        )
    } else {
        insets
    }
}
