// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Insets, Point, Rect, Size};

/// The scroll direction of the layout.
///
/// Every measurement in this crate is taken either along the *main axis*
/// (the direction the content grows in as items are added) or the
/// *cross axis* (the fixed breadth which is subdivided into lines).
/// This type maps those abstract axes onto concrete x/y coordinates:
/// a [`Vertical`](Axis::Vertical) layout grows downwards and splits its
/// width into columns, a [`Horizontal`](Axis::Horizontal) layout grows
/// rightwards and splits its height into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The layout scrolls along the x axis; lines are rows.
    Horizontal,
    /// The layout scrolls along the y axis; lines are columns.
    Vertical,
}

impl Axis {
    /// Get the axis perpendicular to this one.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extract from the argument the magnitude along this axis.
    pub fn major(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extract from the argument the magnitude along the perpendicular axis.
    pub fn minor(self, size: Size) -> f64 {
        self.cross().major(size)
    }

    /// Extract the leading and trailing inset components along this axis.
    pub fn major_insets(self, insets: Insets) -> (f64, f64) {
        match self {
            Self::Horizontal => (insets.x0, insets.x1),
            Self::Vertical => (insets.y0, insets.y1),
        }
    }

    /// Extract the leading and trailing inset components along the perpendicular axis.
    pub fn minor_insets(self, insets: Insets) -> (f64, f64) {
        self.cross().major_insets(insets)
    }

    /// Arrange a major and minor coordinate with respect to this axis into a point.
    pub fn pack_point(self, major: f64, minor: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(major, minor),
            Self::Vertical => Point::new(minor, major),
        }
    }

    /// Arrange a major and minor magnitude with respect to this axis into a size.
    pub fn pack_size(self, major: f64, minor: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(major, minor),
            Self::Vertical => Size::new(minor, major),
        }
    }

    /// Build a rectangle from a major/minor origin and major/minor extents.
    pub fn pack_rect(self, major_pos: f64, minor_pos: f64, major_len: f64, minor_len: f64) -> Rect {
        Rect::from_origin_size(
            self.pack_point(major_pos, minor_pos),
            self.pack_size(major_len, minor_len),
        )
    }
}
