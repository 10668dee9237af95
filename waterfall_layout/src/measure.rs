// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Size;

use crate::axis::Axis;
use crate::style::ResizingMode;

/// Resolves an item's main-axis extent from its reference size.
///
/// Under [`ResizingMode::KeepAspectRatio`] the item is notionally scaled so
/// its cross-axis component fills `line_width`, and the main-axis component
/// scales along with it. A reference size with a non-positive cross-axis
/// component carries no usable aspect ratio, so it falls back to the
/// original main-axis extent instead of dividing by it.
///
/// The result is clamped to be non-negative so degenerate reference sizes
/// cannot produce frames with negative extents.
pub(crate) fn item_extent(
    reference: Size,
    line_width: f64,
    axis: Axis,
    mode: ResizingMode,
) -> f64 {
    let main = axis.major(reference);
    let extent = match mode {
        ResizingMode::UseOriginalSize => main,
        ResizingMode::KeepAspectRatio => {
            let cross = axis.minor(reference);
            if cross > 0. {
                main * (line_width / cross)
            } else {
                main
            }
        }
    };
    extent.max(0.)
}
