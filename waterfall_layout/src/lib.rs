// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

//! A waterfall (masonry) layout solver for scrollable collections.
//!
//! Items grouped into sections are distributed into a fixed number of
//! parallel lines — columns when scrolling vertically, rows when scrolling
//! horizontally. Each line grows independently, producing the staggered,
//! gapless-but-uneven look of a photo wall rather than a uniform grid.
//!
//! The entry point is [`WaterfallLayout`]. It pulls item counts, reference
//! sizes, and per-section style overrides from a [`LayoutSource`]
//! implemented by the host, and [`compute`](WaterfallLayout::compute)s an
//! immutable [`LayoutSnapshot`] holding a frame for every header, item, and
//! footer plus the overall content size. The solver only computes geometry:
//! deciding *when* to recompute, caching, rendering, and interaction all
//! stay with the host.
//!
//! A pass is a pure function of its inputs. Sections are laid out
//! independently and concatenated in order, so hosts that want throughput
//! may compute sections on separate threads and merge the per-section frame
//! lists in section order.
//!
//! # Example
//!
//! ```
//! use kurbo::Size;
//! use waterfall_layout::{Axis, LayoutSource, LayoutStyle, WaterfallLayout};
//!
//! struct Gallery(Vec<Size>);
//!
//! impl LayoutSource for Gallery {
//!     fn num_sections(&self) -> usize {
//!         1
//!     }
//!     fn num_items(&self, _section: usize) -> usize {
//!         self.0.len()
//!     }
//!     fn reference_size(&self, _section: usize, item: usize) -> Size {
//!         self.0[item]
//!     }
//! }
//!
//! let gallery = Gallery(vec![
//!     Size::new(100., 150.),
//!     Size::new(100., 80.),
//!     Size::new(100., 120.),
//! ]);
//! let layout = WaterfallLayout::new(Axis::Vertical).with_style(
//!     LayoutStyle::default()
//!         .with_lines(2)
//!         .with_line_spacing(0.)
//!         .with_interitem_spacing(0.),
//! );
//! let snapshot = layout.compute(&gallery, Size::new(200., 600.))?;
//!
//! // Two 100-wide columns; the third item lands below the 80-tall one.
//! assert_eq!(snapshot.content_size(), Size::new(200., 200.));
//! # Ok::<(), waterfall_layout::LayoutError>(())
//! ```

// Geometry types come from kurbo; re-exported so hosts can name them
// without pinning the version themselves.
pub use kurbo;

mod axis;
mod error;
mod layout;
mod lines;
mod measure;
mod section;
mod source;
mod style;

pub use axis::Axis;
pub use error::LayoutError;
pub use layout::{ElementFrame, ElementKind, LayoutSnapshot, WaterfallLayout};
pub use source::LayoutSource;
pub use style::{LayoutStyle, RenderMode, ResizingMode};
