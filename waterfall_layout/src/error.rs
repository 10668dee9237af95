// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

/// Errors reported by a layout pass.
///
/// All failures are synchronous and surface at the call that triggered
/// them; a layout pass has no deferred or retried work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A section resolved to zero lines.
    ///
    /// The line count divides the available breadth, so it cannot be
    /// silently clamped the way spacing and insets are.
    InvalidLineCount {
        /// The section whose line count was invalid.
        section: usize,
    },
    /// A per-section query named a section the source does not have.
    SectionOutOfBounds {
        /// The requested section index.
        section: usize,
        /// The number of sections the source reported.
        num_sections: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLineCount { section } => {
                write!(f, "section {section} resolved to zero lines")
            }
            Self::SectionOutOfBounds {
                section,
                num_sections,
            } => {
                write!(
                    f,
                    "section index {section} out of bounds for source with {num_sections} sections"
                )
            }
        }
    }
}

impl Error for LayoutError {}
