// Copyright 2026 the Waterfall Layout Authors
// SPDX-License-Identifier: Apache-2.0

use smallvec::{SmallVec, smallvec};

use crate::style::RenderMode;

/// Running main-axis cursors for the lines of one section.
///
/// Each line's cursor holds the main-axis position just past the last item
/// placed on that line, starting at the section's content origin. Cursors
/// only ever grow. A fresh tracker is built per section per layout pass;
/// nothing here outlives a pass.
pub(crate) struct LineTracker {
    cursors: SmallVec<[f64; 4]>,
    /// Items placed per line, to know whether an interitem gap applies.
    counts: SmallVec<[usize; 4]>,
    start: f64,
    /// Monotone counter driving the cyclic render modes.
    cycle: usize,
}

impl LineTracker {
    /// Creates a tracker with all cursors at `start`.
    ///
    /// The caller has already validated that `lines` is non-zero.
    pub(crate) fn new(lines: usize, start: f64) -> Self {
        debug_assert!(lines > 0, "LineTracker requires at least one line");
        Self {
            cursors: smallvec![start; lines],
            counts: smallvec![0; lines],
            start,
            cycle: 0,
        }
    }

    /// Picks the line the next item goes to.
    pub(crate) fn select(&mut self, mode: RenderMode) -> usize {
        let lines = self.cursors.len();
        match mode {
            RenderMode::ShortestFirst => {
                // Strict comparison keeps ties on the lowest index.
                let mut shortest = 0;
                for (line, &cursor) in self.cursors.iter().enumerate().skip(1) {
                    if cursor < self.cursors[shortest] {
                        shortest = line;
                    }
                }
                shortest
            }
            RenderMode::StartToEnd => {
                let line = self.cycle % lines;
                self.cycle += 1;
                line
            }
            RenderMode::EndToStart => {
                let line = lines - 1 - (self.cycle % lines);
                self.cycle += 1;
                line
            }
        }
    }

    /// The main-axis origin the next item on `line` would be placed at.
    ///
    /// `gap` is only applied once the line already holds an item.
    pub(crate) fn placement_origin(&self, line: usize, gap: f64) -> f64 {
        let gap = if self.counts[line] > 0 { gap } else { 0. };
        self.cursors[line] + gap
    }

    /// Records an item of `extent` placed on `line`.
    pub(crate) fn advance(&mut self, line: usize, extent: f64, gap: f64) {
        self.cursors[line] = self.placement_origin(line, gap) + extent;
        self.counts[line] += 1;
    }

    /// The content extent the placed items contribute, measured from the
    /// tracker's start position.
    pub(crate) fn max_cursor(&self) -> f64 {
        self.cursors
            .iter()
            .fold(self.start, |max, &cursor| max.max(cursor))
            - self.start
    }
}
