// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::label::{IndentLabel, IndentLevel};
use crate::options::TabWidth;
use crate::stream::StreamCursor;

/// Highest depth before the cycle starts over at 1.
const MAX_DEPTH: u8 = 4;

/// Streaming classifier of leading whitespace.
///
/// Fed one character at a time, in line order,
/// it labels each tab and space of the indentation
/// with a depth that rotates through four levels.
/// A tab always opens a new level,
/// a space only if it sits on a tab-width boundary
/// (counted from the start of the line),
/// or if no level is open yet, e.g. after a reset within a line.
/// The first other character ends the indentation of its line.
///
/// The state is reset lazily:
/// reaching the end of a line only marks the reset,
/// which is then applied on the first call for the next line.
///
/// Use one instance per document (or concurrent scan).
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    /// Current level, 0 meaning "no level started yet on this line"
    depth: u8,
    /// The previous call consumed the last character of its line
    pending_reset: bool,
}

impl Classifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            depth: 0,
            pending_reset: false,
        }
    }

    /// Forgets all state, as if freshly created.
    ///
    /// Call this when starting to scan a different document,
    /// or when re-scanning from a line that does not follow
    /// the one scanned last.
    pub const fn reset(&mut self) {
        self.depth = 0;
        self.pending_reset = false;
    }

    /// The current depth counter, within 0 - 4.
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Whether the next call starts a new line.
    #[must_use]
    pub const fn is_reset_pending(&self) -> bool {
        self.pending_reset
    }

    fn advance(&mut self) -> IndentLevel {
        if self.depth >= MAX_DEPTH {
            self.depth = 0;
        }
        self.depth += 1;
        self.current()
    }

    /// Never called on depth 0, as the first space after a reset
    /// opens a level even off a tab boundary.
    fn current(&self) -> IndentLevel {
        IndentLevel::from_depth(self.depth).unwrap_or(IndentLevel::One)
    }

    /// Consumes the next character of `stream` and classifies it.
    ///
    /// Returns `None` for the first non-whitespace character of a line,
    /// after having moved `stream` to the end of the line,
    /// as nothing further on it gets classified.
    pub fn classify<S>(&mut self, stream: &mut S, tab_width: TabWidth) -> Option<IndentLabel>
    where
        S: StreamCursor + ?Sized,
    {
        if self.pending_reset {
            tracing::trace!("New line; resetting depth {}", self.depth);
            self.depth = 0;
            self.pending_reset = false;
        }

        let chr = stream.next();
        let on_boundary = tab_width.is_boundary(stream.column());
        if stream.at_line_end() {
            self.pending_reset = true;
        }

        match chr {
            Some('\t') => Some(IndentLabel::Tab(self.advance())),
            Some(' ') => {
                let level = if on_boundary || self.depth == 0 {
                    self.advance()
                } else {
                    self.current()
                };
                Some(IndentLabel::Space(level))
            }
            Some(_) | None => {
                if chr.is_none() {
                    tracing::warn!("Classifier called on an exhausted line");
                }
                stream.skip_to_line_end();
                self.depth = 0;
                None
            }
        }
    }
}
