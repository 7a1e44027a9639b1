// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use crate::classifier::Classifier;
use crate::label::IndentLabel;
use crate::options::RainbowOptions;
use crate::preferences::ConfigObserver;
use crate::stream::{LineStream, StreamCursor};

/// A single classified whitespace character within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte range within the line
    pub range: Range<usize>,
    /// 0-based character column within the line
    pub column: usize,
    pub label: IndentLabel,
}

/// The labels of all classified characters of one line,
/// in line order.
pub type LineHighlights = Vec<Span>;

/// Splits a line as yielded by `split_inclusive('\n')`
/// into its content and its terminator (`"\r\n"`, `"\n"` or `""`).
#[must_use]
pub fn split_line_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Drives a [`Classifier`] over whole lines and documents,
/// the way an editor overlay would.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    classifier: Classifier,
    options: RainbowOptions,
}

impl Highlighter {
    #[must_use]
    pub fn new(options: RainbowOptions) -> Self {
        Self {
            classifier: Classifier::new(),
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &RainbowOptions {
        &self.options
    }

    /// Starts over, e.g. for a different document.
    pub const fn restart(&mut self) {
        self.classifier.reset();
    }

    /// Classifies the leading whitespace of `line`,
    /// which must not contain its line terminator.
    ///
    /// Lines have to be fed in document order;
    /// use [`Self::restart`] before jumping elsewhere.
    pub fn highlight_line(&mut self, line: &str) -> LineHighlights {
        let mut spans = Vec::new();
        if !self.options.enabled {
            return spans;
        }
        let tab_width = self.options.tab_width;
        let mut stream = LineStream::new(line);
        while !stream.at_line_end() {
            let start = stream.pos();
            if let Some(label) = self.classifier.classify(&mut stream, tab_width) {
                spans.push(Span {
                    range: start..stream.pos(),
                    column: stream.column(),
                    label,
                });
            }
        }
        spans
    }

    /// Classifies the leading whitespace of every line in `text`.
    ///
    /// Continues from the state the previous call left;
    /// call [`Self::restart`] first for an unrelated text.
    pub fn highlight(&mut self, text: &str) -> Vec<LineHighlights> {
        let highlights: Vec<LineHighlights> = text
            .split_inclusive('\n')
            .map(|line| self.highlight_line(split_line_terminator(line).0))
            .collect();
        tracing::debug!(
            "Highlighted {} lines, {} whitespace characters",
            highlights.len(),
            highlights.iter().map(Vec::len).sum::<usize>()
        );
        highlights
    }
}

impl ConfigObserver for Highlighter {
    fn on_config_change(&mut self, options: &RainbowOptions) {
        options.clone_into(&mut self.options);
        self.classifier.reset();
    }
}
