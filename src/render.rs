// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

use crossterm::style::{Color, Stylize, style};

use crate::highlight::{LineHighlights, split_line_terminator};
use crate::options::RainbowOptions;
use crate::palette::Rgba;

/// Lists the label names of each line,
/// separated by a single space,
/// one output line per input line.
#[must_use]
pub fn labels(highlights: &[LineHighlights]) -> String {
    let mut output = String::new();
    for line in highlights {
        let names: Vec<&str> = line.iter().map(|span| span.label.name()).collect();
        output.push_str(&names.join(" "));
        output.push('\n');
    }
    output
}

/// Reproduces `text` with the classified whitespace
/// painted in the colors of its level,
/// using ANSI escape sequences.
///
/// Classified tabs are expanded to spaces up to the next tab stop,
/// so their whole width shows the color.
/// Everything else, line terminators included, is kept as it is.
///
/// # Errors
///
/// Fails only if writing to the in-memory buffer fails.
pub fn ansi(
    text: &str,
    highlights: &[LineHighlights],
    options: &RainbowOptions,
    backdrop: Rgba,
) -> Result<String, std::fmt::Error> {
    let tab_width = options.tab_width.get();
    let mut output = String::with_capacity(text.len());
    for (line, spans) in text.split_inclusive('\n').zip(highlights.iter()) {
        let (line, terminator) = split_line_terminator(line);
        let mut visual_column = 0;
        let mut painted_until = 0;
        for span in spans {
            let Some(content) = line.get(span.range.clone()) else {
                tracing::warn!("Span {:?} does not fit the line; skipping it", span.range);
                continue;
            };
            let content = if span.label.is_tab() {
                let stop = tab_width - (visual_column % tab_width);
                visual_column += stop;
                " ".repeat(stop)
            } else {
                visual_column += 1;
                content.to_owned()
            };
            let (r, g, b) = options.palette.fill(span.label.level(), backdrop);
            write!(output, "{}", style(content).on(Color::Rgb { r, g, b }))?;
            painted_until = span.range.end;
        }
        output.push_str(line.get(painted_until..).unwrap_or_default());
        output.push_str(terminator);
    }
    Ok(output)
}
