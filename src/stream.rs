// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// A cursor over the characters of a single line,
/// as handed to the classifier by its host.
///
/// The classifier only ever consumes characters through this interface;
/// advancing over characters it did not look at
/// is up to the host.
pub trait StreamCursor {
    /// Consumes and returns the next character,
    /// or `None` if the line is exhausted.
    fn next(&mut self) -> Option<char>;

    /// 0-based column of the character consumed last.
    fn column(&self) -> usize;

    /// Whether all characters of the line have been consumed.
    fn at_line_end(&self) -> bool;

    /// Consumes the remainder of the line.
    fn skip_to_line_end(&mut self);
}

/// [`StreamCursor`] over one line of text,
/// without its line terminator.
///
/// Columns are counted in characters,
/// so a tab occupies a single column.
#[derive(Debug, Clone)]
pub struct LineStream<'a> {
    line: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
    /// Number of characters consumed so far
    consumed: usize,
}

impl<'a> LineStream<'a> {
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            consumed: 0,
        }
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The not yet consumed part of the line.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.line.get(self.pos..).unwrap_or_default()
    }
}

impl StreamCursor for LineStream<'_> {
    fn next(&mut self) -> Option<char> {
        let chr = self.remaining().chars().next()?;
        self.pos += chr.len_utf8();
        self.consumed += 1;
        Some(chr)
    }

    fn column(&self) -> usize {
        self.consumed.saturating_sub(1)
    }

    fn at_line_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    fn skip_to_line_end(&mut self) {
        self.consumed += self.remaining().chars().count();
        self.pos = self.line.len();
    }
}
