// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::ConfigurationError;
use crate::palette::Palette;

/// Number of space-units one tab stop spans.
///
/// Always at least 1;
/// invalid widths are rejected when constructing,
/// so classification itself never has to deal with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabWidth(NonZeroUsize);

impl TabWidth {
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(3));

    /// Validates a (possibly user supplied) tab width.
    ///
    /// # Errors
    ///
    /// If `width` is smaller then 1.
    pub fn new(width: i64) -> Result<Self, ConfigurationError> {
        usize::try_from(width)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(ConfigurationError::InvalidTabWidth(width))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Whether `column` is the first column of a tab-width group.
    #[must_use]
    pub const fn is_boundary(self, column: usize) -> bool {
        column % self.0.get() == 0
    }
}

impl Default for TabWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for TabWidth {
    type Error = ConfigurationError;

    fn try_from(width: i64) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

impl From<NonZeroUsize> for TabWidth {
    fn from(width: NonZeroUsize) -> Self {
        Self(width)
    }
}

impl fmt::Display for TabWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainbowOptions {
    /// Whether indentation gets colored at all.
    /// If not, hosts leave the text untouched.
    pub enabled: bool,
    /// Space-units per tab stop;
    /// decides where a run of spaces advances to the next level.
    pub tab_width: TabWidth,
    /// Colors of the four levels, plus their common opacity.
    pub palette: Palette,
}

impl Default for RainbowOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            tab_width: TabWidth::default(),
            palette: Palette::default(),
        }
    }
}
