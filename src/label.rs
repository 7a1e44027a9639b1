// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// One of the four rotating indentation depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndentLevel {
    One,
    Two,
    Three,
    Four,
}

impl IndentLevel {
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Maps a depth counter value to its level;
    /// `None` for the "not yet started" value 0
    /// and anything above 4.
    #[must_use]
    pub const fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// The 1-based number of this level.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

/// The classification of a single leading whitespace character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentLabel {
    Tab(IndentLevel),
    Space(IndentLevel),
}

impl IndentLabel {
    pub const ALL: [Self; 8] = [
        Self::Tab(IndentLevel::One),
        Self::Tab(IndentLevel::Two),
        Self::Tab(IndentLevel::Three),
        Self::Tab(IndentLevel::Four),
        Self::Space(IndentLevel::One),
        Self::Space(IndentLevel::Two),
        Self::Space(IndentLevel::Three),
        Self::Space(IndentLevel::Four),
    ];

    #[must_use]
    pub const fn level(self) -> IndentLevel {
        match self {
            Self::Tab(level) | Self::Space(level) => level,
        }
    }

    #[must_use]
    pub const fn is_tab(self) -> bool {
        matches!(self, Self::Tab(_))
    }

    /// The identifier of this label, `tab1` to `tab4` or `space1` to `space4`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tab(IndentLevel::One) => "tab1",
            Self::Tab(IndentLevel::Two) => "tab2",
            Self::Tab(IndentLevel::Three) => "tab3",
            Self::Tab(IndentLevel::Four) => "tab4",
            Self::Space(IndentLevel::One) => "space1",
            Self::Space(IndentLevel::Two) => "space2",
            Self::Space(IndentLevel::Three) => "space3",
            Self::Space(IndentLevel::Four) => "space4",
        }
    }

    /// Style classes an editor overlay attaches to the character,
    /// the kind specific one first, then the level specific one.
    #[must_use]
    pub const fn token_class(self) -> &'static str {
        match self {
            Self::Tab(IndentLevel::One) => "rainbow-tab rainbow-indent1",
            Self::Tab(IndentLevel::Two) => "rainbow-tab rainbow-indent2",
            Self::Tab(IndentLevel::Three) => "rainbow-tab rainbow-indent3",
            Self::Tab(IndentLevel::Four) => "rainbow-tab rainbow-indent4",
            Self::Space(IndentLevel::One) => "rainbow-space rainbow-indent1",
            Self::Space(IndentLevel::Two) => "rainbow-space rainbow-indent2",
            Self::Space(IndentLevel::Three) => "rainbow-space rainbow-indent3",
            Self::Space(IndentLevel::Four) => "rainbow-space rainbow-indent4",
        }
    }
}

impl fmt::Display for IndentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
