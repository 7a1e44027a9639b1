// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

pub mod classifier;
pub mod error;
pub mod highlight;
pub mod label;
pub mod options;
pub mod palette;
pub mod preferences;
pub mod render;
pub mod stream;

use git_version::git_version;

pub use classifier::Classifier;
pub use error::{ConfigurationError, Error, RbResult};
pub use highlight::{Highlighter, Span};
pub use label::{IndentLabel, IndentLevel};
pub use options::{RainbowOptions, TabWidth};
pub use stream::{LineStream, StreamCursor};

/// This project's version,
/// as reported by git if available.
pub const VERSION: &str = git_version!(
    args = ["--tags", "--always", "--dirty=-modified"],
    fallback = clap::crate_version!()
);
