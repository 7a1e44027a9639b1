// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

/// Invalid settings, detected when they are set,
/// never while classifying text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("The tab width has to be at least 1, but is {0}")]
    InvalidTabWidth(i64),

    #[error("Not a supported color value: '{0}'")]
    InvalidColor(String),

    #[error("The background opacity has to be within 0.0 - 1.0, but is {0}")]
    InvalidOpacity(f32),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("The target to highlight {} does not seem to exist", .0.display())]
    TargetFileDoesNotExist(PathBuf),

    #[error("Error while reading {}", .0.display())]
    FailedToReadTargetFile(PathBuf, #[source] std::io::Error),

    #[error("Error while reading from stdin")]
    FailedToReadStdin(#[source] std::io::Error),

    #[error(transparent)]
    Render(#[from] std::fmt::Error),

    /// Represents all cases of `std::io::Error`
    /// while writing the rendered output.
    #[error(transparent)]
    Output(#[from] std::io::Error),
}

pub type RbResult<T> = std::result::Result<T, Error>;
