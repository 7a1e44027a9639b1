// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use cli::{InitError, OutputFormat, STDIN, Settings};
use indent_rainbow::error::{Error, RbResult};
use indent_rainbow::highlight::Highlighter;
use indent_rainbow::render;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod cli;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to initialize the CLI tool: {0}")]
    Init(#[from] InitError),

    #[error("Failed to highlight the indentation: {0}")]
    Highlight(#[from] Error),
}

fn read_source(source: &Path) -> RbResult<String> {
    if source.as_os_str() == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(Error::FailedToReadStdin)?;
        Ok(text)
    } else if source.is_file() {
        std::fs::read_to_string(source)
            .map_err(|err| Error::FailedToReadTargetFile(source.into(), err))
    } else {
        Err(Error::TargetFileDoesNotExist(source.into()))
    }
}

fn run(settings: &Settings, sources: &[PathBuf]) -> RbResult<()> {
    let mut highlighter = Highlighter::new(settings.options.clone());
    let mut out = std::io::stdout().lock();
    for source in sources {
        tracing::debug!("Highlighting {} ...", source.display());
        let text = read_source(source)?;
        highlighter.restart();
        let highlights = highlighter.highlight(&text);
        let rendered = match settings.format {
            OutputFormat::Ansi => {
                render::ansi(&text, &highlights, &settings.options, settings.backdrop)?
            }
            OutputFormat::Labels => render::labels(&highlights),
        };
        out.write_all(rendered.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), CliError> {
    let (settings, sources) = cli::init()?;
    run(&settings, &sources)?;
    Ok(())
}
