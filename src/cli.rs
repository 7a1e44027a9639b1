// SPDX-FileCopyrightText: 2021-2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{path::PathBuf, sync::LazyLock};

use clap::{Arg, ArgAction, Command, ValueEnum, ValueHint, command, crate_name, value_parser};
use cli_utils::logging;
use const_format::formatcp;
use indent_rainbow::error::ConfigurationError;
use indent_rainbow::label::IndentLevel;
use indent_rainbow::options::{RainbowOptions, TabWidth};
use indent_rainbow::palette::{Rgba, parse_color};
use indent_rainbow::preferences::Preferences;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const A_L_TAB_WIDTH: &str = "tab-width";
pub const A_S_TAB_WIDTH: char = 't';
pub const A_L_FORMAT: &str = "format";
pub const A_S_FORMAT: char = 'f';
pub const A_L_NO_RAINBOW: &str = "no-rainbow";
pub const A_L_COLOR1: &str = "color1";
pub const A_L_COLOR2: &str = "color2";
pub const A_L_COLOR3: &str = "color3";
pub const A_L_COLOR4: &str = "color4";
pub const A_L_OPACITY: &str = "opacity";
pub const A_L_BACKDROP: &str = "backdrop";
pub const A_L_QUIET: &str = "quiet";
pub const A_S_QUIET: char = 'q';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERSION: &str = "version";
pub const A_S_VERSION: char = 'V';
pub const A_L_SRC: &str = "src";

static DEFAULT_TAB_WIDTH_STR: LazyLock<String> = LazyLock::new(|| TabWidth::DEFAULT.to_string());
pub const DEFAULT_BACKDROP: &str = "#000000";
/// Source name meaning stdin
pub const STDIN: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The input, with its indentation colored by ANSI escape sequences
    Ansi,
    /// Only the label names, one line per input line
    Labels,
}

pub struct Settings {
    pub options: RainbowOptions,
    pub format: OutputFormat,
    pub backdrop: Rgba,
}

fn arg_tab_width() -> Arg {
    Arg::new(A_L_TAB_WIDTH)
        .help("Number of space-units per tab stop")
        .long_help(
            "Number of space-units per tab stop. \
A run of spaces advances to the next indentation level \
at every column that is a multiple of this.",
        )
        .num_args(1)
        .short(A_S_TAB_WIDTH)
        .long(A_L_TAB_WIDTH)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
        .default_value(DEFAULT_TAB_WIDTH_STR.as_str())
}

fn arg_format() -> Arg {
    Arg::new(A_L_FORMAT)
        .help("How to present the classified indentation")
        .num_args(1)
        .short(A_S_FORMAT)
        .long(A_L_FORMAT)
        .action(ArgAction::Set)
        .value_parser(value_parser!(OutputFormat))
        .default_value("ansi")
}

fn arg_no_rainbow() -> Arg {
    Arg::new(A_L_NO_RAINBOW)
        .help("Pass the input through without coloring anything")
        .action(ArgAction::SetTrue)
        .long(A_L_NO_RAINBOW)
}

const fn arg_id_color(level: IndentLevel) -> &'static str {
    match level {
        IndentLevel::One => A_L_COLOR1,
        IndentLevel::Two => A_L_COLOR2,
        IndentLevel::Three => A_L_COLOR3,
        IndentLevel::Four => A_L_COLOR4,
    }
}

fn arg_color(level: IndentLevel) -> Arg {
    Arg::new(arg_id_color(level))
        .help(format!(
            "Background color of indentation level {}",
            level.number()
        ))
        .long_help(format!(
            "Background color of indentation level {}. \
Supports '#rgb', '#rrggbb', 'rgb(r, g, b)', 'rgba(r, g, b, a)' \
and some color names.",
            level.number()
        ))
        .num_args(1)
        .long(arg_id_color(level))
        .action(ArgAction::Set)
        .value_name("COLOR")
}

fn arg_opacity() -> Arg {
    Arg::new(A_L_OPACITY)
        .help("Opacity of all indentation colors, within 0.0 - 1.0")
        .num_args(1)
        .long(A_L_OPACITY)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(f32))
}

fn arg_backdrop() -> Arg {
    Arg::new(A_L_BACKDROP)
        .help("The terminals background color, to blend the indentation colors onto")
        .num_args(1)
        .long(A_L_BACKDROP)
        .action(ArgAction::Set)
        .value_name("COLOR")
        .default_value(DEFAULT_BACKDROP)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stdout")
        .long_help("Minimize or suppress output to stdout, and only shows log output on stderr.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_src() -> Arg {
    Arg::new(A_L_SRC)
        .help(formatcp!(
            "Text file(s) to color the indentation of; '{STDIN}' for stdin"
        ))
        .num_args(1..)
        .value_name("FILE")
        .value_hint(ValueHint::FilePath)
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Set)
        .default_value(STDIN)
}

fn args_matcher() -> Command {
    let mut cmd = command!()
        .about("Colors indentation by depth")
        .long_about(
            "Colors the leading whitespace of every line \
in one of four rotating colors, one per indentation level, \
so nested blocks become easy to tell apart. \
 \
A tab always opens a new level, \
a space only if it starts a new tab stop.",
        )
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_tab_width())
        .arg(arg_format())
        .arg(arg_no_rainbow());
    for level in IndentLevel::ALL {
        cmd = cmd.arg(arg_color(level));
    }
    cmd.arg(arg_opacity())
        .arg(arg_backdrop())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_version())
        .arg(arg_src())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", indent_rainbow::VERSION);
    std::process::exit(0);
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to init logging system: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change the logging level: {0}")]
    LogChangeLevel(#[from] tracing_subscriber::reload::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

pub fn init() -> Result<(Settings, Vec<PathBuf>), InitError> {
    let log_reload_handle = logging::setup(crate_name!())?;
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let log_level = if verbose {
        LevelFilter::TRACE
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let mut preferences = Preferences::default();
    preferences.set_enabled(!args.get_flag(A_L_NO_RAINBOW));
    if let Some(tab_width) = args.get_one::<i64>(A_L_TAB_WIDTH) {
        preferences.set_tab_width(*tab_width)?;
    }
    for level in IndentLevel::ALL {
        if let Some(color) = args.get_one::<String>(arg_id_color(level)) {
            preferences.set_color(level, color)?;
        }
    }
    if let Some(opacity) = args.get_one::<f32>(A_L_OPACITY) {
        preferences.set_opacity(*opacity)?;
    }
    let backdrop = parse_color(
        args.get_one::<String>(A_L_BACKDROP)
            .map_or(DEFAULT_BACKDROP, String::as_str),
    )?;
    let format = args
        .get_one::<OutputFormat>(A_L_FORMAT)
        .copied()
        .unwrap_or(OutputFormat::Ansi);

    let src: Vec<PathBuf> = args
        .get_many::<PathBuf>(A_L_SRC)
        .map(|sources| sources.cloned().collect())
        .unwrap_or_else(|| vec![PathBuf::from(STDIN)]);
    Ok((
        Settings {
            options: preferences.options().clone(),
            format,
            backdrop,
        },
        src,
    ))
}
