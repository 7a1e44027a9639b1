// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::label::IndentLevel;

/// A color with an alpha channel,
/// as used in style-sheets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// 0.0 (transparent) - 1.0 (opaque)
    pub alpha: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Composites this color over `backdrop`,
    /// with this colors alpha additionally scaled by `opacity`.
    /// The alpha of `backdrop` is ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend_over(self, backdrop: Self, opacity: f32) -> (u8, u8, u8) {
        let weight = (self.alpha * opacity).clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            f32::from(fg)
                .mul_add(weight, f32::from(bg) * (1.0 - weight))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        (
            mix(self.red, backdrop.red),
            mix(self.green, backdrop.green),
            mix(self.blue, backdrop.blue),
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

fn parse_named(name: &str) -> Option<Rgba> {
    Some(match name {
        "black" => Rgba::opaque(0, 0, 0),
        "white" => Rgba::opaque(255, 255, 255),
        "gray" | "grey" => Rgba::opaque(128, 128, 128),
        "red" => Rgba::opaque(255, 0, 0),
        "green" => Rgba::opaque(0, 128, 0),
        "blue" => Rgba::opaque(0, 0, 255),
        "yellow" => Rgba::opaque(255, 255, 0),
        "orange" => Rgba::opaque(255, 165, 0),
        "violet" => Rgba::opaque(238, 130, 238),
        "purple" => Rgba::opaque(128, 0, 128),
        "cyan" | "aqua" => Rgba::opaque(0, 255, 255),
        "magenta" | "fuchsia" => Rgba::opaque(255, 0, 255),
        "transparent" => Rgba::new(0, 0, 0, 0.0),
        _ => return None,
    })
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    let short = |digit: &str| channel(digit.repeat(2).as_str());
    match hex.len() {
        6 => Some(Rgba::opaque(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        // Short form: #fff -> #ffffff
        3 => Some(Rgba::opaque(
            short(hex.get(0..1)?)?,
            short(hex.get(1..2)?)?,
            short(hex.get(2..3)?)?,
        )),
        _ => None,
    }
}

/// Parses the argument list of `rgb(...)` or `rgba(...)`.
fn parse_functional(args: &str, with_alpha: bool) -> Option<Rgba> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let (red, green, blue, alpha) = match (with_alpha, parts.as_slice()) {
        (false, [red, green, blue]) => (red, green, blue, "1"),
        (true, [red, green, blue, alpha]) => (red, green, blue, *alpha),
        _ => return None,
    };
    let alpha = alpha.parse::<f32>().ok()?;
    if !(0.0..=1.0).contains(&alpha) {
        return None;
    }
    Some(Rgba::new(
        red.parse().ok()?,
        green.parse().ok()?,
        blue.parse().ok()?,
        alpha,
    ))
}

/// Parses a subset of CSS color values:
/// `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
/// and a handful of color names.
///
/// # Errors
///
/// If `value` is none of the above.
pub fn parse_color(value: &str) -> Result<Rgba, ConfigurationError> {
    let lower = value.trim().to_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = lower
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        parse_functional(args, true)
    } else if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        parse_functional(args, false)
    } else {
        parse_named(&lower)
    };
    parsed.ok_or_else(|| ConfigurationError::InvalidColor(value.to_owned()))
}

impl FromStr for Rgba {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_color(value)
    }
}

/// A background opacity, within 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    pub const OPAQUE: Self = Self(1.0);

    /// # Errors
    ///
    /// If `opacity` is not within 0.0 - 1.0.
    pub fn new(opacity: f32) -> Result<Self, ConfigurationError> {
        if (0.0..=1.0).contains(&opacity) {
            Ok(Self(opacity))
        } else {
            Err(ConfigurationError::InvalidOpacity(opacity))
        }
    }

    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }
}

/// The background colors of the four indentation levels,
/// sharing one opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Rgba; 4],
    opacity: Opacity,
}

impl Palette {
    /// # Errors
    ///
    /// If `opacity` is not within 0.0 - 1.0.
    pub fn new(colors: [Rgba; 4], opacity: f32) -> Result<Self, ConfigurationError> {
        Ok(Self {
            colors,
            opacity: Opacity::new(opacity)?,
        })
    }

    #[must_use]
    pub const fn color(&self, level: IndentLevel) -> Rgba {
        match level {
            IndentLevel::One => self.colors[0],
            IndentLevel::Two => self.colors[1],
            IndentLevel::Three => self.colors[2],
            IndentLevel::Four => self.colors[3],
        }
    }

    pub const fn set_color(&mut self, level: IndentLevel, color: Rgba) {
        match level {
            IndentLevel::One => self.colors[0] = color,
            IndentLevel::Two => self.colors[1] = color,
            IndentLevel::Three => self.colors[2] = color,
            IndentLevel::Four => self.colors[3] = color,
        }
    }

    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    pub const fn set_opacity(&mut self, opacity: Opacity) {
        self.opacity = opacity;
    }

    /// The color to paint `level` with on top of `backdrop`.
    #[must_use]
    pub fn fill(&self, level: IndentLevel, backdrop: Rgba) -> (u8, u8, u8) {
        self.color(level).blend_over(backdrop, self.opacity.get())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                Rgba::new(0, 128, 0, 0.15),
                Rgba::new(255, 165, 0, 0.15),
                Rgba::new(255, 0, 0, 0.15),
                Rgba::new(238, 130, 238, 0.15),
            ],
            opacity: Opacity::OPAQUE,
        }
    }
}
