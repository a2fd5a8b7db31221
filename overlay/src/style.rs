//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::result::{OverlayError, OverlayResult};

/// A terminal color for dialog styling.
///
/// Covers the classic named palette, the bright variants, 256-color palette
/// indices, and 24-bit RGB values. RGB values are usually written as hex
/// strings in theme configuration and parsed with [`Color::from_hex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black - Color #0 (FG `30`, BG `40`).
    Black,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue,
    /// Purple - Color #5 (FG `35`, BG `45`).
    Purple,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan,
    /// White - Color #7 (FG `37`, BG `47`).
    White,
    /// Bright Black (FG `90`, BG `100`).
    BrightBlack,
    /// Bright Red (FG `91`, BG `101`).
    BrightRed,
    /// Bright Green (FG `92`, BG `102`).
    BrightGreen,
    /// Bright Yellow (FG `93`, BG `103`).
    BrightYellow,
    /// Bright Blue (FG `94`, BG `104`).
    BrightBlue,
    /// Bright Purple (FG `95`, BG `105`).
    BrightPurple,
    /// Bright Cyan (FG `96`, BG `106`).
    BrightCyan,
    /// Bright White (FG `97`, BG `107`).
    BrightWhite,
    /// A 256-color palette index (`38;5;n` / `48;5;n`).
    Fixed(u8),
    /// A 24-bit color (`38;2;r;g;b` / `48;2;r;g;b`).
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parses a `#rrggbb` hex string into an RGB color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modalix_overlay::Color;
    ///
    /// assert_eq!(Color::from_hex("#00ff00").unwrap(), Color::Rgb(0, 255, 0));
    /// assert!(Color::from_hex("#12345").is_err());
    /// assert!(Color::from_hex("123456").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> OverlayResult<Color> {
        let digits = hex.strip_prefix('#').ok_or_else(|| OverlayError::InvalidColor {
            value: String::from(hex),
            reason: "expected a leading '#'",
        })?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(OverlayError::InvalidColor {
                value: String::from(hex),
                reason: "expected six hex digits",
            });
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| OverlayError::InvalidColor {
                value: String::from(hex),
                reason: "expected six hex digits",
            })
        };
        Ok(Color::Rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }

    /// SGR parameter string selecting this color as the foreground.
    fn foreground_params(self) -> String {
        match self {
            Color::Black => String::from("30"),
            Color::Red => String::from("31"),
            Color::Green => String::from("32"),
            Color::Yellow => String::from("33"),
            Color::Blue => String::from("34"),
            Color::Purple => String::from("35"),
            Color::Cyan => String::from("36"),
            Color::White => String::from("37"),
            Color::BrightBlack => String::from("90"),
            Color::BrightRed => String::from("91"),
            Color::BrightGreen => String::from("92"),
            Color::BrightYellow => String::from("93"),
            Color::BrightBlue => String::from("94"),
            Color::BrightPurple => String::from("95"),
            Color::BrightCyan => String::from("96"),
            Color::BrightWhite => String::from("97"),
            Color::Fixed(n) => format!("38;5;{n}"),
            Color::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    /// SGR parameter string selecting this color as the background.
    fn background_params(self) -> String {
        match self {
            Color::Fixed(n) => format!("48;5;{n}"),
            Color::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
            named => {
                // Background codes for the named palette are the foreground
                // codes shifted by ten.
                let fg: u8 = named
                    .foreground_params()
                    .parse()
                    .unwrap_or(37);
                format!("{}", fg + 10)
            }
        }
    }
}

/// A renderable set of SGR attributes: optional bold weight, foreground, and
/// background colors.
///
/// Styles build up through chained setters and wrap text in a single
/// combined SGR sequence plus a trailing reset. A style with no attributes
/// leaves text untouched, so unthemed dialogs render as plain boxes.
///
/// # Examples
///
/// ```rust
/// use modalix_overlay::{Color, Style};
///
/// let style = Style::new().bold().foreground(Color::Red);
/// assert_eq!(style.render("hi"), "\x1b[1;31mhi\x1b[0m");
/// assert_eq!(Style::new().render("hi"), "hi");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    bold: bool,
    foreground: Option<Color>,
    background: Option<Color>,
}

impl Style {
    /// Creates an empty style with no attributes.
    pub fn new() -> Style {
        Style::default()
    }

    /// Enables bold weight.
    pub fn bold(mut self) -> Style {
        self.bold = true;
        self
    }

    /// Sets the foreground color.
    pub fn foreground(mut self, color: Color) -> Style {
        self.foreground = Some(color);
        self
    }

    /// Sets the background color.
    pub fn background(mut self, color: Color) -> Style {
        self.background = Some(color);
        self
    }

    /// Returns `true` if no attributes are set.
    pub fn is_plain(&self) -> bool {
        !self.bold && self.foreground.is_none() && self.background.is_none()
    }

    /// The combined SGR opening sequence, empty for a plain style.
    pub fn prefix(&self) -> String {
        if self.is_plain() {
            return String::new();
        }
        let mut params = Vec::new();
        if self.bold {
            params.push(String::from("1"));
        }
        if let Some(color) = self.foreground {
            params.push(color.foreground_params());
        }
        if let Some(color) = self.background {
            params.push(color.background_params());
        }
        format!("\x1b[{}m", params.join(";"))
    }

    /// Wraps `text` in this style's SGR sequence and a reset.
    ///
    /// A plain style returns the text unchanged, with no escape bytes at
    /// all. The emitted sequences use the same grammar the tokenizer
    /// recognizes, so rendered output parses back into styled spans.
    pub fn render(&self, text: &str) -> String {
        if self.is_plain() {
            return String::from(text);
        }
        format!("{}{}\x1b[0m", self.prefix(), text)
    }
}
