use std::{fmt, str::FromStr};

use thiserror::Error;

/// An opaque 24-bit sRGB color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("Invalid hex color format: expected 3 or 6 hex digits, found {0}")]
    Length(usize),
    #[error("Invalid hex color format: {0:?} is not a hex digit")]
    Digit(char),
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parses `#rgb`, `rgb`, `#rrggbb` or `rrggbb`.
    ///
    /// The short form is expanded by doubling each digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(ParseColorError::Digit(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match digits[..] {
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(ParseColorError::Length(digits.len())),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Self { r, g, b } = self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
