// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hex color conversion.
//!
//! Color pickers report `#RRGGBB`; the CSS rule wants the decimal channels of
//! an `rgba(...)` function. [`hex_to_rgb`] reads the three channels from fixed
//! positions and never fails: whatever cannot be read as a channel renders as
//! `0`, so a broken picker value shows up as a black shadow rather than an
//! error.

use core::fmt;

use peniko::Color;

/// Decimal channels of an `#RRGGBB` color.
///
/// [`Display`](fmt::Display) renders the channel list used inside `rgba(...)`:
///
/// ```rust
/// use understory_shadow::Rgb;
///
/// let rgb = Rgb::new(26, 43, 60);
/// assert_eq!(rgb.to_string(), "26, 43, 60");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    #[must_use]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Combines the channels with an opacity into a [`Color`].
    ///
    /// The opacity is passed through as the alpha component without clamping.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Color {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "alpha is stored as f32 by the color type"
        )]
        let alpha = opacity as f32;
        Color::from_rgb8(self.r, self.g, self.b).with_alpha(alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Converts a `#RRGGBB` string into its decimal channels.
///
/// Channels are read from character positions 1–2, 3–4 and 5–6. The leading
/// character is not checked and anything past position 6 is ignored. A
/// channel whose digits are missing or not hexadecimal becomes `0`; a
/// whitespace low digit is dropped, leaving the high digit as the value.
///
/// ```rust
/// use understory_shadow::{Rgb, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#FFFFFF"), Rgb::new(255, 255, 255));
/// assert_eq!(hex_to_rgb("#1a2B3c").to_string(), "26, 43, 60");
///
/// // Garbage in, zeros out.
/// assert_eq!(hex_to_rgb("#12zz"), Rgb::new(18, 0, 0));
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let mut chars = hex.chars().skip(1);
    let mut next_channel = || channel(chars.next(), chars.next());
    let r = next_channel();
    let g = next_channel();
    let b = next_channel();
    Rgb { r, g, b }
}

fn channel(high: Option<char>, low: Option<char>) -> u8 {
    let Some(high) = high.and_then(hex_digit) else {
        return 0;
    };
    match low {
        Some(low) if low.is_whitespace() => high,
        Some(low) => hex_digit(low).map_or(0, |low| high * 16 + low),
        None => 0,
    }
}

fn hex_digit(c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
