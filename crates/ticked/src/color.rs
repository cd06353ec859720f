//! Terminal color values.
//!
//! Colors are opaque identifiers supplied by themes: either a hex string
//! (`#b0ce8c`, `#fff`) or an ANSI 256 palette index (`"196"`). The host does
//! not interpret colors beyond format validation; rendering converts them to
//! escape sequences on demand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color specified by hex string or ANSI palette index.
///
/// # Examples
///
/// ```rust
/// use ticked::Color;
///
/// let hex = Color::from("#b0ce8c");
/// let ansi = Color::from("196");
/// assert!(hex.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    /// Create a new color from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parse as RGB if this is a hex color.
    pub fn as_rgb(&self) -> Option<(u8, u8, u8)> {
        let raw = self.0.trim();
        let s = raw.strip_prefix('#')?;
        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some((r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some((r, g, b))
        } else {
            None
        }
    }

    /// Parse as an ANSI 256 palette index.
    pub fn as_ansi(&self) -> Option<u8> {
        self.0.trim().parse::<u8>().ok()
    }

    /// Returns true if this color is a valid hex or ANSI value.
    pub fn is_valid(&self) -> bool {
        if self.0.trim().is_empty() {
            return false;
        }
        self.as_rgb().is_some() || self.as_ansi().is_some()
    }

    /// Foreground escape-sequence body for this color (no `\x1b[` prefix).
    pub(crate) fn ansi_fg(&self) -> Option<String> {
        if let Some((r, g, b)) = self.as_rgb() {
            Some(format!("38;2;{r};{g};{b}"))
        } else {
            self.as_ansi().map(|n| format!("38;5;{n}"))
        }
    }

    /// Background escape-sequence body for this color.
    pub(crate) fn ansi_bg(&self) -> Option<String> {
        if let Some((r, g, b)) = self.as_rgb() {
            Some(format!("48;2;{r};{g};{b}"))
        } else {
            self.as_ansi().map(|n| format!("48;5;{n}"))
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_as_rgb() {
        assert_eq!(Color::from("#b0ce8c").as_rgb(), Some((0xb0, 0xce, 0x8c)));
        assert_eq!(Color::from("#fff").as_rgb(), Some((255, 255, 255)));
        assert_eq!(Color::from("196").as_rgb(), None);
    }

    #[test]
    fn test_ansi_color() {
        assert_eq!(Color::from("196").as_ansi(), Some(196));
        assert_eq!(Color::from("#ff0000").as_ansi(), None);
    }

    #[test]
    fn test_validity() {
        assert!(Color::from("#272e33").is_valid());
        assert!(Color::from("42").is_valid());
        assert!(!Color::from("").is_valid());
        assert!(!Color::from("#gggggg").is_valid());
        assert!(!Color::from("fuchsia").is_valid());
    }
}
