//! Text styling.
//!
//! A [`Style`] carries the visual attributes a formatter or widget attaches
//! to display text: foreground, background, bold, and italic. Styles are
//! built with a fluent API where each method returns the modified style:
//!
//! ```rust
//! use ticked::Style;
//!
//! let style = Style::new().foreground("#b0ce8c").bold();
//! assert_eq!(style.render("done"), "\x1b[38;2;176;206;140;1mdone\x1b[0m");
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Visual attributes attached to a span of display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    foreground: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background: Option<Color>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
}

impl Style {
    /// Creates an empty style (terminal defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Enable bold text.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enable italic text.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Returns the foreground color, if set.
    pub fn foreground_color(&self) -> Option<&Color> {
        self.foreground.as_ref()
    }

    /// Returns the background color, if set.
    pub fn background_color(&self) -> Option<&Color> {
        self.background.as_ref()
    }

    /// Returns true if bold is set.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns true if italic is set.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && !self.bold && !self.italic
    }

    /// Render text with this style as an ANSI escape sequence.
    ///
    /// An empty style returns the text unchanged. Invalid color values are
    /// silently skipped rather than emitting broken sequences.
    pub fn render(&self, text: &str) -> String {
        let mut codes: Vec<String> = Vec::new();
        if let Some(fg) = self.foreground.as_ref().and_then(Color::ansi_fg) {
            codes.push(fg);
        }
        if let Some(bg) = self.background.as_ref().and_then(Color::ansi_bg) {
            codes.push(bg);
        }
        if self.bold {
            codes.push("1".to_string());
        }
        if self.italic {
            codes.push("3".to_string());
        }
        if codes.is_empty() {
            return text.to_string();
        }
        format!("\x1b[{}m{text}\x1b[0m", codes.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style_renders_plain() {
        assert_eq!(Style::new().render("hello"), "hello");
    }

    #[test]
    fn test_foreground_render() {
        let out = Style::new().foreground("#ff0000").render("x");
        assert_eq!(out, "\x1b[38;2;255;0;0mx\x1b[0m");
    }

    #[test]
    fn test_combined_attributes() {
        let out = Style::new()
            .foreground("196")
            .background("#000000")
            .bold()
            .italic()
            .render("x");
        assert_eq!(out, "\x1b[38;5;196;48;2;0;0;0;1;3mx\x1b[0m");
    }

    #[test]
    fn test_invalid_color_is_skipped() {
        let out = Style::new().foreground("not-a-color").bold().render("x");
        assert_eq!(out, "\x1b[1mx\x1b[0m");
    }
}
