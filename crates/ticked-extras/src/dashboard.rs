//! Dashboard content helpers.
//!
//! The dashboard slot takes plain [`Text`] lines; these helpers cover the
//! usual shapes a configuration wants: a styled headline, a block of ASCII
//! art, and a formatted date line.

use chrono::Local;
use ticked::{Style, Text};

/// A styled headline.
pub fn header(text: impl Into<String>, style: Style) -> Text {
    Text::styled(text, style)
}

/// A block of ASCII art rendered in one style. Newlines are preserved by
/// the dashboard renderer.
pub fn art(ascii: impl Into<String>, style: Style) -> Text {
    Text::styled(ascii, style)
}

/// An empty separator line.
pub fn blank() -> Text {
    Text::raw("")
}

/// Today's date rendered through a chrono format string.
pub fn date_line(format: &str, style: Style) -> Text {
    Text::styled(Local::now().format(format).to_string(), style)
}

#[cfg(test)]
mod tests {
    use ticked::Color;

    use super::*;

    #[test]
    fn test_header_carries_style() {
        let line = header("forecast", Style::new().foreground("#b0ce8c").bold());
        assert_eq!(line.plain(), "forecast");
        assert_eq!(
            line.spans()[0].style().foreground_color(),
            Some(&Color::from("#b0ce8c"))
        );
    }

    #[test]
    fn test_blank_is_empty_line() {
        assert_eq!(blank().plain(), "");
    }

    #[test]
    fn test_date_line_formats() {
        let line = date_line("%Y", Style::new());
        assert_eq!(line.plain().len(), 4);
    }
}
