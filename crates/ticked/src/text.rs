//! Styled display text.
//!
//! [`Text`] is the unit of display output that flows through formatter chains
//! and out of bar widgets: an ordered list of spans, each carrying its own
//! [`Style`]. Formatters append, prepend, or replace spans; the host renders
//! the result with [`Text::ansi`] and measures it with [`Text::width`].

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::style::Style;

/// A single run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    content: String,
    style: Style,
}

impl Span {
    /// Creates a styled span.
    pub fn new(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Creates an unstyled span.
    pub fn raw(content: impl Into<String>) -> Self {
        Self::new(content, Style::new())
    }

    /// The span's text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The span's style.
    pub fn style(&self) -> &Style {
        &self.style
    }
}

/// Styled display text: an ordered sequence of spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    spans: Vec<Span>,
}

impl Text {
    /// Creates empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates text from a single unstyled string.
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::raw(content)],
        }
    }

    /// Creates text from a single styled string.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::new(content, style)],
        }
    }

    /// The spans making up this text, in display order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Appends a span at the end.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Inserts a span at the front.
    pub fn push_front(&mut self, span: Span) {
        self.spans.insert(0, span);
    }

    /// Appends another text's spans, consuming it.
    pub fn extend(&mut self, other: Text) {
        self.spans.extend(other.spans);
    }

    /// Builder form of [`Text::push`].
    pub fn with(mut self, span: Span) -> Self {
        self.push(span);
        self
    }

    /// Returns true if this text has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The unstyled concatenation of all spans.
    pub fn plain(&self) -> String {
        self.spans.iter().map(Span::content).collect()
    }

    /// Render all spans as ANSI escape sequences.
    pub fn ansi(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.style.render(&s.content))
            .collect()
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        self.spans
            .iter()
            .map(|s| UnicodeWidthStr::width(s.content.as_str()))
            .sum()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::raw(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::raw(s)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ansi())
    }
}
