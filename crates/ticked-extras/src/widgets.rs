//! Stock status-bar widgets.
//!
//! Every widget holds only static configuration captured at startup;
//! per-render variation (mode, counts, theme, time) comes from the
//! [`BarContext`] or the clock. Widgets never block: the `Clock` formats the
//! current time, refresh scheduling belongs to the host.

use chrono::Local;
use ticked::{BarContext, BarWidget, Color, Role, Span, Style, Text, TodoStatus};

use crate::formatters::IconSet;

/// Shows the host's current input mode, colored by the active theme.
#[derive(Debug, Clone, Default)]
pub struct Mode;

impl Mode {
    pub fn new() -> Self {
        Self
    }
}

impl BarWidget for Mode {
    fn render(&self, ctx: &BarContext<'_>) -> Text {
        let bg = match ctx.mode {
            ticked::InputMode::Normal => ctx.theme.get(Role::Primary),
            ticked::InputMode::Insert => ctx.theme.get(Role::Secondary),
        };
        let style = Style::new()
            .foreground(ctx.theme.get(Role::Background1))
            .background(bg)
            .bold();
        Text::styled(format!(" {} ", ctx.mode.label()), style)
    }
}

/// Fixed-width gap, or a flexible fill when constructed with width 0.
///
/// A flexible spacer absorbs the bar's leftover cells, pushing the widgets
/// after it to the right edge.
#[derive(Debug, Clone)]
pub struct Spacer {
    width: usize,
}

impl Spacer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl BarWidget for Spacer {
    fn render(&self, _ctx: &BarContext<'_>) -> Text {
        if self.width == 0 {
            Text::new()
        } else {
            Text::raw(" ".repeat(self.width))
        }
    }

    fn is_flexible(&self) -> bool {
        self.width == 0
    }
}

/// Per-status item counts with colored icons.
#[derive(Debug, Clone)]
pub struct StatusIcons {
    icons: IconSet,
    bg: Option<Color>,
}

impl StatusIcons {
    pub fn new() -> Self {
        Self {
            icons: IconSet::new(" ", "󰞋 ", "󰅗 "),
            bg: None,
        }
    }

    /// Overrides the status glyphs.
    pub fn icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    /// Sets a background color behind the counts.
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }
}

impl Default for StatusIcons {
    fn default() -> Self {
        Self::new()
    }
}

impl BarWidget for StatusIcons {
    fn render(&self, ctx: &BarContext<'_>) -> Text {
        let cells = [
            (TodoStatus::Completed, &self.icons.completed, Role::Green),
            (TodoStatus::Pending, &self.icons.pending, Role::Yellow),
            (TodoStatus::Overdue, &self.icons.overdue, Role::Red),
        ];

        let mut out = Text::new();
        for (status, icon, role) in cells {
            let mut style = Style::new().foreground(ctx.theme.get(role));
            if let Some(bg) = &self.bg {
                style = style.background(bg.clone());
            }
            let count = ctx.tally.get(status);
            out.push(Span::new(format!(" {icon}{count}"), style));
        }
        if !out.is_empty() {
            let mut style = Style::new();
            if let Some(bg) = &self.bg {
                style = style.background(bg.clone());
            }
            out.push(Span::new(" ", style));
        }
        out
    }
}

/// Static styled text.
#[derive(Debug, Clone)]
pub struct TextBox {
    text: String,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl TextBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
        }
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    fn style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.foreground(fg.clone());
        }
        if let Some(bg) = &self.bg {
            style = style.background(bg.clone());
        }
        style
    }
}

impl BarWidget for TextBox {
    fn render(&self, _ctx: &BarContext<'_>) -> Text {
        Text::styled(self.text.clone(), self.style())
    }
}

/// The current time, rendered through a chrono format string.
///
/// Formatting happens at render time; the host's own scheduling decides how
/// often the bar re-renders.
#[derive(Debug, Clone)]
pub struct Clock {
    format: String,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl Clock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            fg: None,
            bg: None,
        }
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }
}

impl BarWidget for Clock {
    fn render(&self, _ctx: &BarContext<'_>) -> Text {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.foreground(fg.clone());
        }
        if let Some(bg) = &self.bg {
            style = style.background(bg.clone());
        }
        Text::styled(Local::now().format(&self.format).to_string(), style)
    }
}

#[cfg(test)]
mod tests {
    use ticked::{InputMode, StatusTally, Theme};

    use super::*;

    fn ctx(theme: &Theme, mode: InputMode, tally: StatusTally) -> BarContext<'_> {
        BarContext { theme, mode, tally }
    }

    #[test]
    fn test_mode_uses_theme_accents() {
        let theme = Theme::everforest_dark_hard_hc();
        let normal = Mode::new().render(&ctx(&theme, InputMode::Normal, StatusTally::default()));
        assert_eq!(normal.plain(), " NORMAL ");
        let span = &normal.spans()[0];
        assert_eq!(
            span.style().background_color(),
            Some(&Color::from("#b0ce8c"))
        );

        let insert = Mode::new().render(&ctx(&theme, InputMode::Insert, StatusTally::default()));
        assert_eq!(insert.plain(), " INSERT ");
    }

    #[test]
    fn test_spacer_fixed_and_flexible() {
        let theme = Theme::default();
        let c = ctx(&theme, InputMode::Normal, StatusTally::default());

        let fixed = Spacer::new(3);
        assert!(!fixed.is_flexible());
        assert_eq!(fixed.render(&c).plain(), "   ");

        let flex = Spacer::new(0);
        assert!(flex.is_flexible());
        assert!(flex.render(&c).is_empty());
    }

    #[test]
    fn test_status_icons_show_counts() {
        let theme = Theme::default();
        let tally = StatusTally {
            completed: 4,
            pending: 2,
            overdue: 1,
        };
        let widget = StatusIcons::new()
            .icons(IconSet::new("c", "p", "o"))
            .bg(theme.get(Role::Background2));
        let out = widget.render(&ctx(&theme, InputMode::Normal, tally));
        assert_eq!(out.plain(), " c4 p2 o1 ");
    }

    #[test]
    fn test_textbox_static_styling() {
        let theme = Theme::default();
        let widget = TextBox::new(" -4°C ").fg("#e8e4cf").bg("#374145");
        let out = widget.render(&ctx(&theme, InputMode::Normal, StatusTally::default()));
        assert_eq!(out.plain(), " -4°C ");
        let span = &out.spans()[0];
        assert_eq!(
            span.style().foreground_color(),
            Some(&Color::from("#e8e4cf"))
        );
        assert_eq!(
            span.style().background_color(),
            Some(&Color::from("#374145"))
        );
    }

    #[test]
    fn test_clock_renders_format() {
        let theme = Theme::default();
        let widget = Clock::new("%Y");
        let out = widget.render(&ctx(&theme, InputMode::Normal, StatusTally::default()));
        assert_eq!(out.plain().len(), 4);
        assert!(out.plain().chars().all(|c| c.is_ascii_digit()));
    }
}
