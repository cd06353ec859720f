//! Bar and dashboard content slots.
//!
//! Both slots are write-once-per-startup lists: `set` replaces the whole
//! list atomically and later calls within the same startup overwrite earlier
//! ones. There is no merging. Bar widgets render left-to-right, dashboard
//! items top-to-bottom.

use std::fmt;

use tracing::debug;

use crate::model::TodoStatus;
use crate::text::{Span, Text};
use crate::theme::Theme;

/// The host's current input mode, shown by the `Mode` bar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

impl InputMode {
    /// Uppercase label as shown in the bar.
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Normal => "NORMAL",
            InputMode::Insert => "INSERT",
        }
    }
}

/// Per-status item counts for the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

impl StatusTally {
    /// The count for one status.
    pub fn get(&self, status: TodoStatus) -> usize {
        match status {
            TodoStatus::Completed => self.completed,
            TodoStatus::Pending => self.pending,
            TodoStatus::Overdue => self.overdue,
        }
    }
}

/// Read-only host state handed to bar widgets at render time.
#[derive(Debug)]
pub struct BarContext<'a> {
    pub theme: &'a Theme,
    pub mode: InputMode,
    pub tally: StatusTally,
}

/// A static, pre-configured display unit placed in the bar.
///
/// Widgets are constructed once during startup and never mutated after being
/// handed to the slot; all per-render variation comes from the
/// [`BarContext`].
pub trait BarWidget: Send + Sync {
    /// Render this widget's text for the current host state.
    fn render(&self, ctx: &BarContext<'_>) -> Text;

    /// Flexible widgets absorb leftover bar width (see [`BarSlot::render`]).
    fn is_flexible(&self) -> bool {
        false
    }
}

/// The status-bar widget slot.
#[derive(Default)]
pub struct BarSlot {
    widgets: Vec<Box<dyn BarWidget>>,
}

impl BarSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire widget list. Last write wins.
    pub fn set(&mut self, widgets: Vec<Box<dyn BarWidget>>) {
        debug!(bar.widgets = widgets.len(), "Bar widgets set");
        self.widgets = widgets;
    }

    /// The current widget list, in display order.
    pub fn widgets(&self) -> &[Box<dyn BarWidget>] {
        &self.widgets
    }

    /// Renders the bar left-to-right into `width` terminal cells.
    ///
    /// Fixed widgets keep their natural width; leftover cells are split
    /// across flexible widgets, remainder to the leftmost one. When fixed
    /// content already exceeds `width`, flexible widgets collapse to zero and
    /// the content is left to overflow.
    pub fn render(&self, ctx: &BarContext<'_>, width: usize) -> Text {
        let rendered: Vec<(Text, bool)> = self
            .widgets
            .iter()
            .map(|w| (w.render(ctx), w.is_flexible()))
            .collect();

        let fixed: usize = rendered
            .iter()
            .filter(|(_, flex)| !flex)
            .map(|(text, _)| text.width())
            .sum();
        let flex_count = rendered.iter().filter(|(_, flex)| *flex).count();
        let slack = width.saturating_sub(fixed);
        let (share, mut remainder) = if flex_count == 0 {
            (0, 0)
        } else {
            (slack / flex_count, slack % flex_count)
        };

        let mut out = Text::new();
        for (text, flex) in rendered {
            if flex {
                let mut cells = share;
                if remainder > 0 {
                    cells += 1;
                    remainder -= 1;
                }
                if cells > 0 {
                    out.push(Span::raw(" ".repeat(cells)));
                }
            } else {
                out.extend(text);
            }
        }
        out
    }
}

impl fmt::Debug for BarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarSlot")
            .field("widgets", &self.widgets.len())
            .finish_non_exhaustive()
    }
}

/// The dashboard content slot: styled lines rendered top-to-bottom.
#[derive(Debug, Clone, Default)]
pub struct DashboardSlot {
    items: Vec<Text>,
}

impl DashboardSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire item list. Last write wins.
    pub fn set(&mut self, items: Vec<Text>) {
        debug!(dashboard.items = items.len(), "Dashboard content set");
        self.items = items;
    }

    /// The current items, top to bottom.
    pub fn items(&self) -> &[Text] {
        &self.items
    }

    /// Renders all items joined by newlines, with styling.
    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(Text::ansi)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
