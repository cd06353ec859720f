//! Stock formatter constructors.
//!
//! Each function builds a [`FormatterFn`] ready to append to a field chain.
//! All of them are pure over the subject and the accumulated text, and all
//! pass the text through unchanged when their field is absent (no due date,
//! no children, unmapped urgency level).
//!
//! # Example
//!
//! ```rust
//! use ticked::{AppContext, Style};
//! use ticked_extras::formatters::*;
//!
//! let mut ctx = AppContext::new();
//! ctx.on_startup("setup-formatters", |api| {
//!     let primary = api.theme().resolve("primary")?;
//!     let fmt = api.formatter();
//!     fmt.workspaces().description().add(
//!         "children-count",
//!         description_children_count(" ({}) ", Style::new().foreground(primary)),
//!     );
//!     fmt.todos().due().add("casual", due_casual_format());
//!     Ok(())
//! });
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use ticked::{FormatterFn, Span, Style, Text, TodoStatus};

/// One icon per to-do status, shared by [`status_icons`] and [`due_icon`].
#[derive(Debug, Clone)]
pub struct IconSet {
    pub completed: String,
    pub pending: String,
    pub overdue: String,
}

impl IconSet {
    /// Creates an icon set from the three status glyphs.
    pub fn new(
        completed: impl Into<String>,
        pending: impl Into<String>,
        overdue: impl Into<String>,
    ) -> Self {
        Self {
            completed: completed.into(),
            pending: pending.into(),
            overdue: overdue.into(),
        }
    }

    fn get(&self, status: TodoStatus) -> &str {
        match status {
            TodoStatus::Completed => &self.completed,
            TodoStatus::Pending => &self.pending,
            TodoStatus::Overdue => &self.overdue,
        }
    }
}

/// Appends a styled child count to a workspace description.
///
/// `fmt` is a template with a `{}` placeholder for the count, e.g.
/// `" ({}) "`. Workspaces without children pass through unchanged.
pub fn description_children_count(fmt: &str, style: Style) -> FormatterFn {
    let fmt = fmt.to_string();
    Arc::new(move |subject, mut text: Text| {
        let Some(ws) = subject.workspace() else {
            return text;
        };
        if ws.child_count() == 0 {
            return text;
        }
        let rendered = fmt.replace("{}", &ws.child_count().to_string());
        text.push(Span::new(rendered, style.clone()));
        text
    })
}

/// Replaces the status cell with the icon matching the to-do's status.
pub fn status_icons(icons: IconSet) -> FormatterFn {
    Arc::new(move |subject, text: Text| {
        let Some(todo) = subject.todo() else {
            return text;
        };
        Text::raw(icons.get(todo.status()))
    })
}

/// Replaces the urgency cell with the icon mapped to the to-do's urgency
/// level. Unmapped levels pass through unchanged.
pub fn urgency_icons(icons: HashMap<u8, String>) -> FormatterFn {
    Arc::new(move |subject, text: Text| {
        let Some(todo) = subject.todo() else {
            return text;
        };
        match icons.get(&todo.urgency()) {
            Some(icon) => Text::raw(icon.clone()),
            None => text,
        }
    })
}

/// The casual rendering of a date relative to `today`:
/// `today` / `tomorrow` / `yesterday`, the weekday name inside the coming
/// week, otherwise `%d %b` (e.g. `07 Mar`).
pub fn casual_phrase(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        2..=6 => date.format("%A").to_string(),
        _ => date.format("%d %b").to_string(),
    }
}

/// Replaces the due cell with the casual phrase for the due date.
/// To-dos without a due date pass through unchanged.
pub fn due_casual_format() -> FormatterFn {
    Arc::new(move |subject, text: Text| {
        let Some(todo) = subject.todo() else {
            return text;
        };
        match todo.due() {
            Some(due) => Text::raw(casual_phrase(due, Local::now().date_naive())),
            None => text,
        }
    })
}

/// Prepends the status icon to the due text. Registered after
/// [`due_casual_format`], this puts the icon in front of the casual phrase.
/// To-dos without a due date pass through unchanged.
pub fn due_icon(icons: IconSet) -> FormatterFn {
    Arc::new(move |subject, mut text: Text| {
        let Some(todo) = subject.todo() else {
            return text;
        };
        if todo.due().is_none() {
            return text;
        }
        text.push_front(Span::raw(icons.get(todo.status())));
        text
    })
}

/// Appends styled child progress to a to-do description.
///
/// `fmt` is a template with `{completed_count}` and `{total_count}`
/// placeholders, e.g. `"  {completed_count}/{total_count}"`. To-dos without
/// children pass through unchanged.
pub fn todo_description_progress(fmt: &str, style: Style) -> FormatterFn {
    let fmt = fmt.to_string();
    Arc::new(move |subject, mut text: Text| {
        let Some(todo) = subject.todo() else {
            return text;
        };
        if todo.total_count() == 0 {
            return text;
        }
        let rendered = fmt
            .replace("{completed_count}", &todo.completed_count().to_string())
            .replace("{total_count}", &todo.total_count().to_string());
        text.push(Span::new(rendered, style.clone()));
        text
    })
}

/// Re-styles `@tag` and `#tag` tokens in the description.
///
/// Rebuilds the text from its plain content, rendering each tag token
/// through the `{}` template with the given style. Non-tag tokens keep the
/// surrounding spacing but drop any prior span styling.
pub fn description_highlight_tags(fmt: &str, style: Style) -> FormatterFn {
    let fmt = fmt.to_string();
    Arc::new(move |subject, text: Text| {
        if subject.todo().is_none() {
            return text;
        }
        let plain = text.plain();
        let mut out = Text::new();
        for (i, token) in plain.split(' ').enumerate() {
            if i > 0 {
                out.push(Span::raw(" "));
            }
            let is_tag = token.len() > 1 && (token.starts_with('@') || token.starts_with('#'));
            if is_tag {
                out.push(Span::new(fmt.replace("{}", token), style.clone()));
            } else if !token.is_empty() {
                out.push(Span::raw(token));
            }
        }
        out
    })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use ticked::{Color, Subject, Todo, Workspace};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_children_count_appends_styled_span() {
        let style = Style::new().foreground("#b0ce8c");
        let f = description_children_count(" ({}) ", style.clone());
        let ws = Workspace::new("inbox").with_children(3);

        let out = f(Subject::Workspace(&ws), Text::raw("inbox"));
        assert_eq!(out.plain(), "inbox (3) ");
        let last = out.spans().last().unwrap();
        assert_eq!(last.content(), " (3) ");
        assert_eq!(
            last.style().foreground_color(),
            Some(&Color::from("#b0ce8c"))
        );
    }

    #[test]
    fn test_children_count_skips_empty_workspace() {
        let f = description_children_count(" ({}) ", Style::new());
        let ws = Workspace::new("empty");
        let out = f(Subject::Workspace(&ws), Text::raw("empty"));
        assert_eq!(out.plain(), "empty");
    }

    #[test]
    fn test_status_icons_replace_cell() {
        let f = status_icons(IconSet::new("x ", "? ", "! "));
        let todo = Todo::new("t").with_status(TodoStatus::Overdue);
        let out = f(Subject::Todo(&todo), Text::raw("pending"));
        assert_eq!(out.plain(), "! ");
    }

    #[test]
    fn test_urgency_icons_pass_through_unmapped() {
        let icons = HashMap::from([(4, "!!".to_string())]);
        let f = urgency_icons(icons);

        let urgent = Todo::new("t").with_urgency(4);
        assert_eq!(f(Subject::Todo(&urgent), Text::raw("4")).plain(), "!!");

        let mild = Todo::new("t").with_urgency(1);
        assert_eq!(f(Subject::Todo(&mild), Text::raw("1")).plain(), "1");
    }

    #[test]
    fn test_casual_phrase_near_dates() {
        let today = date(2025, 3, 5); // a Wednesday
        assert_eq!(casual_phrase(today, today), "today");
        assert_eq!(casual_phrase(today + Duration::days(1), today), "tomorrow");
        assert_eq!(casual_phrase(today - Duration::days(1), today), "yesterday");
        assert_eq!(casual_phrase(today + Duration::days(2), today), "Friday");
        assert_eq!(casual_phrase(today + Duration::days(9), today), "14 Mar");
        assert_eq!(casual_phrase(today - Duration::days(30), today), "03 Feb");
    }

    #[test]
    fn test_due_formatters_pass_through_without_due() {
        let todo = Todo::new("no deadline");
        let casual = due_casual_format();
        let icon = due_icon(IconSet::new("c", "p", "o"));
        let base = Text::raw("");
        let out = icon(
            Subject::Todo(&todo),
            casual(Subject::Todo(&todo), base.clone()),
        );
        assert_eq!(out, base);
    }

    #[test]
    fn test_due_icon_prepends() {
        let todo = Todo::new("t")
            .with_status(TodoStatus::Overdue)
            .with_due(date(2020, 1, 1));
        let f = due_icon(IconSet::new("c ", "p ", "o "));
        let out = f(Subject::Todo(&todo), Text::raw("yesterday"));
        assert_eq!(out.plain(), "o yesterday");
    }

    #[test]
    fn test_progress_appends_counts() {
        let f = todo_description_progress(
            "  {completed_count}/{total_count}",
            Style::new().foreground("#b0ce8c"),
        );
        let todo = Todo::new("project").with_progress(2, 5);
        let out = f(Subject::Todo(&todo), Text::raw("project"));
        assert_eq!(out.plain(), "project  2/5");
        assert!(out.plain().ends_with("  2/5"));
    }

    #[test]
    fn test_progress_skips_childless_todo() {
        let f = todo_description_progress("  {completed_count}/{total_count}", Style::new());
        let todo = Todo::new("leaf");
        assert_eq!(f(Subject::Todo(&todo), Text::raw("leaf")).plain(), "leaf");
    }

    #[test]
    fn test_highlight_tags_restyles_tokens() {
        let style = Style::new().foreground("#8cd1c8");
        let f = description_highlight_tags("{}", style.clone());
        let todo = Todo::new("buy milk @shop").with_tags(vec!["@shop".to_string()]);

        let out = f(Subject::Todo(&todo), Text::raw("buy milk @shop"));
        assert_eq!(out.plain(), "buy milk @shop");
        let tagged = out
            .spans()
            .iter()
            .find(|s| s.content() == "@shop")
            .unwrap();
        assert_eq!(tagged.style(), &style);
    }
}
