//! The stock formatters wired through a real startup sequence, checking the
//! rendered output a user configuration actually sees.

use chrono::{Duration, Local};
use ticked::{AppContext, Color, Role, Style, Text, Theme, Todo, TodoStatus, Workspace};
use ticked_extras::formatters::{
    IconSet, description_children_count, due_casual_format, due_icon, todo_description_progress,
};

fn everforest_context() -> AppContext {
    let mut ctx = AppContext::new();
    ctx.on_startup("setup-theme", |api| {
        api.set_theme(Theme::everforest_dark_hard_hc())?;
        Ok(())
    });
    ctx
}

#[test]
fn workspace_children_count_renders_with_primary_color() {
    let mut ctx = everforest_context();
    ctx.on_startup("setup-formatters", |api| {
        let primary = api.theme().get(Role::Primary);
        api.formatter().workspaces().description().add(
            "children-count",
            description_children_count(" ({}) ", Style::new().foreground(primary)),
        );
        Ok(())
    });

    let frozen = ctx.bootstrap().unwrap();
    let ws = Workspace::new("errands").with_children(3);
    let out = frozen.format_workspace_description(&ws, Text::raw("errands"));

    assert!(out.plain().contains(" (3) "));
    let span = out.spans().iter().find(|s| s.content() == " (3) ").unwrap();
    assert_eq!(
        span.style().foreground_color(),
        Some(&Color::from("#b0ce8c"))
    );
}

#[test]
fn progress_formatter_yields_trailing_counts() {
    let mut ctx = everforest_context();
    ctx.on_startup("setup-formatters", |api| {
        let green = api.theme().get(Role::Green);
        api.formatter().todos().description().add(
            "progress",
            todo_description_progress(
                "  {completed_count}/{total_count}",
                Style::new().foreground(green),
            ),
        );
        Ok(())
    });

    let frozen = ctx.bootstrap().unwrap();
    let todo = Todo::new("spring cleaning").with_progress(2, 5);
    let out = frozen.format_todo_description(&todo, Text::raw(todo.description()));
    assert!(out.plain().ends_with("  2/5"));
}

#[test]
fn overdue_due_chain_applies_casual_then_icon() {
    let mut ctx = everforest_context();
    ctx.on_startup("setup-formatters", |api| {
        let fmt = api.formatter();
        fmt.todos().due().add("due-casual", due_casual_format());
        fmt.todos()
            .due()
            .add("due-icon", due_icon(IconSet::new(" ", " ", " ")));
        Ok(())
    });

    let frozen = ctx.bootstrap().unwrap();
    let yesterday = Local::now().date_naive() - Duration::days(1);
    let todo = Todo::new("file taxes")
        .with_status(TodoStatus::Overdue)
        .with_due(yesterday);

    let out = frozen.format_todo_due(&todo, Text::raw("")).plain();
    assert!(out.contains(""), "missing overdue icon in {out:?}");
    assert!(out.contains("yesterday"), "missing casual phrase in {out:?}");
    // Icon was prepended by the second formatter, so it precedes the phrase.
    assert!(out.find("").unwrap() < out.find("yesterday").unwrap());
}

#[test]
fn due_chain_passes_through_without_due_date() {
    let mut ctx = everforest_context();
    ctx.on_startup("setup-formatters", |api| {
        let fmt = api.formatter();
        fmt.todos().due().add("due-casual", due_casual_format());
        fmt.todos()
            .due()
            .add("due-icon", due_icon(IconSet::new(" ", " ", " ")));
        Ok(())
    });

    let frozen = ctx.bootstrap().unwrap();
    let todo = Todo::new("someday maybe");
    assert_eq!(frozen.format_todo_due(&todo, Text::raw("")).plain(), "");
}
