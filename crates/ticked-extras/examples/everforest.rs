//! A complete user configuration: Everforest theme, formatter chains, a
//! status bar, and a dashboard, bootstrapped and printed to stdout.
//!
//! Run with: `cargo run --example everforest`

use std::collections::HashMap;

use anyhow::Result;
use ticked::{AppContext, InputMode, Role, StatusTally, Style, Text, Theme, Todo, TodoStatus};
use ticked_extras::dashboard;
use ticked_extras::formatters::{
    IconSet, description_children_count, description_highlight_tags, due_casual_format, due_icon,
    status_icons, todo_description_progress, urgency_icons,
};
use ticked_extras::widgets::{Clock, Mode, Spacer, StatusIcons, TextBox};

const ASCII_ART: &str = r"
                           (  (                  /\
                            (_)                 /  \  /\
                    ________[_]________      /\/    \/  \
           /\      /\        ______    \    /   /\/\  /\/\
          /  \    //_\       \    /\    \  /\/\/    \/    \
   /\    / /\/\  //___\       \__/  \    \/
  /  \  /\/    \//_____\       \ |[]|     \
 /\/\/\/       //_______\       \|__|      \
/      \      /XXXXXXXXXX\                  \
        \    /_I_II  I__I_\__________________\
               I_I|  I__I_____[]_|_[]_____I
               I_II  I__I_____[]_|_[]_____I
               I II__I  I     XXXXXXX     I
            ~~~~~   ~~~~~~~~~~~~~~~~~~~~~~~~
";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut ctx = AppContext::new();

    ctx.on_startup("setup-theme", |api| {
        api.set_theme(Theme::everforest_dark_hard_hc())?;
        Ok(())
    });

    ctx.on_startup("setup-formatters", |api| {
        let primary = api.theme().get(Role::Primary);
        let green = api.theme().get(Role::Green);
        let secondary = api.theme().get(Role::Secondary);
        let fmt = api.formatter();

        // ------- workspaces -------
        fmt.workspaces().description().add(
            "children-count",
            description_children_count(" ({}) ", Style::new().foreground(primary)),
        );

        // --------- todos ---------
        fmt.todos().status().add(
            "status-icons",
            status_icons(IconSet::new(" ", "󰞋 ", "󰅗 ")),
        );

        let u_icons = HashMap::from([
            (1, "  󰎤".to_string()),
            (2, "  󰎧".to_string()),
            (3, "  󰎪".to_string()),
            (4, "  󰎭".to_string()),
        ]);
        fmt.todos()
            .urgency()
            .add("urgency-icons", urgency_icons(u_icons));

        fmt.todos().due().add("due-casual", due_casual_format());
        fmt.todos()
            .due()
            .add("due-icon", due_icon(IconSet::new(" ", " ", " ")));

        fmt.todos().description().add(
            "progress",
            todo_description_progress(
                "  {completed_count}/{total_count}",
                Style::new().foreground(green),
            ),
        );
        fmt.todos().description().add(
            "highlight-tags",
            description_highlight_tags(" {}", Style::new().foreground(secondary)),
        );
        Ok(())
    });

    ctx.on_startup("setup-bar", |api| {
        let theme = api.theme();
        let bg2 = theme.get(Role::Background2);
        let bg3 = theme.get(Role::Background3);
        let fg1 = theme.get(Role::Foreground1);
        let primary = theme.get(Role::Primary);

        api.bar().set(vec![
            Box::new(Mode::new()),
            Box::new(Spacer::new(0)),
            Box::new(StatusIcons::new().bg(bg2)),
            Box::new(TextBox::new("  ").fg(fg1.clone()).bg(primary.clone())),
            Box::new(TextBox::new(" -4°C ").fg(fg1.clone()).bg(bg3.clone())),
            Box::new(TextBox::new(" 󰥔 ").fg(fg1.clone()).bg(primary)),
            Box::new(Clock::new("%I:%M %p").fg(fg1).bg(bg3)),
        ]);
        Ok(())
    });

    ctx.on_startup("setup-dashboard", |api| {
        let primary = api.theme().get(Role::Primary);
        let secondary = api.theme().get(Role::Secondary);

        api.dashboard().set(vec![
            dashboard::header(
                "Today's forecast: 100% chance of getting stuff done… maybe.",
                Style::new().foreground(primary.clone()).bold().italic(),
            ),
            dashboard::blank(),
            dashboard::art(ASCII_ART, Style::new().foreground(primary)),
            dashboard::blank(),
            dashboard::date_line(
                " 󰸘 %A, %d %b ",
                Style::new().foreground(secondary).bold().italic(),
            ),
        ]);
        Ok(())
    });

    let frozen = ctx.bootstrap()?;

    println!("{}", frozen.render_dashboard());

    let tally = StatusTally {
        completed: 4,
        pending: 2,
        overdue: 1,
    };
    let bar = frozen.render_bar(InputMode::Normal, tally, 80);
    println!("{}", bar.ansi());

    let todo = Todo::new("water the plants @home")
        .with_status(TodoStatus::Pending)
        .with_urgency(2)
        .with_progress(2, 5);
    let line = frozen.format_todo_description(&todo, Text::raw(todo.description()));
    println!("{}", line.ansi());

    Ok(())
}
