//! End-to-end startup sequences against the public API.

use std::io::Write;

use ticked::{
    AppContext, BarContext, BarWidget, InputMode, Role, StartupError, StatusTally, Style, Text,
    Theme,
};

struct Label(&'static str);

impl BarWidget for Label {
    fn render(&self, _ctx: &BarContext<'_>) -> Text {
        Text::raw(self.0)
    }
}

struct Fill;

impl BarWidget for Fill {
    fn render(&self, _ctx: &BarContext<'_>) -> Text {
        Text::new()
    }

    fn is_flexible(&self) -> bool {
        true
    }
}

#[test]
fn full_startup_populates_frozen_context() {
    let mut ctx = AppContext::new();

    ctx.on_startup("setup-theme", |api| {
        api.set_theme(Theme::everforest_dark_hard_hc())?;
        Ok(())
    });
    ctx.on_startup("setup-bar", |api| {
        api.bar()
            .set(vec![Box::new(Label("mode")), Box::new(Fill), Box::new(Label("clock"))]);
        Ok(())
    });
    ctx.on_startup("setup-dashboard", |api| {
        let primary = api.theme().resolve("primary")?;
        api.dashboard().set(vec![
            Text::styled("header", Style::new().foreground(primary).bold()),
            Text::raw(""),
        ]);
        Ok(())
    });

    let frozen = ctx.bootstrap().unwrap();

    assert_eq!(frozen.theme().name(), "everforest-dark-hard-hc");
    assert_eq!(frozen.dashboard_items().len(), 2);

    let bar = frozen.render_bar(InputMode::Normal, StatusTally::default(), 20);
    assert_eq!(bar.plain(), format!("mode{}clock", " ".repeat(11)));
    assert_eq!(bar.width(), 20);
}

#[test]
fn failing_handler_aborts_and_names_itself() {
    let mut ctx = AppContext::new();
    ctx.on_startup("setup-theme", |api| {
        api.set_theme(Theme::everforest_dark_hard_hc())?;
        Ok(())
    });
    ctx.on_startup("setup-bar", |_api| Err("widget configuration broken".into()));

    let err = ctx.bootstrap().unwrap_err();
    let message = err.to_string();
    assert!(matches!(&err, StartupError::Handler { name, .. } if name == "setup-bar"));
    assert!(message.contains("setup-bar"), "diagnostic was: {message}");
}

#[test]
fn repeated_identical_set_is_idempotent() {
    let items = vec![Text::raw("one"), Text::raw("two")];

    let render_after = |sets: usize| {
        let items = items.clone();
        let mut ctx = AppContext::new();
        ctx.on_startup("setup-dashboard", move |api| {
            for _ in 0..sets {
                api.dashboard().set(items.clone());
            }
            Ok(())
        });
        ctx.bootstrap().unwrap().render_dashboard()
    };

    assert_eq!(render_after(1), render_after(2));
}

#[test]
fn theme_loaded_from_file_is_validated() {
    let theme = Theme::everforest_dark_hard_hc();
    let json = serde_json::to_string(&theme).unwrap();

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = Theme::from_file(file.path()).unwrap();
    assert_eq!(loaded, theme);
    assert_eq!(loaded.get(Role::Primary).0, "#b0ce8c");

    let mut bad = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    bad.write_all(json.replace("#f08080", "salmon").as_bytes())
        .unwrap();
    assert!(Theme::from_file(bad.path()).is_err());
}
