//! The extension capability object and application context.
//!
//! [`Api`] is the single object startup handlers receive. It grants write
//! access to the process-wide customization state: active theme, formatter
//! chains, bar widgets, dashboard content, and key bindings.
//!
//! [`AppContext`] owns that state plus the event registry.
//! [`AppContext::bootstrap`] fires `Startup` once and freezes the result
//! into a [`FrozenContext`]: read-only for the lifetime of the render loop.
//!
//! ```rust
//! use ticked::{AppContext, Text, Theme};
//!
//! let mut ctx = AppContext::new();
//! ctx.on_startup("setup-theme", |api| {
//!     api.set_theme(Theme::everforest_dark_hard_hc())?;
//!     Ok(())
//! });
//! ctx.on_startup("setup-dashboard", |api| {
//!     api.dashboard().set(vec![Text::raw("hello")]);
//!     Ok(())
//! });
//!
//! let frozen = ctx.bootstrap().unwrap();
//! assert_eq!(frozen.theme().name(), "everforest-dark-hard-hc");
//! ```

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::events::{EventKind, ExtensionRegistry, HandlerError, StartupError};
use crate::formatter::FormatterRegistry;
use crate::model::{Todo, Workspace};
use crate::slots::{BarContext, BarSlot, DashboardSlot, InputMode, StatusTally};
use crate::text::Text;
use crate::theme::{Theme, ThemeError};

/// Errors from key-binding registration.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The binding string was empty.
    #[error("key binding must not be empty")]
    InvalidBinding,
}

/// String-keyed key bindings: binding (e.g. `<tab>`) to action name.
///
/// Dispatch belongs to the host; this layer only records the table.
/// Last write per binding wins.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: BTreeMap<String, String>,
}

impl KeyMap {
    /// Creates an empty keymap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a key sequence to an action, replacing any previous binding.
    ///
    /// # Errors
    /// Returns [`KeyError::InvalidBinding`] for an empty binding.
    pub fn set(
        &mut self,
        binding: impl Into<String>,
        action: impl Into<String>,
    ) -> Result<(), KeyError> {
        let binding = binding.into();
        if binding.is_empty() {
            return Err(KeyError::InvalidBinding);
        }
        let action = action.into();
        debug!(keys.binding = %binding, keys.action = %action, "Key bound");
        self.bindings.insert(binding, action);
        Ok(())
    }

    /// Looks up the action bound to a key sequence.
    pub fn get(&self, binding: &str) -> Option<&str> {
        self.bindings.get(binding).map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no binding is set.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The capability object handed to startup handlers.
///
/// Everything an extension may customize goes through here; handlers never
/// see the registry that invoked them.
#[derive(Debug, Default)]
pub struct Api {
    theme: Theme,
    formatter: FormatterRegistry,
    bar: BarSlot,
    dashboard: DashboardSlot,
    keys: KeyMap,
}

impl Api {
    /// Creates an api with the default theme and everything else empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a theme, replacing the active one as a whole value.
    ///
    /// Validation runs before the swap, so a rejected theme leaves the
    /// previous one fully in place.
    ///
    /// # Errors
    /// Returns [`ThemeError`] if the theme fails validation.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ThemeError> {
        theme.validate()?;
        info!(theme.from = %self.theme.name(), theme.to = %theme.name(), "Theme switched");
        self.theme = theme;
        Ok(())
    }

    /// The active theme, for resolving role colors during configuration.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The formatter registry, for appending to field chains.
    pub fn formatter(&mut self) -> &mut FormatterRegistry {
        &mut self.formatter
    }

    /// The status-bar widget slot.
    pub fn bar(&mut self) -> &mut BarSlot {
        &mut self.bar
    }

    /// The dashboard content slot.
    pub fn dashboard(&mut self) -> &mut DashboardSlot {
        &mut self.dashboard
    }

    /// The key-binding table.
    pub fn keys(&mut self) -> &mut KeyMap {
        &mut self.keys
    }
}

/// Process-wide customization state plus the event registry.
///
/// Created at process init, populated during startup, frozen before the
/// render loop begins.
#[derive(Debug, Default)]
pub struct AppContext {
    registry: ExtensionRegistry,
    api: Api,
}

impl AppContext {
    /// Creates a context with an empty registry and default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a named handler to the `Startup` event.
    pub fn on_startup<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut Api) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.registry.subscribe(EventKind::Startup, name, handler);
    }

    /// Direct registry access, for subscribing to other event kinds.
    pub fn registry(&mut self) -> &mut ExtensionRegistry {
        &mut self.registry
    }

    /// Fires `Startup` and freezes the populated state.
    ///
    /// # Errors
    /// Returns [`StartupError`] if any handler fails or panics; the context
    /// is consumed either way, since partially initialized state must not
    /// reach the render loop.
    pub fn bootstrap(mut self) -> Result<FrozenContext, StartupError> {
        self.registry.fire_startup(&mut self.api)?;
        let Api {
            theme,
            formatter,
            bar,
            dashboard,
            keys,
        } = self.api;
        Ok(FrozenContext {
            theme,
            formatter,
            bar,
            dashboard,
            keys,
        })
    }
}

/// Read-only customization state for the render loop.
///
/// No setter survives the freeze; the render loop can look up but never
/// mutate.
#[derive(Debug)]
pub struct FrozenContext {
    theme: Theme,
    formatter: FormatterRegistry,
    bar: BarSlot,
    dashboard: DashboardSlot,
    keys: KeyMap,
}

impl FrozenContext {
    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The key-binding table.
    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    /// Dashboard items, top to bottom.
    pub fn dashboard_items(&self) -> &[Text] {
        self.dashboard.items()
    }

    /// Renders the dashboard as styled lines joined by newlines.
    pub fn render_dashboard(&self) -> String {
        self.dashboard.render()
    }

    /// Renders the status bar into `width` cells.
    pub fn render_bar(&self, mode: InputMode, tally: StatusTally, width: usize) -> Text {
        let ctx = BarContext {
            theme: &self.theme,
            mode,
            tally,
        };
        self.bar.render(&ctx, width)
    }

    /// Formats a workspace description through its chain.
    pub fn format_workspace_description(&self, ws: &Workspace, base: Text) -> Text {
        self.formatter.format_workspace_description(ws, base)
    }

    /// Formats a to-do status cell through its chain.
    pub fn format_todo_status(&self, todo: &Todo, base: Text) -> Text {
        self.formatter.format_todo_status(todo, base)
    }

    /// Formats a to-do urgency cell through its chain.
    pub fn format_todo_urgency(&self, todo: &Todo, base: Text) -> Text {
        self.formatter.format_todo_urgency(todo, base)
    }

    /// Formats a to-do due-date cell through its chain.
    pub fn format_todo_due(&self, todo: &Todo, base: Text) -> Text {
        self.formatter.format_todo_due(todo, base)
    }

    /// Formats a to-do description through its chain.
    pub fn format_todo_description(&self, todo: &Todo, base: Text) -> Text {
        self.formatter.format_todo_description(todo, base)
    }
}
