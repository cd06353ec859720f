#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics and terminal UI code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::new_without_default)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # Ticked
//!
//! The extension host for a terminal to-do application. User configuration
//! code runs exactly once at startup, before the render loop, and customizes
//! process-wide state through a single capability object:
//!
//! - **Themes**: named palettes of semantic color roles, validated at
//!   install time, swapped atomically.
//! - **Formatters**: ordered chains of pure `(record, text) -> text`
//!   functions over each displayed field.
//! - **Bar / dashboard slots**: write-once widget and content lists,
//!   rendered left-to-right and top-to-bottom.
//! - **Key bindings**: a string-keyed table, dispatch left to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use ticked::{AppContext, Text, Theme};
//!
//! let mut ctx = AppContext::new();
//!
//! ctx.on_startup("setup-theme", |api| {
//!     api.set_theme(Theme::everforest_dark_hard_hc())?;
//!     Ok(())
//! });
//!
//! ctx.on_startup("setup-dashboard", |api| {
//!     let primary = api.theme().resolve("primary")?;
//!     api.dashboard().set(vec![Text::styled(
//!         "get stuff done",
//!         ticked::Style::new().foreground(primary).bold(),
//!     )]);
//!     Ok(())
//! });
//!
//! let frozen = ctx.bootstrap()?;
//! assert_eq!(frozen.dashboard_items().len(), 1);
//! # Ok::<(), ticked::StartupError>(())
//! ```
//!
//! Startup handlers run sequentially, in registration order, on the
//! bootstrapping thread. A failing handler aborts startup with a diagnostic
//! naming it; a formatter that faults at render time is skipped and logged,
//! never fatal.

pub mod api;
pub mod color;
pub mod events;
pub mod formatter;
pub mod model;
pub mod slots;
pub mod style;
pub mod text;
pub mod theme;

pub use api::{Api, AppContext, FrozenContext, KeyError, KeyMap};
pub use color::Color;
pub use events::{EventKind, ExtensionRegistry, HandlerError, HandlerFn, StartupError};
pub use formatter::{FieldChain, FormatterFn, FormatterRegistry, Subject};
pub use model::{Todo, TodoStatus, Workspace};
pub use slots::{BarContext, BarSlot, BarWidget, DashboardSlot, InputMode, StatusTally};
pub use style::Style;
pub use text::{Span, Text};
pub use theme::{Palette, Role, Theme, ThemeError, ThemeLoadError};
