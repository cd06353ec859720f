#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics and terminal UI code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::new_without_default)]

//! # Ticked Extras
//!
//! The stock building blocks ticked configurations compose from:
//!
//! - [`formatters`]: status/urgency icons, casual due dates, child progress,
//!   tag highlighting.
//! - [`widgets`]: `Mode`, `Spacer`, `StatusIcons`, `TextBox`, and `Clock`
//!   bar widgets.
//! - [`dashboard`]: headline, ASCII-art, and date-line helpers.
//!
//! See `examples/everforest.rs` for a complete configuration wiring all
//! three together.

pub mod dashboard;
pub mod formatters;
pub mod widgets;

pub use formatters::{
    IconSet, casual_phrase, description_children_count, description_highlight_tags,
    due_casual_format, due_icon, status_icons, todo_description_progress, urgency_icons,
};
pub use widgets::{Clock, Mode, Spacer, StatusIcons, TextBox};
