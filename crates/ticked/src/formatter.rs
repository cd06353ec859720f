//! Ordered formatter chains over display text.
//!
//! A formatter is a pure function `(subject, text) -> text`. Each displayed
//! field owns an ordered chain; rendering threads the field's base text
//! through every formatter in registration order:
//!
//! ```text
//! text = f_n(subject, ... f_1(subject, base) ...)
//! ```
//!
//! Ordering is the contract: a due-date chain registered as
//! `[casual_format, due_icon]` produces the casual phrase first and the icon
//! prepended second. Formatters share no state, so splitting a chain across
//! multiple `add` calls is equivalent to one pass over the concatenation.
//!
//! A formatter that panics during rendering is skipped: the chain continues
//! from the pre-panic text and the fault is logged with the formatter's
//! registered name. Rendering never aborts on a formatter fault.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::model::{Todo, Workspace};
use crate::text::Text;

/// The record a formatter is rendering.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Workspace(&'a Workspace),
    Todo(&'a Todo),
}

impl<'a> Subject<'a> {
    /// The workspace, if this subject is one.
    pub fn workspace(&self) -> Option<&'a Workspace> {
        match self {
            Subject::Workspace(ws) => Some(ws),
            Subject::Todo(_) => None,
        }
    }

    /// The to-do, if this subject is one.
    pub fn todo(&self) -> Option<&'a Todo> {
        match self {
            Subject::Todo(todo) => Some(todo),
            Subject::Workspace(_) => None,
        }
    }
}

/// A formatter function: pure, shared, panic-contained at apply time.
pub type FormatterFn = Arc<dyn Fn(Subject<'_>, Text) -> Text + Send + Sync>;

struct Entry {
    name: String,
    func: FormatterFn,
}

/// The ordered formatter chain for one displayed field.
pub struct FieldChain {
    field: &'static str,
    entries: Vec<Entry>,
}

impl FieldChain {
    fn new(field: &'static str) -> Self {
        Self {
            field,
            entries: Vec::new(),
        }
    }

    /// Appends a formatter to the end of the chain.
    ///
    /// The name identifies the formatter in fault logs and startup
    /// diagnostics; it does not need to be unique.
    pub fn add(&mut self, name: impl Into<String>, func: FormatterFn) {
        let name = name.into();
        debug!(
            formatter.field = self.field,
            formatter.name = %name,
            formatter.position = self.entries.len(),
            "Formatter registered"
        );
        self.entries.push(Entry { name, func });
    }

    /// Number of registered formatters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no formatter is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Threads `base` through every formatter in registration order.
    ///
    /// A panicking formatter is skipped and the chain continues from the
    /// text it received.
    pub fn apply(&self, subject: Subject<'_>, base: Text) -> Text {
        let mut text = base;
        for entry in &self.entries {
            let input = text.clone();
            match catch_unwind(AssertUnwindSafe(|| (entry.func)(subject, input))) {
                Ok(output) => text = output,
                Err(_) => {
                    warn!(
                        formatter.field = self.field,
                        formatter.name = %entry.name,
                        "Formatter panicked; leaving text unformatted"
                    );
                }
            }
        }
        trace!(
            formatter.field = self.field,
            formatter.chain_len = self.entries.len(),
            "Formatter chain applied"
        );
        text
    }
}

impl fmt::Debug for FieldChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldChain")
            .field("field", &self.field)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Formatter chains for workspace fields.
#[derive(Debug)]
pub struct WorkspaceFormatters {
    description: FieldChain,
}

impl WorkspaceFormatters {
    fn new() -> Self {
        Self {
            description: FieldChain::new("workspaces.description"),
        }
    }

    /// The description chain.
    pub fn description(&mut self) -> &mut FieldChain {
        &mut self.description
    }
}

/// Formatter chains for to-do fields.
#[derive(Debug)]
pub struct TodoFormatters {
    status: FieldChain,
    urgency: FieldChain,
    due: FieldChain,
    description: FieldChain,
}

impl TodoFormatters {
    fn new() -> Self {
        Self {
            status: FieldChain::new("todos.status"),
            urgency: FieldChain::new("todos.urgency"),
            due: FieldChain::new("todos.due"),
            description: FieldChain::new("todos.description"),
        }
    }

    /// The status chain.
    pub fn status(&mut self) -> &mut FieldChain {
        &mut self.status
    }

    /// The urgency chain.
    pub fn urgency(&mut self) -> &mut FieldChain {
        &mut self.urgency
    }

    /// The due-date chain.
    pub fn due(&mut self) -> &mut FieldChain {
        &mut self.due
    }

    /// The description chain.
    pub fn description(&mut self) -> &mut FieldChain {
        &mut self.description
    }
}

/// All formatter chains, grouped by display area.
///
/// Configuration navigates the write side
/// (`registry.todos().due().add(..)`); the host renders through the
/// `format_*` methods.
#[derive(Debug)]
pub struct FormatterRegistry {
    workspaces: WorkspaceFormatters,
    todos: TodoFormatters,
}

impl FormatterRegistry {
    /// Creates a registry with all chains empty.
    pub fn new() -> Self {
        Self {
            workspaces: WorkspaceFormatters::new(),
            todos: TodoFormatters::new(),
        }
    }

    /// Workspace-area chains, for registration.
    pub fn workspaces(&mut self) -> &mut WorkspaceFormatters {
        &mut self.workspaces
    }

    /// To-do-area chains, for registration.
    pub fn todos(&mut self) -> &mut TodoFormatters {
        &mut self.todos
    }

    /// Formats a workspace description.
    pub fn format_workspace_description(&self, ws: &Workspace, base: Text) -> Text {
        self.workspaces
            .description
            .apply(Subject::Workspace(ws), base)
    }

    /// Formats a to-do status cell.
    pub fn format_todo_status(&self, todo: &Todo, base: Text) -> Text {
        self.todos.status.apply(Subject::Todo(todo), base)
    }

    /// Formats a to-do urgency cell.
    pub fn format_todo_urgency(&self, todo: &Todo, base: Text) -> Text {
        self.todos.urgency.apply(Subject::Todo(todo), base)
    }

    /// Formats a to-do due-date cell.
    pub fn format_todo_due(&self, todo: &Todo, base: Text) -> Text {
        self.todos.due.apply(Subject::Todo(todo), base)
    }

    /// Formats a to-do description.
    pub fn format_todo_description(&self, todo: &Todo, base: Text) -> Text {
        self.todos.description.apply(Subject::Todo(todo), base)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
