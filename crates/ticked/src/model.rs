//! Read-only record views the formatter pipeline consumes.
//!
//! The host application owns the actual to-do data model and its storage;
//! these types are the display-facing projection handed to formatters at
//! render time. They carry exactly the fields the stock formatters need.

use chrono::NaiveDate;

/// Completion state of a to-do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoStatus {
    Completed,
    Pending,
    Overdue,
}

/// A to-do item as seen by formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    description: String,
    status: TodoStatus,
    urgency: u8,
    due: Option<NaiveDate>,
    tags: Vec<String>,
    completed_count: usize,
    total_count: usize,
}

impl Todo {
    /// Creates a pending to-do with the given description and no children.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: TodoStatus::Pending,
            urgency: 1,
            due: None,
            tags: Vec::new(),
            completed_count: 0,
            total_count: 0,
        }
    }

    /// Sets the completion status.
    pub fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the urgency level (1..=4 in the stock configuration).
    pub fn with_urgency(mut self, urgency: u8) -> Self {
        self.urgency = urgency;
        self
    }

    /// Sets the due date.
    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    /// Sets the tag list.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets child completion progress.
    pub fn with_progress(mut self, completed: usize, total: usize) -> Self {
        self.completed_count = completed;
        self.total_count = total;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }

    pub fn urgency(&self) -> u8 {
        self.urgency
    }

    pub fn due(&self) -> Option<NaiveDate> {
        self.due
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Completed children.
    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    /// Total children.
    pub fn total_count(&self) -> usize {
        self.total_count
    }
}

/// A workspace (a named group of to-dos) as seen by formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    description: String,
    child_count: usize,
}

impl Workspace {
    /// Creates a workspace with the given description and no children.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            child_count: 0,
        }
    }

    /// Sets the number of direct children.
    pub fn with_children(mut self, count: usize) -> Self {
        self.child_count = count;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }
}
