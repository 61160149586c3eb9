//! The in-memory entity store.
//!
//! [`EntityStore`] owns every collection and the clock used to stamp them.
//! Typed CRUD helpers for each collection live in sibling modules as
//! additional `impl EntityStore` blocks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use devfocus_shared::{Clock, ContentFilter, SystemClock};

use crate::models::{ChatMessage, Milestone, PointEntry, Project, Session, Task};

/// Authoritative holder of all collections.
///
/// Collections keep insertion order. Records leave a collection only through
/// an explicit delete or a project cascade.
pub struct EntityStore {
    pub(crate) projects: Vec<Project>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) sessions: Vec<Session>,
    pub(crate) points: Vec<PointEntry>,
    pub(crate) milestones: Vec<Milestone>,
    pub(crate) chat_messages: Vec<ChatMessage>,
    pub(crate) filter: ContentFilter,
    clock: Arc<dyn Clock>,
}

impl EntityStore {
    /// An empty store stamped with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            projects: Vec::new(),
            tasks: Vec::new(),
            sessions: Vec::new(),
            points: Vec::new(),
            milestones: Vec::new(),
            chat_messages: Vec::new(),
            filter: ContentFilter::default(),
            clock,
        }
    }

    /// Replace the chat content filter.
    pub fn with_filter(mut self, filter: ContentFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Current time according to the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn points(&self) -> &[PointEntry] {
        &self.points
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        &self.chat_messages
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("projects", &self.projects.len())
            .field("tasks", &self.tasks.len())
            .field("sessions", &self.sessions.len())
            .field("points", &self.points.len())
            .field("milestones", &self.milestones.len())
            .field("chat_messages", &self.chat_messages.len())
            .finish()
    }
}
