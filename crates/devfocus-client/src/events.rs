use devfocus_shared::OwnerId;
use devfocus_store::{ChatMessage, Milestone, PointEntry, Project, Session, Task};
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

pub const EVENT_PROJECT_CREATED: &str = "project-created";
pub const EVENT_PROJECT_UPDATED: &str = "project-updated";
pub const EVENT_PROJECT_DELETED: &str = "project-deleted";
pub const EVENT_TASK_CREATED: &str = "task-created";
pub const EVENT_TASK_UPDATED: &str = "task-updated";
pub const EVENT_TASK_DELETED: &str = "task-deleted";
pub const EVENT_TASK_COMPLETED: &str = "task-completed";
pub const EVENT_SESSION_CREATED: &str = "session-created";
pub const EVENT_SESSION_UPDATED: &str = "session-updated";
pub const EVENT_SESSION_DELETED: &str = "session-deleted";
pub const EVENT_SESSION_COMPLETED: &str = "session-completed";
pub const EVENT_POINTS_AWARDED: &str = "points-awarded";
pub const EVENT_MILESTONE_UNLOCKED: &str = "milestone-unlocked";
pub const EVENT_CHAT_MESSAGE_POSTED: &str = "chat-message-posted";

/// A settled change to the store, published after the mutation completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum StoreEvent {
    ProjectCreated(Project),
    ProjectUpdated(Project),
    ProjectDeleted {
        project_id: Uuid,
        removed_tasks: Vec<Uuid>,
    },
    TaskCreated(Task),
    TaskUpdated(Task),
    TaskDeleted {
        task_id: Uuid,
    },
    TaskCompleted(Task),
    SessionCreated(Session),
    SessionUpdated(Session),
    SessionDeleted {
        session_id: Uuid,
    },
    SessionCompleted {
        session_id: Uuid,
        owner: OwnerId,
    },
    PointsAwarded(PointEntry),
    MilestoneUnlocked(Milestone),
    ChatMessagePosted(ChatMessage),
}

impl StoreEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ProjectCreated(_) => EVENT_PROJECT_CREATED,
            Self::ProjectUpdated(_) => EVENT_PROJECT_UPDATED,
            Self::ProjectDeleted { .. } => EVENT_PROJECT_DELETED,
            Self::TaskCreated(_) => EVENT_TASK_CREATED,
            Self::TaskUpdated(_) => EVENT_TASK_UPDATED,
            Self::TaskDeleted { .. } => EVENT_TASK_DELETED,
            Self::TaskCompleted(_) => EVENT_TASK_COMPLETED,
            Self::SessionCreated(_) => EVENT_SESSION_CREATED,
            Self::SessionUpdated(_) => EVENT_SESSION_UPDATED,
            Self::SessionDeleted { .. } => EVENT_SESSION_DELETED,
            Self::SessionCompleted { .. } => EVENT_SESSION_COMPLETED,
            Self::PointsAwarded(_) => EVENT_POINTS_AWARDED,
            Self::MilestoneUnlocked(_) => EVENT_MILESTONE_UNLOCKED,
            Self::ChatMessagePosted(_) => EVENT_CHAT_MESSAGE_POSTED,
        }
    }
}

/// Fan-out of [`StoreEvent`]s to any number of subscribers.
///
/// Subscribers that fall more than the channel capacity behind observe
/// `RecvError::Lagged` and skip ahead.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: StoreEvent) {
        let name = event.name();
        match self.tx.send(event) {
            Ok(receivers) => tracing::trace!(event = name, receivers, "event emitted"),
            // nobody listening is fine
            Err(_) => tracing::trace!(event = name, "event dropped, no subscribers"),
        }
    }
}
