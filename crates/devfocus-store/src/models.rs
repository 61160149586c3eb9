//! Domain model structs held by the in-memory store.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer. Stored records are value snapshots: a mutation
//! replaces the record in its collection, it never edits one in place.

use chrono::{DateTime, Utc};
use devfocus_shared::{MilestoneKind, OwnerId, PointSource, Priority, TaskStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A named body of work that owns zero or more tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub owner: OwnerId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// A unit of work inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    /// The project this task belongs to. Removed with it.
    pub project_id: Uuid,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub owner: OwnerId,
    /// Optional link to an issue tracker entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_issue_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub project_id: Uuid,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default)]
    pub github_issue_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A scheduled focus session.
///
/// There is no completion flag: completing a session only feeds the reward
/// ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub title: String,
    pub start_time: DateTime<Utc>,
    /// Planned length in minutes, always at least 1.
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_event_id: Option<String>,
    pub owner: OwnerId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Whether `now` falls between the start and the planned end.
    pub fn is_in_progress(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now && now <= self.end_time()
    }
}

/// Caller-supplied fields for a new session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewSession {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub calendar_event_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Reward ledger
// ---------------------------------------------------------------------------

/// One row of the append-only points ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointEntry {
    pub id: Uuid,
    pub owner: OwnerId,
    pub amount: i64,
    pub source: PointSource,
    pub source_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A proposed ledger row; the store assigns id and timestamp on append.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPointEntry {
    pub owner: OwnerId,
    pub amount: i64,
    pub source: PointSource,
    pub source_id: Uuid,
}

/// A one-time achievement. At most one per `(owner, kind)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub id: Uuid,
    pub owner: OwnerId,
    #[serde(rename = "type")]
    pub kind: MilestoneKind,
    pub achieved_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A proposed milestone unlock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMilestone {
    pub owner: OwnerId,
    #[serde(rename = "type")]
    pub kind: MilestoneKind,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// A message in the shared chat feed. Content is stored already filtered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub owner: OwnerId,
    /// Name shown next to the message (the author's email in the UI).
    pub owner_display: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn session_progress_window_is_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let session = Session {
            id: Uuid::new_v4(),
            title: "Deep work".into(),
            start_time: start,
            duration_minutes: 90,
            meeting_url: None,
            calendar_event_id: None,
            owner: OwnerId::from("dev"),
            created_at: start,
            updated_at: start,
        };

        assert!(session.is_in_progress(start));
        assert!(session.is_in_progress(start + Duration::minutes(90)));
        assert!(!session.is_in_progress(start + Duration::minutes(91)));
        assert!(!session.is_in_progress(start - Duration::seconds(1)));
    }

    #[test]
    fn milestone_kind_serializes_as_type() {
        let unlock = NewMilestone {
            owner: OwnerId::from("dev"),
            kind: MilestoneKind::TaskStreak,
        };
        let json = serde_json::to_value(&unlock).unwrap();
        assert_eq!(json["type"], "task_streak");
    }
}
