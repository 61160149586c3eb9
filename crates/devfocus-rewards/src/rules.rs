//! Threshold checks behind each milestone. All functions are owner-scoped
//! and read only what they are given.

use chrono::{DateTime, Duration, Utc};
use devfocus_shared::constants::{
    STUDY_FOCUS_MINUTES, TASK_STREAK_THRESHOLD, TASK_STREAK_WINDOW_DAYS,
};
use devfocus_shared::{MilestoneKind, OwnerId};
use devfocus_store::{Milestone, Session, Task};

/// Completed tasks whose last update falls inside the trailing window
/// ending at `now`.
pub fn completed_in_window(tasks: &[Task], owner: &OwnerId, now: DateTime<Utc>) -> usize {
    let window_start = now - Duration::days(TASK_STREAK_WINDOW_DAYS);
    tasks
        .iter()
        .filter(|t| &t.owner == owner && t.status.is_completed() && t.updated_at >= window_start)
        .count()
}

pub fn task_streak_reached(tasks: &[Task], owner: &OwnerId, now: DateTime<Utc>) -> bool {
    completed_in_window(tasks, owner, now) >= TASK_STREAK_THRESHOLD
}

/// Planned minutes across every session the owner has, past or future.
pub fn total_session_minutes(sessions: &[Session], owner: &OwnerId) -> u64 {
    sessions
        .iter()
        .filter(|s| &s.owner == owner)
        .map(|s| u64::from(s.duration_minutes))
        .sum()
}

pub fn study_focus_reached(sessions: &[Session], owner: &OwnerId) -> bool {
    total_session_minutes(sessions, owner) >= STUDY_FOCUS_MINUTES
}

pub fn holds_milestone(milestones: &[Milestone], owner: &OwnerId, kind: MilestoneKind) -> bool {
    milestones.iter().any(|m| &m.owner == owner && m.kind == kind)
}
