//! Reward evaluation for completion events.
//!
//! The engine never touches the store. It reads a [`Snapshot`] taken after
//! the triggering mutation and returns a [`Proposal`] the caller appends.
//! Each call is independent of earlier ones: everything it knows comes from
//! the snapshot it is handed.

use chrono::{DateTime, Utc};
use devfocus_shared::constants::{SESSION_COMPLETION_POINTS, TASK_COMPLETION_POINTS};
use devfocus_shared::{MilestoneKind, OwnerId, PointSource};
use devfocus_store::{NewMilestone, NewPointEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rules;
use crate::snapshot::Snapshot;

/// Ledger rows proposed by one evaluation, in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub points: Vec<NewPointEntry>,
    pub milestones: Vec<NewMilestone>,
}

impl Proposal {
    fn award(entry: NewPointEntry) -> Self {
        Self {
            points: vec![entry],
            milestones: Vec::new(),
        }
    }

    fn unlock_unless_held(&mut self, snapshot: Snapshot<'_>, owner: &OwnerId, kind: MilestoneKind) {
        if rules::holds_milestone(snapshot.milestones, owner, kind) {
            tracing::debug!(%owner, %kind, "milestone threshold met but already held");
            return;
        }
        self.milestones.push(NewMilestone {
            owner: owner.clone(),
            kind,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.milestones.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GamificationEngine;

impl GamificationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Award task points, then check the trailing-week task streak.
    ///
    /// Assumes one call per genuine completion; the store is responsible for
    /// not reporting a task that was already completed.
    pub fn on_task_completed(
        &self,
        snapshot: Snapshot<'_>,
        task_id: Uuid,
        owner: &OwnerId,
        now: DateTime<Utc>,
    ) -> Proposal {
        let mut proposal = Proposal::award(NewPointEntry {
            owner: owner.clone(),
            amount: TASK_COMPLETION_POINTS,
            source: PointSource::Task,
            source_id: task_id,
        });

        if rules::task_streak_reached(snapshot.tasks, owner, now) {
            proposal.unlock_unless_held(snapshot, owner, MilestoneKind::TaskStreak);
        }
        proposal
    }

    /// Award session points, then check cumulative study time.
    ///
    /// Sessions have no completion state, so repeated calls keep awarding.
    pub fn on_session_completed(
        &self,
        snapshot: Snapshot<'_>,
        session_id: Uuid,
        owner: &OwnerId,
    ) -> Proposal {
        let mut proposal = Proposal::award(NewPointEntry {
            owner: owner.clone(),
            amount: SESSION_COMPLETION_POINTS,
            source: PointSource::Session,
            source_id: session_id,
        });

        if rules::study_focus_reached(snapshot.sessions, owner) {
            proposal.unlock_unless_held(snapshot, owner, MilestoneKind::StudyFocus);
        }
        proposal
    }
}
