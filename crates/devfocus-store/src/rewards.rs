//! Append-only reward ledger: point entries and milestones.
//!
//! Nothing here is ever updated or removed. Milestones are additionally
//! unique per `(owner, kind)`; the first unlock wins and later ones are
//! dropped without error.

use devfocus_shared::{MilestoneKind, OwnerId};
use uuid::Uuid;

use crate::models::{Milestone, NewMilestone, NewPointEntry, PointEntry};
use crate::store::EntityStore;

impl EntityStore {
    pub fn append_points(&mut self, entry: NewPointEntry) -> PointEntry {
        let entry = PointEntry {
            id: Uuid::new_v4(),
            owner: entry.owner,
            amount: entry.amount,
            source: entry.source,
            source_id: entry.source_id,
            created_at: self.now(),
        };
        self.points.push(entry.clone());

        tracing::debug!(
            owner = %entry.owner,
            amount = entry.amount,
            source_id = %entry.source_id,
            "points awarded"
        );
        entry
    }

    /// Record a milestone unless the owner already holds one of that kind.
    pub fn unlock_milestone(&mut self, unlock: NewMilestone) -> Option<Milestone> {
        if self.has_milestone(&unlock.owner, unlock.kind) {
            tracing::debug!(owner = %unlock.owner, kind = %unlock.kind, "milestone already held");
            return None;
        }

        let now = self.now();
        let milestone = Milestone {
            id: Uuid::new_v4(),
            owner: unlock.owner,
            kind: unlock.kind,
            achieved_at: now,
            created_at: now,
        };
        self.milestones.push(milestone.clone());

        tracing::info!(owner = %milestone.owner, kind = %milestone.kind, "milestone unlocked");
        Some(milestone)
    }

    pub fn has_milestone(&self, owner: &OwnerId, kind: MilestoneKind) -> bool {
        self.milestones
            .iter()
            .any(|m| &m.owner == owner && m.kind == kind)
    }

    pub fn points_for(&self, owner: &OwnerId) -> Vec<PointEntry> {
        self.points
            .iter()
            .filter(|p| &p.owner == owner)
            .cloned()
            .collect()
    }

    pub fn milestones_for(&self, owner: &OwnerId) -> Vec<Milestone> {
        self.milestones
            .iter()
            .filter(|m| &m.owner == owner)
            .cloned()
            .collect()
    }

    /// Sum of the owner's ledger, recomputed on every call.
    pub fn total_points(&self, owner: &OwnerId) -> i64 {
        self.points
            .iter()
            .filter(|p| &p.owner == owner)
            .map(|p| p.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use devfocus_shared::PointSource;

    use crate::store::fixture;

    use super::*;

    fn award(owner: &str, amount: i64) -> NewPointEntry {
        NewPointEntry {
            owner: OwnerId::from(owner),
            amount,
            source: PointSource::Task,
            source_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn totals_are_owner_scoped() {
        let (mut store, _) = fixture::store();
        store.append_points(award("a", 5));
        store.append_points(award("a", 10));
        store.append_points(award("b", 5));

        assert_eq!(store.total_points(&OwnerId::from("a")), 15);
        assert_eq!(store.total_points(&OwnerId::from("b")), 5);
        assert_eq!(store.total_points(&OwnerId::from("c")), 0);
        assert_eq!(store.points_for(&OwnerId::from("a")).len(), 2);
    }

    #[test]
    fn first_milestone_unlock_wins() {
        let (mut store, _) = fixture::store();
        let owner = OwnerId::from("a");
        let unlock = NewMilestone {
            owner: owner.clone(),
            kind: MilestoneKind::TaskStreak,
        };

        let first = store.unlock_milestone(unlock.clone()).unwrap();
        assert_eq!(first.achieved_at, fixture::start());
        assert!(store.unlock_milestone(unlock).is_none());

        // other owners and other kinds are independent
        assert!(store
            .unlock_milestone(NewMilestone {
                owner: OwnerId::from("b"),
                kind: MilestoneKind::TaskStreak,
            })
            .is_some());
        assert!(store
            .unlock_milestone(NewMilestone {
                owner,
                kind: MilestoneKind::StudyFocus,
            })
            .is_some());
        assert_eq!(store.milestones().len(), 3);
    }
}
