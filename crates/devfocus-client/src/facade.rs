//! The single entry point for UI code.
//!
//! [`DataFacade`] wraps the [`EntityStore`] and the [`GamificationEngine`]
//! so that a completion is one synchronous step from the caller's point of
//! view: mutate, evaluate against the settled store, append the proposal,
//! then publish events. Operations grouped by collection live in
//! [`crate::commands`].

use std::sync::Arc;

use devfocus_rewards::{GamificationEngine, Proposal};
use devfocus_shared::{Clock, OwnerId, SystemClock};
use devfocus_store::EntityStore;
use tokio::sync::broadcast;

use crate::config::ClientConfig;
use crate::events::{EventBus, StoreEvent};

pub struct DataFacade {
    pub(crate) store: EntityStore,
    pub(crate) engine: GamificationEngine,
    pub(crate) events: EventBus,
}

impl DataFacade {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_clock(Arc::new(SystemClock), config.event_capacity)
    }

    pub fn with_clock(clock: Arc<dyn Clock>, event_capacity: usize) -> Self {
        Self {
            store: EntityStore::with_clock(clock),
            engine: GamificationEngine::new(),
            events: EventBus::new(event_capacity),
        }
    }

    /// Read access to every collection.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Receive every change published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Sum of the owner's ledger. Always recomputed.
    pub fn total_points(&self, owner: &OwnerId) -> i64 {
        self.store.total_points(owner)
    }

    /// Append an engine proposal to the store, points before milestones.
    pub(crate) fn apply(&mut self, proposal: Proposal) {
        if proposal.is_empty() {
            return;
        }

        let owner = proposal.points.first().map(|p| p.owner.clone());
        for entry in proposal.points {
            let entry = self.store.append_points(entry);
            self.events.emit(StoreEvent::PointsAwarded(entry));
        }

        for unlock in proposal.milestones {
            if let Some(milestone) = self.store.unlock_milestone(unlock) {
                self.events.emit(StoreEvent::MilestoneUnlocked(milestone));
            }
        }

        if let Some(owner) = owner {
            tracing::debug!(%owner, total = self.store.total_points(&owner), "rewards applied");
        }
    }
}

impl std::fmt::Debug for DataFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataFacade")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
