use devfocus_rewards::Snapshot;
use devfocus_shared::OwnerId;
use devfocus_store::{NewSession, Result, Session};
use uuid::Uuid;

use crate::events::StoreEvent;
use crate::facade::DataFacade;

impl DataFacade {
    pub fn create_session(&mut self, owner: &OwnerId, data: NewSession) -> Result<Session> {
        let session = self.store.create_session(owner, data)?;
        self.events.emit(StoreEvent::SessionCreated(session.clone()));
        Ok(session)
    }

    pub fn update_session(&mut self, owner: &OwnerId, session: Session) -> Result<Session> {
        let session = self.store.update_session(owner, session)?;
        self.events.emit(StoreEvent::SessionUpdated(session.clone()));
        Ok(session)
    }

    pub fn delete_session(&mut self, owner: &OwnerId, id: Uuid) {
        if let Some(session) = self.store.delete_session(owner, id) {
            self.events.emit(StoreEvent::SessionDeleted {
                session_id: session.id,
            });
        }
    }

    /// Award session points and check cumulative study time.
    ///
    /// Sessions keep no completion state, so every call awards again. This
    /// differs from tasks on purpose and callers rely on it.
    pub fn complete_session(&mut self, owner: &OwnerId, id: Uuid) -> Result<()> {
        self.store.complete_session(owner, id)?;
        self.events.emit(StoreEvent::SessionCompleted {
            session_id: id,
            owner: owner.clone(),
        });

        let proposal = self
            .engine
            .on_session_completed(Snapshot::from(&self.store), id, owner);
        self.apply(proposal);
        Ok(())
    }

    pub fn list_sessions(&self, owner: &OwnerId) -> Vec<Session> {
        self.store.list_sessions(owner)
    }
}
