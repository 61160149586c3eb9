//! CRUD operations for [`Session`] records.

use chrono::{DateTime, Utc};
use devfocus_shared::error::require_text;
use devfocus_shared::{EntityKind, OwnerId, ValidationError};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{NewSession, Session};
use crate::store::EntityStore;

fn validate(title: &str, duration_minutes: u32) -> std::result::Result<(), ValidationError> {
    require_text("title", title)?;
    if duration_minutes == 0 {
        return Err(ValidationError::NonPositiveDuration);
    }
    Ok(())
}

impl EntityStore {
    pub fn create_session(&mut self, owner: &OwnerId, data: NewSession) -> Result<Session> {
        validate(&data.title, data.duration_minutes)?;

        let now = self.now();
        let session = Session {
            id: Uuid::new_v4(),
            title: data.title,
            start_time: data.start_time,
            duration_minutes: data.duration_minutes,
            meeting_url: data.meeting_url,
            calendar_event_id: data.calendar_event_id,
            owner: owner.clone(),
            created_at: now,
            updated_at: now,
        };
        self.sessions.push(session.clone());

        tracing::info!(
            session_id = %session.id,
            duration_minutes = session.duration_minutes,
            "session scheduled"
        );
        Ok(session)
    }

    pub fn get_session(&self, owner: &OwnerId, id: Uuid) -> Result<&Session> {
        self.sessions
            .iter()
            .find(|s| s.id == id && &s.owner == owner)
            .ok_or_else(|| StoreError::not_found(EntityKind::Session, id))
    }

    pub fn list_sessions(&self, owner: &OwnerId) -> Vec<Session> {
        self.sessions
            .iter()
            .filter(|s| &s.owner == owner)
            .cloned()
            .collect()
    }

    /// Sessions starting after `now`, earliest first.
    pub fn upcoming_sessions(
        &self,
        owner: &OwnerId,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Vec<Session> {
        let mut upcoming: Vec<Session> = self
            .sessions
            .iter()
            .filter(|s| &s.owner == owner && s.start_time > now)
            .cloned()
            .collect();
        upcoming.sort_by_key(|s| s.start_time);
        upcoming.truncate(limit);
        upcoming
    }

    pub fn update_session(&mut self, owner: &OwnerId, session: Session) -> Result<Session> {
        validate(&session.title, session.duration_minutes)?;

        let now = self.now();
        let slot = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session.id && &s.owner == owner)
            .ok_or_else(|| StoreError::not_found(EntityKind::Session, session.id))?;

        let updated = Session {
            owner: slot.owner.clone(),
            created_at: slot.created_at,
            updated_at: now,
            ..session
        };
        *slot = updated.clone();

        tracing::debug!(session_id = %updated.id, "session updated");
        Ok(updated)
    }

    /// Look up the session being completed.
    ///
    /// Sessions carry no completion state, so this never mutates; it only
    /// confirms the id before rewards are evaluated. Unlike tasks there is no
    /// gate against repeated completion.
    pub fn complete_session(&self, owner: &OwnerId, id: Uuid) -> Result<Session> {
        let session = self.get_session(owner, id)?.clone();
        tracing::info!(session_id = %id, %owner, "session completed");
        Ok(session)
    }

    pub fn delete_session(&mut self, owner: &OwnerId, id: Uuid) -> Option<Session> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.id == id && &s.owner == owner)?;
        let session = self.sessions.remove(index);
        tracing::info!(session_id = %id, "session deleted");
        Some(session)
    }
}
