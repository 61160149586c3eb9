//! Derived reads for the dashboard and the export collaborator.

use devfocus_shared::constants::{
    DASHBOARD_RECENT_MESSAGES, DASHBOARD_UPCOMING_SESSIONS, DASHBOARD_UPCOMING_TASKS,
};
use devfocus_shared::OwnerId;
use devfocus_store::{export_file_name, ChatMessage, Milestone, Session, Task};
use serde::Serialize;

use crate::facade::DataFacade;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub owner: OwnerId,
    pub total_points: i64,
    pub milestones: Vec<Milestone>,
    pub upcoming_tasks: Vec<Task>,
    pub upcoming_sessions: Vec<Session>,
    /// Sessions whose planned window contains the current time.
    pub active_sessions: Vec<Session>,
    pub recent_messages: Vec<ChatMessage>,
}

impl DataFacade {
    pub fn dashboard(&self, owner: &OwnerId) -> DashboardSummary {
        let now = self.store.now();
        let active_sessions = self
            .store
            .sessions()
            .iter()
            .filter(|s| &s.owner == owner && s.is_in_progress(now))
            .cloned()
            .collect();

        DashboardSummary {
            owner: owner.clone(),
            total_points: self.store.total_points(owner),
            milestones: self.store.milestones_for(owner),
            upcoming_tasks: self
                .store
                .upcoming_tasks(owner, now, DASHBOARD_UPCOMING_TASKS),
            upcoming_sessions: self
                .store
                .upcoming_sessions(owner, now, DASHBOARD_UPCOMING_SESSIONS),
            active_sessions,
            recent_messages: self.store.recent_chat_messages(DASHBOARD_RECENT_MESSAGES),
        }
    }

    /// CSV of the owner's tasks and sessions.
    pub fn export_csv(&self, owner: &OwnerId) -> String {
        self.store.export_csv(owner)
    }

    /// File name for an export taken today.
    pub fn export_file_name(&self) -> String {
        export_file_name(self.store.now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use devfocus_shared::ManualClock;
    use devfocus_store::NewSession;

    use super::*;

    #[test]
    fn summary_splits_active_and_upcoming_sessions() {
        let start = Utc.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let mut facade = DataFacade::with_clock(clock.clone(), 8);
        let owner = OwnerId::from("dev");

        let session = |title: &str, offset: Duration| NewSession {
            title: title.to_string(),
            start_time: start + offset,
            duration_minutes: 60,
            meeting_url: None,
            calendar_event_id: None,
        };
        let running = facade
            .create_session(&owner, session("running", Duration::minutes(-30)))
            .unwrap();
        let next = facade
            .create_session(&owner, session("next", Duration::hours(2)))
            .unwrap();

        let summary = facade.dashboard(&owner);
        assert_eq!(summary.active_sessions, vec![running]);
        assert_eq!(summary.upcoming_sessions, vec![next]);
        assert_eq!(summary.total_points, 0);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("totalPoints").is_some());
        assert!(json.get("upcomingSessions").is_some());
    }

    #[test]
    fn export_name_uses_clock_date() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 2, 23, 59, 0).unwrap(),
        ));
        let facade = DataFacade::with_clock(clock, 8);
        assert_eq!(facade.export_file_name(), "devfocus_export_2024-01-02.csv");
    }
}
