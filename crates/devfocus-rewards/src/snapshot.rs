use devfocus_store::{EntityStore, Milestone, PointEntry, Session, Task};

/// Read-only view of the collections rule evaluation looks at.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub tasks: &'a [Task],
    pub sessions: &'a [Session],
    pub points: &'a [PointEntry],
    pub milestones: &'a [Milestone],
}

impl<'a> From<&'a EntityStore> for Snapshot<'a> {
    fn from(store: &'a EntityStore) -> Self {
        Self {
            tasks: store.tasks(),
            sessions: store.sessions(),
            points: store.points(),
            milestones: store.milestones(),
        }
    }
}
