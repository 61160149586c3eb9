//! Delimited-text export of an owner's tasks and sessions.

use chrono::NaiveDate;
use devfocus_shared::constants::EXPORT_FILE_PREFIX;
use devfocus_shared::OwnerId;

use crate::models::{Session, Task};
use crate::store::EntityStore;

pub const EXPORT_HEADERS: [&str; 8] = [
    "type",
    "title",
    "status",
    "due_date",
    "priority",
    "start_time",
    "duration",
    "created_at",
];

/// Suggested download name, e.g. `devfocus_export_2024-05-10.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}_{}.csv", date.format("%Y-%m-%d"))
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn task_row(task: &Task) -> [String; 8] {
    [
        "Task".to_string(),
        task.title.clone(),
        task.status.as_str().to_string(),
        task.due_date.to_rfc3339(),
        task.priority.as_str().to_string(),
        String::new(),
        String::new(),
        task.created_at.to_rfc3339(),
    ]
}

fn session_row(session: &Session) -> [String; 8] {
    [
        "Session".to_string(),
        session.title.clone(),
        String::new(),
        String::new(),
        String::new(),
        session.start_time.to_rfc3339(),
        session.duration_minutes.to_string(),
        session.created_at.to_rfc3339(),
    ]
}

impl EntityStore {
    /// Render the owner's tasks followed by their sessions as CSV.
    ///
    /// Every cell is quoted; columns that do not apply to a row are empty.
    pub fn export_csv(&self, owner: &OwnerId) -> String {
        let tasks = self.tasks.iter().filter(|t| &t.owner == owner).map(task_row);
        let sessions = self
            .sessions
            .iter()
            .filter(|s| &s.owner == owner)
            .map(session_row);

        let mut lines = vec![EXPORT_HEADERS.join(",")];
        lines.extend(
            tasks
                .chain(sessions)
                .map(|row| row.iter().map(|c| quote(c)).collect::<Vec<_>>().join(",")),
        );

        tracing::debug!(%owner, rows = lines.len() - 1, "exported csv");
        lines.join("\n")
    }
}
