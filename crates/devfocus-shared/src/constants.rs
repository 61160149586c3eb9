/// Application name
pub const APP_NAME: &str = "DevFocus";

/// Points awarded for completing a task
pub const TASK_COMPLETION_POINTS: i64 = 5;

/// Points awarded for completing a session
pub const SESSION_COMPLETION_POINTS: i64 = 10;

/// Completed tasks needed inside the streak window for `task_streak`
pub const TASK_STREAK_THRESHOLD: usize = 5;

/// Length of the trailing streak window in days
pub const TASK_STREAK_WINDOW_DAYS: i64 = 7;

/// Cumulative session minutes needed for `study_focus` (10 hours)
pub const STUDY_FOCUS_MINUTES: u64 = 10 * 60;

/// Maximum chat message length in characters, measured after filtering
pub const MAX_CHAT_MESSAGE_CHARS: usize = 500;

/// Words masked out of chat messages (whole-word, case-insensitive)
pub const CHAT_DENYLIST: &[&str] = &["hate", "stupid", "idiot"];

/// Replacement for a masked word
pub const CHAT_MASK: &str = "***";

/// Dashboard list sizes
pub const DASHBOARD_UPCOMING_TASKS: usize = 5;
pub const DASHBOARD_UPCOMING_SESSIONS: usize = 3;
pub const DASHBOARD_RECENT_MESSAGES: usize = 3;

/// File name prefix for CSV exports
pub const EXPORT_FILE_PREFIX: &str = "devfocus_export";
