//! # devfocus-store
//!
//! In-memory entity store for DevFocus.
//!
//! [`EntityStore`] holds projects, tasks, sessions, the points ledger,
//! milestones and the chat feed for any number of owners. Every operation
//! takes the owner explicitly and runs to completion synchronously; records
//! are replaced, never edited in place.

pub mod chat;
pub mod export;
pub mod models;
pub mod projects;
pub mod rewards;
pub mod sessions;
pub mod store;
pub mod tasks;

mod error;

pub use error::{Result, StoreError};
pub use export::export_file_name;
pub use models::*;
pub use projects::ProjectRemoval;
pub use store::EntityStore;
pub use tasks::TaskCompletion;
