//! Facade operations, one module per collection.
//!
//! Each module adds an `impl DataFacade` block. Mutations publish a
//! [`StoreEvent`](crate::events::StoreEvent) once the store has settled;
//! forgiving no-ops publish nothing.

pub mod chat;
pub mod dashboard;
pub mod projects;
pub mod sessions;
pub mod tasks;
