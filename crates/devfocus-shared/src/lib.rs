//! # devfocus-shared
//!
//! Vocabulary shared by every DevFocus crate: owner ids, entity enums,
//! design constants, validation errors, the chat content filter and the
//! clock abstraction.

pub mod clock;
pub mod constants;
pub mod error;
pub mod filter;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ValidationError;
pub use filter::ContentFilter;
pub use types::{EntityKind, MilestoneKind, OwnerId, PointSource, Priority, TaskStatus};
