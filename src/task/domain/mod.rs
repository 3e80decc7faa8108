//! Domain model for task tracking.
//!
//! The task domain models individual task records, their priority and
//! completion lifecycle, and the insertion-ordered store that owns them,
//! while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod priority;
mod store;
mod task;

pub use error::ParsePriorityError;
pub use ids::TaskId;
pub use priority::Priority;
pub use store::TaskStore;
pub use task::{DEFAULT_CATEGORY, PersistedTaskData, Task, TaskDraft};
