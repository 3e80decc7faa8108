//! Application services for task tracking orchestration.

mod tracker;

pub use tracker::TaskTrackerService;
