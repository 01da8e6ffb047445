//! Timeline module - Projected dates from the lifecycle table.

mod duration;
mod estimator;

pub use duration::average_project_duration;
pub use estimator::{estimated_date_for_stage, ProjectSchedule, ScheduleStep};
