//! Average duration across completed projects.

use crate::domain::project::Project;

/// Mean actual duration in days over completed projects.
///
/// Only projects with status COMPLETED and both dates on record are
/// eligible; everything else is excluded from the mean, not counted as
/// zero. An empty eligible set yields None - "no data", never 0 or NaN.
pub fn average_project_duration(projects: &[Project]) -> Option<f64> {
    let durations: Vec<i64> = projects
        .iter()
        .filter_map(Project::completed_duration_days)
        .collect();
    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<i64>() as f64 / durations.len() as f64)
}
