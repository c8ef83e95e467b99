use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One "what-if" scenario: `day` extra classes attended, `skip` missed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ProjectionRow {
    pub day: u32,
    pub skip: u32,
    pub attendance_pct: f64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error(
        "projection undefined: total_classes={total_classes} and max_extra_days={max_extra_days} leave no classes to divide by"
    )]
    UndefinedProjection {
        total_classes: u32,
        max_extra_days: u32,
    },
}

/// Computes the attendance percentage for every scenario from attending
/// zero to `max_extra_days` of the remaining classes.
///
/// Rows are ordered by increasing `day`. The divisor is the final class
/// count `total_classes + max_extra_days` for every row, so percentages
/// are non-decreasing. Inputs are not checked against
/// `attended_classes <= total_classes`; a caller that breaks it can get
/// percentages above 100.
///
/// Returns [`ProjectionError::UndefinedProjection`] when both
/// `total_classes` and `max_extra_days` are zero.
pub fn compute_projection(
    total_classes: u32,
    attended_classes: u32,
    max_extra_days: u32,
) -> Result<Vec<ProjectionRow>, ProjectionError> {
    let denominator = u64::from(total_classes) + u64::from(max_extra_days);
    if denominator == 0 {
        return Err(ProjectionError::UndefinedProjection {
            total_classes,
            max_extra_days,
        });
    }

    let rows = (0..=max_extra_days)
        .map(|day| {
            let numerator = u64::from(attended_classes) + u64::from(day);
            ProjectionRow {
                day,
                skip: max_extra_days - day,
                attendance_pct: numerator as f64 / denominator as f64 * 100.0,
            }
        })
        .collect();

    Ok(rows)
}
