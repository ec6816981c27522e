use serde::{Deserialize, Serialize};

pub const DEFAULT_TOTAL_WEEKS: u32 = 13;
pub const DEFAULT_MAX_PARTICIPATION_SCORE: u32 = 100;

/// Validation bounds for one course offering.
///
/// Threaded explicitly into `Week` and `Attendance` construction so that
/// courses with different shapes can coexist, and so tests can exercise
/// boundary behavior without touching global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseConfig {
    /// Number of lesson weeks; valid week numbers are `1..=total_weeks`.
    pub total_weeks: u32,
    /// Highest recordable participation score; valid scores are
    /// `0..=max_participation_score`.
    pub max_participation_score: u32,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            total_weeks: DEFAULT_TOTAL_WEEKS,
            max_participation_score: DEFAULT_MAX_PARTICIPATION_SCORE,
        }
    }
}
