use thiserror::Error;

use crate::student::StudentId;

/// Failure kinds for attendance operations.
///
/// Every kind is signaled at the point of precondition violation and
/// surfaced to the immediate caller; nothing is silently corrected or
/// substituted with a default. None of these are transient, so callers
/// should not retry with the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttendanceError {
    /// Week number outside the course's `[1, total_weeks]` range.
    #[error("week {value} is outside the course's week range 1..={max}")]
    WeekOutOfRange { value: u32, max: u32 },

    /// Participation score above the course's configured maximum.
    #[error("participation score {score} exceeds the maximum of {max}")]
    InvalidScore { score: u32, max: u32 },

    /// A week that does not address a position in the target record list.
    #[error("week {week} does not exist in this attendance record list")]
    InvalidWeek { week: u32 },

    /// An add where the student already has an entry for that week.
    #[error("attendance for student {student} is already recorded in this week")]
    DuplicateAttendance { student: StudentId },

    /// A set, remove, or get where the student has no entry for that week.
    #[error("no attendance found for student {student} in this week")]
    MissingAttendance { student: StudentId },

    /// An average-score query over a student with zero recorded weeks.
    #[error("student {student} has no attendance recorded in any week")]
    NoAttendanceRecorded { student: StudentId },
}

impl AttendanceError {
    /// Stable machine-readable code, for command layers that map error kinds
    /// to user-facing messages without matching on display text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WeekOutOfRange { .. } => "week_out_of_range",
            Self::InvalidScore { .. } => "invalid_score",
            Self::InvalidWeek { .. } => "invalid_week",
            Self::DuplicateAttendance { .. } => "duplicate_attendance",
            Self::MissingAttendance { .. } => "missing_attendance",
            Self::NoAttendanceRecorded { .. } => "no_attendance_recorded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable_and_distinct() {
        let student = StudentId::new();
        let errors = [
            AttendanceError::WeekOutOfRange { value: 0, max: 13 },
            AttendanceError::InvalidScore {
                score: 101,
                max: 100,
            },
            AttendanceError::InvalidWeek { week: 14 },
            AttendanceError::DuplicateAttendance { student },
            AttendanceError::MissingAttendance { student },
            AttendanceError::NoAttendanceRecorded { student },
        ];
        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
        assert_eq!(codes[0], "week_out_of_range");
    }

    #[test]
    fn messages_carry_offending_values() {
        let msg = AttendanceError::WeekOutOfRange { value: 15, max: 13 }.to_string();
        assert!(msg.contains("15"), "message should name the bad week: {msg}");
        assert!(msg.contains("13"), "message should name the bound: {msg}");
    }
}
