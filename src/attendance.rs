use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::CourseConfig;
use crate::error::AttendanceError;
use crate::student::StudentId;

/// A validated 1-based lesson-week position within a course's duration.
///
/// Constructed transiently whenever a week must be validated or addressed;
/// a `Week` is only guaranteed in-range for the course it was validated
/// against, so list operations re-check containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week {
    number: u32,
}

impl Week {
    pub fn new(number: u32, config: &CourseConfig) -> Result<Self, AttendanceError> {
        if number < 1 || number > config.total_weeks {
            return Err(AttendanceError::WeekOutOfRange {
                value: number,
                max: config.total_weeks,
            });
        }
        Ok(Self { number })
    }

    /// 1-based week number as entered by the user.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Zero-based position for indexing into an `AttendanceRecordList`.
    pub fn zero_based_index(&self) -> usize {
        (self.number - 1) as usize
    }
}

/// A single participation score for one student in one week.
///
/// Serializes transparently as the bare score, which is the shape the
/// persistence adapter stores and must round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attendance {
    participation_score: u32,
}

impl Attendance {
    pub fn new(score: u32, config: &CourseConfig) -> Result<Self, AttendanceError> {
        if score > config.max_participation_score {
            return Err(AttendanceError::InvalidScore {
                score,
                max: config.max_participation_score,
            });
        }
        Ok(Self {
            participation_score: score,
        })
    }

    pub fn participation_score(&self) -> u32 {
        self.participation_score
    }
}

/// Participation scores for exactly one week, keyed by stable student
/// identity. At most one entry per student; produced fresh by every
/// mutating operation in [`crate::ops`], never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceRecord {
    scores: HashMap<StudentId, Attendance>,
}

impl AttendanceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub(crate) fn scores(&self) -> &HashMap<StudentId, Attendance> {
        &self.scores
    }

    pub(crate) fn from_scores(scores: HashMap<StudentId, Attendance>) -> Self {
        Self { scores }
    }
}

/// One `AttendanceRecord` per week of a course offering; position `i`
/// (zero-based) corresponds to week `i + 1`.
///
/// The length is fixed at construction and no length-changing API exists:
/// weeks are never added or removed independently of the owning course's
/// duration. The owning aggregate swaps whole lists; this type is only ever
/// transformed by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceRecordList {
    records: Vec<AttendanceRecord>,
}

impl AttendanceRecordList {
    /// An empty record for every week of `config`'s duration.
    pub fn new(config: &CourseConfig) -> Self {
        Self {
            records: vec![AttendanceRecord::new(); config.total_weeks as usize],
        }
    }

    /// Rebuilds a list from adapter-restored records. The given length
    /// becomes the list's fixed week count; the owning course is responsible
    /// for checking it agrees with the course duration.
    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    /// The record for `week`, or `None` if `week` lies outside this list.
    pub fn record_for(&self, week: Week) -> Option<&AttendanceRecord> {
        self.records.get(week.zero_based_index())
    }

    /// New list with only `week`'s position replaced. Callers must have
    /// checked containment first.
    pub(crate) fn with_record_replaced(&self, week: Week, record: AttendanceRecord) -> Self {
        let mut records = self.records.clone();
        records[week.zero_based_index()] = record;
        Self { records }
    }
}
