//! Pure transformations over attendance records and record lists.
//!
//! Every function borrows its inputs and returns a fresh value. Nothing is
//! mutated in place, so when a call fails the caller's existing data is
//! untouched and still valid. Add, set, and remove are distinct operations
//! with checkable preconditions: add never overwrites, set never inserts.

use tracing::debug;

use crate::attendance::{Attendance, AttendanceRecord, AttendanceRecordList, Week};
use crate::error::AttendanceError;
use crate::student::{Student, StudentId};

/// New record with an entry inserted for `student_id`.
///
/// Insert-only: fails with `DuplicateAttendance` if the student already has
/// an entry in this record.
pub fn add_attendance(
    record: &AttendanceRecord,
    student_id: StudentId,
    attendance: Attendance,
) -> Result<AttendanceRecord, AttendanceError> {
    if has_attendance(record, student_id) {
        return Err(AttendanceError::DuplicateAttendance {
            student: student_id,
        });
    }
    let mut scores = record.scores().clone();
    scores.insert(student_id, attendance);
    Ok(AttendanceRecord::from_scores(scores))
}

/// New record with the existing entry for `student_id` replaced.
///
/// Overwrite-only: fails with `MissingAttendance` if no prior entry exists.
pub fn set_attendance(
    record: &AttendanceRecord,
    student_id: StudentId,
    attendance: Attendance,
) -> Result<AttendanceRecord, AttendanceError> {
    if !has_attendance(record, student_id) {
        return Err(AttendanceError::MissingAttendance {
            student: student_id,
        });
    }
    let mut scores = record.scores().clone();
    scores.insert(student_id, attendance);
    Ok(AttendanceRecord::from_scores(scores))
}

/// New record with the entry for `student_id` deleted; fails with
/// `MissingAttendance` if absent.
pub fn remove_attendance(
    record: &AttendanceRecord,
    student_id: StudentId,
) -> Result<AttendanceRecord, AttendanceError> {
    let mut scores = record.scores().clone();
    if scores.remove(&student_id).is_none() {
        return Err(AttendanceError::MissingAttendance {
            student: student_id,
        });
    }
    Ok(AttendanceRecord::from_scores(scores))
}

pub fn has_attendance(record: &AttendanceRecord, student_id: StudentId) -> bool {
    record.scores().contains_key(&student_id)
}

/// The entry for `student_id`, or `MissingAttendance` if absent.
pub fn get_attendance(
    record: &AttendanceRecord,
    student_id: StudentId,
) -> Result<Attendance, AttendanceError> {
    record
        .scores()
        .get(&student_id)
        .copied()
        .ok_or(AttendanceError::MissingAttendance {
            student: student_id,
        })
}

/// True iff `week` addresses a position inside `list`.
///
/// A `Week` is validated against the course it was constructed for, so a
/// week from a longer course can still fall outside this list. List
/// operations re-check containment for that reason.
pub fn is_week_contained(list: &AttendanceRecordList, week: Week) -> bool {
    week.zero_based_index() < list.len()
}

/// New list with `attendance` added for `student` in `week`; all other
/// positions carry over unchanged.
///
/// Fails with `InvalidWeek` if the week is not contained in `list`, or
/// `DuplicateAttendance` if the student already has an entry that week.
pub fn add_attendance_to_list(
    list: &AttendanceRecordList,
    student: &Student,
    week: Week,
    attendance: Attendance,
) -> Result<AttendanceRecordList, AttendanceError> {
    debug!(
        student = %student.id(),
        week = week.number(),
        score = attendance.participation_score(),
        "recording attendance"
    );
    let record = record_for_week(list, week)?;
    let edited = add_attendance(record, student.id(), attendance)?;
    Ok(list.with_record_replaced(week, edited))
}

/// New list with `student`'s existing entry in `week` replaced by
/// `attendance`.
///
/// Fails with `InvalidWeek` if the week is not contained in `list`, or
/// `MissingAttendance` if no entry exists to replace.
pub fn edit_attendance_in_list(
    list: &AttendanceRecordList,
    student: &Student,
    week: Week,
    attendance: Attendance,
) -> Result<AttendanceRecordList, AttendanceError> {
    debug!(
        student = %student.id(),
        week = week.number(),
        score = attendance.participation_score(),
        "editing attendance"
    );
    let record = record_for_week(list, week)?;
    let edited = set_attendance(record, student.id(), attendance)?;
    Ok(list.with_record_replaced(week, edited))
}

/// New list with `student`'s entry in `week` removed.
///
/// Fails with `InvalidWeek` if the week is not contained in `list`, or
/// `MissingAttendance` if there is no entry to remove.
pub fn remove_attendance_from_list(
    list: &AttendanceRecordList,
    student: &Student,
    week: Week,
) -> Result<AttendanceRecordList, AttendanceError> {
    debug!(student = %student.id(), week = week.number(), "removing attendance");
    let record = record_for_week(list, week)?;
    let edited = remove_attendance(record, student.id())?;
    Ok(list.with_record_replaced(week, edited))
}

/// The attendance for `student` in `week`.
///
/// Fails with `InvalidWeek` if the week is not contained in `list`, or
/// `MissingAttendance` if the student has no entry that week.
pub fn get_attendance_from_list(
    list: &AttendanceRecordList,
    student: &Student,
    week: Week,
) -> Result<Attendance, AttendanceError> {
    let record = record_for_week(list, week)?;
    get_attendance(record, student.id())
}

/// Average participation score for `student` over the weeks where an entry
/// exists, as a truncating integer division to match the scoring
/// granularity used elsewhere.
///
/// Fails with `NoAttendanceRecorded` if the student has no entry in any
/// week: an average over zero data points is undefined and must be
/// surfaced, not reported as zero.
pub fn get_average_score(
    list: &AttendanceRecordList,
    student: &Student,
) -> Result<u32, AttendanceError> {
    let mut total_score: u64 = 0;
    let mut weeks_present: u64 = 0;

    for attendance in student_attendances(list, student).into_iter().flatten() {
        total_score += u64::from(attendance.participation_score());
        weeks_present += 1;
    }

    if weeks_present == 0 {
        return Err(AttendanceError::NoAttendanceRecorded {
            student: student.id(),
        });
    }

    Ok((total_score / weeks_present) as u32)
}

/// Ordered 1-based week numbers in which `student` has no entry.
///
/// Never fails; an empty result means perfect attendance. This query
/// deliberately has no error path, unlike [`get_average_score`].
pub fn get_absent_weeks(list: &AttendanceRecordList, student: &Student) -> Vec<u32> {
    student_attendances(list, student)
        .iter()
        .enumerate()
        .filter(|(_, attendance)| attendance.is_none())
        .map(|(index, _)| index as u32 + 1)
        .collect()
}

fn record_for_week<'a>(
    list: &'a AttendanceRecordList,
    week: Week,
) -> Result<&'a AttendanceRecord, AttendanceError> {
    list.record_for(week).ok_or(AttendanceError::InvalidWeek {
        week: week.number(),
    })
}

/// One slot per week, in week order: the student's attendance where
/// recorded, `None` where absent.
fn student_attendances(list: &AttendanceRecordList, student: &Student) -> Vec<Option<Attendance>> {
    let student_id = student.id();
    list.records()
        .iter()
        .map(|record| record.scores().get(&student_id).copied())
        .collect()
}
