use rosterbook::ops::{
    add_attendance_to_list, edit_attendance_in_list, get_attendance_from_list, is_week_contained,
    remove_attendance_from_list,
};
use rosterbook::{
    Attendance, AttendanceError, AttendanceRecordList, CourseConfig, Student, Week,
};

fn course() -> CourseConfig {
    CourseConfig {
        total_weeks: 10,
        max_participation_score: 100,
    }
}

fn week(number: u32) -> Week {
    Week::new(number, &course()).expect("valid week")
}

fn score(value: u32) -> Attendance {
    Attendance::new(value, &course()).expect("valid score")
}

#[test]
fn add_then_get_round_trip() {
    let student = Student::new("Alex Yeoh");
    let list = AttendanceRecordList::new(&course());

    let list = add_attendance_to_list(&list, &student, week(3), score(75)).expect("add");
    assert_eq!(
        get_attendance_from_list(&list, &student, week(3)),
        Ok(score(75))
    );
}

#[test]
fn edit_after_add_returns_latest_score() {
    let student = Student::new("Bernice Yu");
    let list = AttendanceRecordList::new(&course());

    let list = add_attendance_to_list(&list, &student, week(5), score(40)).expect("add");
    let list = edit_attendance_in_list(&list, &student, week(5), score(90)).expect("edit");
    assert_eq!(
        get_attendance_from_list(&list, &student, week(5)),
        Ok(score(90))
    );
}

#[test]
fn second_add_for_same_student_and_week_is_rejected() {
    let student = Student::new("Charlotte O");
    let list = AttendanceRecordList::new(&course());

    let list = add_attendance_to_list(&list, &student, week(2), score(60)).expect("first add");
    let err = add_attendance_to_list(&list, &student, week(2), score(70))
        .expect_err("second add must fail");
    assert_eq!(
        err,
        AttendanceError::DuplicateAttendance {
            student: student.id()
        }
    );
    assert_eq!(err.code(), "duplicate_attendance");
    // The first score is still in place.
    assert_eq!(
        get_attendance_from_list(&list, &student, week(2)),
        Ok(score(60))
    );
}

#[test]
fn edit_remove_get_require_an_existing_entry() {
    let student = Student::new("David Li");
    let list = AttendanceRecordList::new(&course());
    let missing = AttendanceError::MissingAttendance {
        student: student.id(),
    };

    assert_eq!(
        edit_attendance_in_list(&list, &student, week(1), score(50)),
        Err(missing)
    );
    assert_eq!(
        remove_attendance_from_list(&list, &student, week(1)),
        Err(missing)
    );
    assert_eq!(
        get_attendance_from_list(&list, &student, week(1)),
        Err(missing)
    );
}

#[test]
fn add_then_remove_restores_the_original_list() {
    let student = Student::new("Irfan Ibrahim");
    let other = Student::new("Roy Balakrishnan");
    let base = AttendanceRecordList::new(&course());
    let base = add_attendance_to_list(&base, &other, week(4), score(33)).expect("seed other");

    let added = add_attendance_to_list(&base, &student, week(4), score(88)).expect("add");
    let removed = remove_attendance_from_list(&added, &student, week(4)).expect("remove");
    assert_eq!(removed, base);
}

#[test]
fn untouched_weeks_carry_over_unchanged() {
    let student = Student::new("Alex Yeoh");
    let before = AttendanceRecordList::new(&course());
    let after = add_attendance_to_list(&before, &student, week(7), score(12)).expect("add");

    for (index, (old, new)) in before.records().iter().zip(after.records()).enumerate() {
        if index == week(7).zero_based_index() {
            assert_ne!(old, new, "touched week must hold the new entry");
        } else {
            assert_eq!(old, new, "week {} must carry over unchanged", index + 1);
        }
    }
}

#[test]
fn week_from_a_longer_course_is_rejected() {
    let short_course = CourseConfig {
        total_weeks: 4,
        max_participation_score: 100,
    };
    let student = Student::new("Bernice Yu");
    let short_list = AttendanceRecordList::new(&short_course);

    // Week 8 is valid for the 10-week course but not for this 4-week list.
    let foreign_week = week(8);
    assert!(!is_week_contained(&short_list, foreign_week));

    let invalid = AttendanceError::InvalidWeek { week: 8 };
    assert_eq!(
        add_attendance_to_list(&short_list, &student, foreign_week, score(10)),
        Err(invalid)
    );
    assert_eq!(
        edit_attendance_in_list(&short_list, &student, foreign_week, score(10)),
        Err(invalid)
    );
    assert_eq!(
        remove_attendance_from_list(&short_list, &student, foreign_week),
        Err(invalid)
    );
    assert_eq!(
        get_attendance_from_list(&short_list, &student, foreign_week),
        Err(invalid)
    );
    assert_eq!(invalid.code(), "invalid_week");
}

#[test]
fn inputs_are_unchanged_after_success_and_failure() {
    let student = Student::new("Charlotte O");
    let original = AttendanceRecordList::new(&course());
    let snapshot = original.clone();

    // Success path: the new list is returned, the input is not touched.
    let _added = add_attendance_to_list(&original, &student, week(1), score(99)).expect("add");
    assert_eq!(original, snapshot);

    // Failure path: the error surfaces, the input is not touched.
    let _ = remove_attendance_from_list(&original, &student, week(1)).expect_err("nothing to remove");
    assert_eq!(original, snapshot);
}
