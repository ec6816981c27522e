//! Attendance tracking core for a roster-management tool.
//!
//! Associates, for every week of a course offering, a per-student
//! participation score, and provides precondition-checked operations to add,
//! edit, remove, query, and aggregate those scores. Everything here is a pure
//! transformation over immutable values: operations borrow the caller's data
//! and return a fresh value, so the owning course aggregate can atomically
//! swap in the result and a failed call never leaves partial state behind.

pub mod attendance;
pub mod config;
pub mod error;
pub mod ops;
pub mod student;

pub use attendance::{Attendance, AttendanceRecord, AttendanceRecordList, Week};
pub use config::CourseConfig;
pub use error::AttendanceError;
pub use student::{Student, StudentId};
