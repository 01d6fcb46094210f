//! Enrollment records as the client sees them.
//!
//! There is no enrollments list endpoint. The Enrollments table is derived
//! from the Students mirror: every student embeds the courses it is enrolled
//! in, each carrying the date of that enrollment. [`derive_rows`] flattens
//! that nesting into one row per (student, course) pair.

use serde::{Deserialize, Serialize};

use crate::model::Id;
use crate::model::student::Student;

/// Rendered in place of an enrollment date the server did not supply.
pub const DATE_NOT_AVAILABLE: &str = "N/A";

/// A course embedded in a student response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub credits: i32,
    #[serde(default)]
    pub enrollment_date: Option<String>,
}

/// A student embedded in a course detail response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledStudent {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub enrollment_date: Option<String>,
}

impl EnrolledStudent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One line of the Enrollments table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRow {
    pub student_id: Id,
    pub student_name: String,
    pub course_id: Id,
    pub course_name: String,
    /// Raw server value, or [`DATE_NOT_AVAILABLE`].
    pub enrollment_date: String,
}

impl EnrollmentRow {
    /// Calendar-date part of the enrollment date.
    ///
    /// The server stores a timestamp (`2024-01-15T00:00:00`); the table only
    /// shows the day.
    pub fn display_date(&self) -> &str {
        self.enrollment_date
            .split_once('T')
            .map_or(self.enrollment_date.as_str(), |(date, _)| date)
    }
}

/// Flattens each student's embedded courses into enrollment rows.
///
/// Order follows the students slice, then each student's course list, exactly
/// as the server returned them. Rows are neither deduplicated nor sorted, and
/// a student without embedded courses contributes nothing.
pub fn derive_rows(students: &[Student]) -> Vec<EnrollmentRow> {
    students
        .iter()
        .flat_map(|student| {
            let student_name = student.full_name();
            student
                .enrolled_courses()
                .iter()
                .map(move |course| EnrollmentRow {
                    student_id: student.id,
                    student_name: student_name.clone(),
                    course_id: course.id,
                    course_name: course.name.clone(),
                    enrollment_date: course
                        .enrollment_date
                        .clone()
                        .unwrap_or_else(|| DATE_NOT_AVAILABLE.to_string()),
                })
        })
        .collect()
}
