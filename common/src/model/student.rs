use serde::{Deserialize, Serialize};

use crate::model::Id;
use crate::model::enrollment::EnrolledCourse;

/// A student as returned by `GET /students/` and `GET /students/{id}`.
///
/// The list endpoint and the detail endpoint both embed the student's
/// enrolled courses; a response without the `courses` key (or with `null`)
/// deserializes to `None`, which the enrollment derivation treats as "no
/// enrollments known".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<EnrolledCourse>>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Embedded courses, empty when the response carried no relation.
    pub fn enrolled_courses(&self) -> &[EnrolledCourse] {
        self.courses.as_deref().unwrap_or(&[])
    }
}
