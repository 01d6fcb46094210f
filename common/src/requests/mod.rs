use serde::{Deserialize, Serialize};

use crate::model::Id;

/// Body of `POST /students/` and `PATCH /students/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Body of `POST /courses/` and `PATCH /courses/{id}`.
///
/// An absent description is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub description: Option<String>,
    pub credits: i32,
}

/// Body of `POST /enrollments/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub student_id: Id,
    pub course_id: Id,
    /// `YYYY-MM-DD`.
    pub enrollment_date: String,
}

/// Error body returned by the API on non-2xx responses.
///
/// `detail` is a plain string for domain errors (`"Student is already
/// enrolled in this course."`) and a structured list for schema validation
/// failures; only the string form is kept.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(message)) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
