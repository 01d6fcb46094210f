use serde::{Deserialize, Serialize};

use crate::model::Id;
use crate::model::enrollment::EnrolledStudent;

/// Shown on course cards when the course has no description.
pub const NO_DESCRIPTION: &str = "No description";

/// A course as returned by `GET /courses/` and `GET /courses/{id}`.
///
/// `students` is only populated by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub credits: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<EnrolledStudent>>,
}

impl Course {
    /// The description to render, or [`NO_DESCRIPTION`] when it is missing or blank.
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => NO_DESCRIPTION,
        }
    }

    pub fn enrolled_students(&self) -> &[EnrolledStudent] {
        self.students.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(description: Option<&str>) -> Course {
        Course {
            id: 1,
            name: "Algorithms".to_string(),
            description: description.map(str::to_string),
            credits: 3,
            students: None,
        }
    }

    #[test]
    fn missing_or_blank_description_uses_placeholder() {
        assert_eq!(course(None).description_or_placeholder(), "No description");
        assert_eq!(course(Some("  ")).description_or_placeholder(), "No description");
        assert_eq!(course(Some("Graphs")).description_or_placeholder(), "Graphs");
    }

    #[test]
    fn list_payload_without_relations_deserializes() {
        let course: Course =
            serde_json::from_str(r#"{"id":4,"name":"Algorithms","description":null,"credits":3}"#)
                .unwrap();
        assert_eq!(course.description, None);
        assert!(course.enrolled_students().is_empty());
    }
}
