use crate::model::Id;

/// URL table of the remote API, rooted at a base address.
///
/// Paths, including their trailing slashes and the query-string form of the
/// student delete, are reproduced exactly as the server declares them.
#[derive(Debug, Clone, Copy)]
pub struct Routes<'a> {
    base: &'a str,
}

impl<'a> Routes<'a> {
    pub fn new(base: &'a str) -> Self {
        Self { base }
    }

    /// `GET` list, `POST` create.
    pub fn students(&self) -> String {
        format!("{}/students/", self.base)
    }

    /// `GET` detail, `PATCH` update.
    pub fn student(&self, id: Id) -> String {
        format!("{}/students/{}", self.base, id)
    }

    pub fn delete_student(&self, id: Id) -> String {
        format!("{}/students/deleteStudentById/?student_id={}", self.base, id)
    }

    /// `GET` list, `POST` create.
    pub fn courses(&self) -> String {
        format!("{}/courses/", self.base)
    }

    /// `GET` detail, `PATCH` update, `DELETE`.
    pub fn course(&self, id: Id) -> String {
        format!("{}/courses/{}", self.base, id)
    }

    /// `POST` create.
    pub fn enrollments(&self) -> String {
        format!("{}/enrollments/", self.base)
    }

    /// `DELETE`.
    pub fn enrollment(&self, student_id: Id, course_id: Id) -> String {
        format!("{}/enrollments/{}/{}", self.base, student_id, course_id)
    }
}
