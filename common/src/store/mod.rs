//! Client-side state: the Students and Courses mirrors plus the Enrollments
//! view derived from them.
//!
//! The store is created empty at start-up and only changes through
//! [`Store::replace_students`] and [`Store::replace_courses`]. Replacing the
//! students re-derives the enrollment rows in the same step, so the table can
//! never lag behind the mirror it is computed from.

mod mirror;

pub use mirror::Mirror;

use crate::model::course::Course;
use crate::model::enrollment::{EnrollmentRow, derive_rows};
use crate::model::student::Student;

/// An `<option>` for the enrollment form's selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct Store {
    students: Mirror<Student>,
    courses: Mirror<Course>,
    enrollments: Vec<EnrollmentRow>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        self.students.items()
    }

    pub fn courses(&self) -> &[Course] {
        self.courses.items()
    }

    pub fn enrollments(&self) -> &[EnrollmentRow] {
        &self.enrollments
    }

    pub fn students_mirror(&self) -> &Mirror<Student> {
        &self.students
    }

    pub fn courses_mirror(&self) -> &Mirror<Course> {
        &self.courses
    }

    pub fn replace_students(&mut self, students: Vec<Student>) {
        self.students.replace(students);
        self.enrollments = derive_rows(self.students.items());
    }

    pub fn replace_courses(&mut self, courses: Vec<Course>) {
        self.courses.replace(courses);
    }

    pub fn student_options(&self) -> Vec<SelectOption> {
        self.students()
            .iter()
            .map(|student| SelectOption {
                value: student.id.to_string(),
                label: student.full_name(),
            })
            .collect()
    }

    pub fn course_options(&self) -> Vec<SelectOption> {
        self.courses()
            .iter()
            .map(|course| SelectOption {
                value: course.id.to_string(),
                label: course.name.clone(),
            })
            .collect()
    }
}
