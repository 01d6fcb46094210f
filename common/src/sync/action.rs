use crate::error::ClientError;
use crate::model::Id;
use crate::requests::{NewCourse, NewEnrollment, NewStudent};
use crate::sync::notice::Notice;

/// A presented view that can go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Students,
    Courses,
    Enrollments,
}

/// A remote collection that can be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Students,
    Courses,
}

impl Collection {
    /// Fixed fetch order: students before courses.
    pub const ALL: [Collection; 2] = [Collection::Students, Collection::Courses];

    pub fn failure_notice(self, err: &ClientError) -> Notice {
        match self {
            Collection::Students => {
                Notice::failure("Error loading students", "Failed to load students", err, false)
            }
            Collection::Courses => {
                Notice::failure("Error loading courses", "Failed to load courses", err, false)
            }
        }
    }
}

impl View {
    /// Collections whose contents this view is built from. Enrollments are
    /// derived from the students' embedded courses; the course list feeds the
    /// enrollment form's select.
    pub fn sources(self) -> &'static [Collection] {
        match self {
            View::Students => &[Collection::Students],
            View::Courses => &[Collection::Courses],
            View::Enrollments => &[Collection::Students, Collection::Courses],
        }
    }
}

/// Collections to fetch so every view in `views` is rebuilt, each at most
/// once, in [`Collection::ALL`] order.
pub fn fetch_plan(views: &[View]) -> Vec<Collection> {
    Collection::ALL
        .into_iter()
        .filter(|collection| views.iter().any(|view| view.sources().contains(collection)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    LoadAll,
    LoadStudents,
    LoadCourses,
    LoadEnrollments,
    CreateStudent,
    UpdateStudent,
    DeleteStudent,
    CreateCourse,
    UpdateCourse,
    DeleteCourse,
    CreateEnrollment,
    DeleteEnrollment,
}

impl ActionKind {
    /// Views made stale by a successful action of this kind.
    pub fn invalidates(self) -> &'static [View] {
        match self {
            Self::LoadStudents => &[View::Students],
            Self::LoadCourses => &[View::Courses],
            Self::LoadEnrollments => &[View::Enrollments],
            Self::LoadAll => &[View::Students, View::Courses, View::Enrollments],
            Self::CreateStudent | Self::UpdateStudent | Self::DeleteStudent => {
                &[View::Students, View::Enrollments]
            }
            Self::CreateCourse | Self::UpdateCourse | Self::DeleteCourse => {
                &[View::Courses, View::Enrollments]
            }
            Self::CreateEnrollment | Self::DeleteEnrollment => &[View::Enrollments],
        }
    }

    pub fn fetch_plan(self) -> Vec<Collection> {
        fetch_plan(self.invalidates())
    }

    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Self::LoadAll | Self::LoadStudents | Self::LoadCourses | Self::LoadEnrollments => None,
            Self::CreateStudent => Some("Student created successfully!"),
            Self::UpdateStudent => Some("Student updated successfully!"),
            Self::DeleteStudent => Some("Student deleted successfully!"),
            Self::CreateCourse => Some("Course created successfully!"),
            Self::UpdateCourse => Some("Course updated successfully!"),
            Self::DeleteCourse => Some("Course deleted successfully!"),
            Self::CreateEnrollment => Some("Enrollment created successfully!"),
            Self::DeleteEnrollment => Some("Enrollment deleted successfully!"),
        }
    }

    /// `(prefix, fallback)` used to word a failed request.
    pub fn failure_text(self) -> (&'static str, &'static str) {
        match self {
            Self::LoadAll | Self::LoadStudents | Self::LoadCourses | Self::LoadEnrollments => {
                ("Error loading data", "Failed to load data")
            }
            Self::CreateStudent => ("Error creating student", "Failed to create student"),
            Self::UpdateStudent => ("Error updating student", "Failed to update student"),
            Self::DeleteStudent => ("Error deleting student", "Failed to delete student"),
            Self::CreateCourse => ("Error creating course", "Failed to create course"),
            Self::UpdateCourse => ("Error updating course", "Failed to update course"),
            Self::DeleteCourse => ("Error deleting course", "Failed to delete course"),
            Self::CreateEnrollment => ("Error creating enrollment", "Failed to create enrollment"),
            Self::DeleteEnrollment => ("Error deleting enrollment", "Failed to delete enrollment"),
        }
    }

    /// Only the enrollment endpoint returns messages meant for users.
    pub fn surfaces_detail(self) -> bool {
        self == Self::CreateEnrollment
    }

    pub fn failure_notice(self, err: &ClientError) -> Notice {
        let (prefix, fallback) = self.failure_text();
        Notice::failure(prefix, fallback, err, self.surfaces_detail())
    }
}

/// What an in-flight action is about, for duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Loads and creates: one per kind at a time.
    Unscoped,
    Record(Id),
    Link { student_id: Id, course_id: Id },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionKey {
    pub kind: ActionKind,
    pub target: Target,
}

impl ActionKey {
    pub fn record_id(&self) -> Option<Id> {
        match self.target {
            Target::Record(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadAll,
    LoadStudents,
    LoadCourses,
    LoadEnrollments,
    CreateStudent(NewStudent),
    UpdateStudent(Id, NewStudent),
    DeleteStudent(Id),
    CreateCourse(NewCourse),
    UpdateCourse(Id, NewCourse),
    DeleteCourse(Id),
    CreateEnrollment(NewEnrollment),
    DeleteEnrollment { student_id: Id, course_id: Id },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::LoadAll => ActionKind::LoadAll,
            Action::LoadStudents => ActionKind::LoadStudents,
            Action::LoadCourses => ActionKind::LoadCourses,
            Action::LoadEnrollments => ActionKind::LoadEnrollments,
            Action::CreateStudent(_) => ActionKind::CreateStudent,
            Action::UpdateStudent(..) => ActionKind::UpdateStudent,
            Action::DeleteStudent(_) => ActionKind::DeleteStudent,
            Action::CreateCourse(_) => ActionKind::CreateCourse,
            Action::UpdateCourse(..) => ActionKind::UpdateCourse,
            Action::DeleteCourse(_) => ActionKind::DeleteCourse,
            Action::CreateEnrollment(_) => ActionKind::CreateEnrollment,
            Action::DeleteEnrollment { .. } => ActionKind::DeleteEnrollment,
        }
    }

    pub fn key(&self) -> ActionKey {
        let target = match self {
            Action::UpdateStudent(id, _)
            | Action::DeleteStudent(id)
            | Action::UpdateCourse(id, _)
            | Action::DeleteCourse(id) => Target::Record(*id),
            Action::DeleteEnrollment {
                student_id,
                course_id,
            } => Target::Link {
                student_id: *student_id,
                course_id: *course_id,
            },
            _ => Target::Unscoped,
        };
        ActionKey {
            kind: self.kind(),
            target,
        }
    }

    /// Prompt that must be accepted before a destructive action is sent.
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            Action::DeleteStudent(_) => Some("Are you sure you want to delete this student?"),
            Action::DeleteCourse(_) => Some("Are you sure you want to delete this course?"),
            Action::DeleteEnrollment { .. } => {
                Some("Are you sure you want to unenroll this student?")
            }
            _ => None,
        }
    }
}
