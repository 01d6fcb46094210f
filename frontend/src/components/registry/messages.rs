use common::error::ClientError;
use common::forms::{CourseField, EnrollmentField, StudentField};
use common::sync::{Action, Completion, Detail, DetailRequest};

use super::state::Tab;

/// Messages driving `RegistryComponent`.
///
/// Form input messages carry the raw control value; drafts only parse on submit.
pub enum Msg {
    SetTab(Tab),

    /// Request a remote operation; goes through confirmation and the in-flight guard.
    Dispatch(Action),
    /// A dispatched operation and its follow-up reloads have settled.
    Completed(Completion),

    OpenStudentForm,
    CloseStudentForm,
    StudentInput(StudentField, String),
    SubmitStudent,

    OpenCourseForm,
    CloseCourseForm,
    CourseInput(CourseField, String),
    SubmitCourse,

    OpenEnrollmentForm,
    CloseEnrollmentForm,
    EnrollmentInput(EnrollmentField, String),
    SubmitEnrollment,

    ViewDetail(DetailRequest),
    DetailLoaded(DetailRequest, Result<Detail, ClientError>),
    CloseDetail,

    // Editing the record shown in the detail sheet.
    OpenEdit,
    CancelEdit,
    StudentEditInput(StudentField, String),
    CourseEditInput(CourseField, String),
    SubmitEdit,
}
