//! Component state for the registry dashboard.

use common::config::ApiConfig;
use common::forms::{CourseDraft, EnrollmentDraft, Form, RecordEdit, StudentDraft};
use common::sync::{Action, Controller, Detail};

use crate::api::HttpApi;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Students,
    Courses,
    Enrollments,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Students, Tab::Courses, Tab::Enrollments];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Students => "Students",
            Tab::Courses => "Courses",
            Tab::Enrollments => "Enrollments",
        }
    }

    /// Reload issued whenever the tab is selected.
    pub fn load_action(self) -> Action {
        match self {
            Tab::Students => Action::LoadStudents,
            Tab::Courses => Action::LoadCourses,
            Tab::Enrollments => Action::LoadEnrollments,
        }
    }
}

/// Main state container for the `RegistryComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules
/// and by the per-tab view functions.
pub struct RegistryComponent {
    pub api: HttpApi,

    /// Mirrors, derived enrollment rows and the set of operations in flight.
    pub controller: Controller,

    pub active_tab: Tab,

    pub student_form: Form<StudentDraft>,
    pub course_form: Form<CourseDraft>,
    pub enrollment_form: Form<EnrollmentDraft>,

    /// Record shown in the detail sheet, fetched on demand with its relations.
    /// Never written back into the mirrors.
    pub detail: Option<Detail>,

    /// Edits of the record in the detail sheet, bound to that record's id.
    pub student_edit: RecordEdit<StudentDraft>,
    pub course_edit: RecordEdit<CourseDraft>,

    /// Guards the one-time initial load in `rendered`.
    pub loaded: bool,
}

impl RegistryComponent {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: HttpApi::new(config),
            controller: Controller::new(),
            active_tab: Tab::Students,
            student_form: Form::default(),
            course_form: Form::default(),
            enrollment_form: Form::default(),
            detail: None,
            student_edit: RecordEdit::default(),
            course_edit: RecordEdit::default(),
            loaded: false,
        }
    }

    /// Whether an identical operation is still awaiting its response.
    pub fn is_busy(&self, action: &Action) -> bool {
        self.controller.is_in_flight(&action.key())
    }
}
