//! User-level flows: form in, rendered data out.

mod support;

use common::forms::{
    CourseDraft, CourseField, EnrollmentDraft, EnrollmentField, Form, FormPhase, RecordEdit,
    StudentDraft, StudentField,
};
use common::model::course::NO_DESCRIPTION;
use common::sync::{
    Action, Controller, Detail, DetailRequest, Dispatch, NoticeLevel, execute, fetch_detail,
};
use support::{FakeApi, drive};

fn student_form(first: &str, last: &str, email: &str) -> Form<StudentDraft> {
    let mut form: Form<StudentDraft> = Form::default();
    form.open();
    if let Some(draft) = form.draft_mut() {
        draft.set(StudentField::FirstName, first.to_string());
        draft.set(StudentField::LastName, last.to_string());
        draft.set(StudentField::Email, email.to_string());
    }
    form
}

fn course_form(name: &str, credits: &str) -> Form<CourseDraft> {
    let mut form: Form<CourseDraft> = Form::default();
    form.open();
    if let Some(draft) = form.draft_mut() {
        draft.set(CourseField::Name, name.to_string());
        draft.set(CourseField::Credits, credits.to_string());
    }
    form
}

#[tokio::test]
async fn creating_a_student_shows_one_card() {
    let api = FakeApi::new();
    let mut controller = Controller::new();
    let mut form = student_form("Ada", "Lovelace", "ada@x.io");

    let payload = form.submit().unwrap().unwrap();
    let notices = drive(&mut controller, &api, Action::CreateStudent(payload)).await;
    form.settle(notices.iter().all(|n| !n.is_error()));

    assert!(form.is_hidden());
    assert_eq!(notices[0].message, "Student created successfully!");
    let students = controller.store().students();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].full_name(), "Ada Lovelace");
    assert_eq!(students[0].email, "ada@x.io");
    assert_eq!(controller.store().student_options()[0].label, "Ada Lovelace");
}

#[tokio::test]
async fn course_without_description_renders_placeholder() {
    let api = FakeApi::new();
    let mut controller = Controller::new();
    let mut form = course_form("Algorithms", "3");

    let payload = form.submit().unwrap().unwrap();
    drive(&mut controller, &api, Action::CreateCourse(payload)).await;

    let course = &controller.store().courses()[0];
    assert_eq!(course.name, "Algorithms");
    assert_eq!(course.credits, 3);
    assert_eq!(course.description_or_placeholder(), NO_DESCRIPTION);
}

#[tokio::test]
async fn enrollment_row_shows_names_and_date() {
    let api = FakeApi::new();
    let ada = api.seed_student("Ada", "Lovelace");
    let logic = api.seed_course("Logic");
    let mut controller = Controller::new();
    drive(&mut controller, &api, Action::LoadAll).await;

    let mut form = Form::<EnrollmentDraft>::default();
    form.open_with(EnrollmentDraft::dated("2024-01-15"));
    if let Some(draft) = form.draft_mut() {
        draft.set(EnrollmentField::Student, ada.to_string());
        draft.set(EnrollmentField::Course, logic.to_string());
    }
    let payload = form.submit().unwrap().unwrap();
    let notices = drive(&mut controller, &api, Action::CreateEnrollment(payload)).await;
    form.settle(true);

    assert_eq!(notices[0].message, "Enrollment created successfully!");
    let rows = controller.store().enrollments();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        (rows[0].student_name.as_str(), rows[0].course_name.as_str(), rows[0].display_date()),
        ("Ada Lovelace", "Logic", "2024-01-15")
    );
    assert_eq!(form.phase(), FormPhase::Hidden);
}

#[tokio::test]
async fn rejected_course_keeps_form_open_with_values() {
    let api = FakeApi::new();
    api.fail("POST /courses/");
    let mut controller = Controller::new();
    let mut form = course_form("Algorithms", "3");

    let payload = form.submit().unwrap().unwrap();
    let notices = drive(&mut controller, &api, Action::CreateCourse(payload)).await;
    form.settle(notices.iter().all(|n| !n.is_error()));

    assert!(controller.store().courses().is_empty());
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(form.phase(), FormPhase::Visible);
    assert_eq!(form.draft().name, "Algorithms");
    assert_eq!(form.draft().credits, "3");
}

#[tokio::test]
async fn editing_a_student_refreshes_list_and_rows() {
    let api = FakeApi::new();
    let ada = api.seed_student("Ada", "Byron");
    let logic = api.seed_course("Logic");
    api.seed_enrollment(ada, logic, "2024-01-15");
    let mut controller = Controller::new();
    drive(&mut controller, &api, Action::LoadAll).await;

    let mut form = Form::<StudentDraft>::default();
    form.open_with(StudentDraft::from(&controller.store().students()[0]));
    if let Some(draft) = form.draft_mut() {
        draft.set(StudentField::LastName, "Lovelace".to_string());
    }
    let payload = form.submit().unwrap().unwrap();
    let notices = drive(&mut controller, &api, Action::UpdateStudent(ada, payload)).await;

    assert_eq!(notices[0].message, "Student updated successfully!");
    assert_eq!(controller.store().students()[0].full_name(), "Ada Lovelace");
    assert_eq!(controller.store().enrollments()[0].student_name, "Ada Lovelace");
}

#[tokio::test]
async fn failed_edit_does_not_follow_the_sheet_to_another_student() {
    let api = FakeApi::new();
    let ada = api.seed_student("Ada", "Byron");
    let alan = api.seed_student("Alan", "Turing");
    let mut controller = Controller::new();
    drive(&mut controller, &api, Action::LoadAll).await;
    api.fail(&format!("PATCH /students/{ada}"));

    let mut edit = RecordEdit::<StudentDraft>::default();
    edit.open(ada, StudentDraft::from(&controller.store().students()[0]));
    if let Some(draft) = edit.draft_mut() {
        draft.set(StudentField::LastName, "Lovelace".to_string());
    }
    let (id, payload) = edit.submit(ada).unwrap().unwrap();
    let begun = controller.begin(Action::UpdateStudent(id, payload), |_| true);
    let Dispatch::Ready(action) = begun else {
        panic!("edit was not sent: {begun:?}");
    };

    // The sheet switches to Alan before the save for Ada comes back.
    edit.discard();
    let completion = execute(&api, action).await;
    let succeeded = completion.succeeded();
    let notices = controller.complete(completion);
    edit.settle(ada, succeeded);

    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(!edit.is_open_for(alan));
    assert_eq!(edit.submit(alan), Ok(None));
    let names: Vec<String> = api.remote_students().iter().map(|s| s.full_name()).collect();
    assert_eq!(names, vec!["Ada Byron", "Alan Turing"]);
}

#[tokio::test]
async fn detail_fetch_embeds_relations_without_touching_mirrors() {
    let api = FakeApi::new();
    let ada = api.seed_student("Ada", "Lovelace");
    let logic = api.seed_course("Logic");
    api.seed_enrollment(ada, logic, "2024-01-15");
    let controller = Controller::new();

    let detail = fetch_detail(&api, DetailRequest::Course(logic)).await.unwrap();
    let Detail::Course(course) = &detail else {
        panic!("expected a course, got {detail:?}");
    };
    assert_eq!(course.enrolled_students()[0].full_name(), "Ada Lovelace");
    assert_eq!(detail.request(), DetailRequest::Course(logic));
    assert!(!controller.store().courses_mirror().is_loaded());
}

#[tokio::test]
async fn missing_detail_reports_failure() {
    let api = FakeApi::new();

    let err = fetch_detail(&api, DetailRequest::Student(42)).await.unwrap_err();
    let notice = DetailRequest::Student(42).failure_notice(&err);

    assert_eq!(
        notice.message,
        "Error loading student details: Failed to load student details"
    );
}
