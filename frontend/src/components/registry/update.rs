//! Update function for the registry dashboard.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Every remote operation goes through `Controller::begin`, runs detached via
//!   `spawn_local`, and comes back as `Msg::Completed` carrying its reloads.
//! - Forms sit in `Pending` while their submission is in flight and are reset
//!   only on success.
//! - Detail fetches are independent of the mirrors and of the in-flight guard.

use common::error::ValidationError;
use common::forms::{CourseDraft, EnrollmentDraft, StudentDraft};
use common::sync::{
    execute, fetch_detail, Action, ActionKey, ActionKind, Detail, DetailRequest, Dispatch, Notice,
};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{confirm_with_user, show_toast, today_iso};
use super::messages::Msg;
use super::state::RegistryComponent;

pub fn update(
    component: &mut RegistryComponent,
    ctx: &Context<RegistryComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            dispatch(component, ctx, tab.load_action());
            true
        }
        Msg::Dispatch(action) => dispatch(component, ctx, action),
        Msg::Completed(completion) => {
            let key = completion.key;
            let succeeded = completion.succeeded();
            settle_form(component, key, succeeded);
            for notice in component.controller.complete(completion) {
                show_toast(&notice);
            }
            if succeeded {
                sync_open_detail(component, ctx, key);
            }
            true
        }

        Msg::OpenStudentForm => {
            component.student_form.open();
            true
        }
        Msg::CloseStudentForm => {
            component.student_form.close();
            true
        }
        Msg::StudentInput(field, value) => {
            if let Some(draft) = component.student_form.draft_mut() {
                draft.set(field, value);
            }
            false
        }
        Msg::SubmitStudent => {
            let submitted = component.student_form.submit();
            submit(component, ctx, submitted, Action::CreateStudent)
        }

        Msg::OpenCourseForm => {
            component.course_form.open();
            true
        }
        Msg::CloseCourseForm => {
            component.course_form.close();
            true
        }
        Msg::CourseInput(field, value) => {
            if let Some(draft) = component.course_form.draft_mut() {
                draft.set(field, value);
            }
            false
        }
        Msg::SubmitCourse => {
            let submitted = component.course_form.submit();
            submit(component, ctx, submitted, Action::CreateCourse)
        }

        Msg::OpenEnrollmentForm => {
            component
                .enrollment_form
                .open_with(EnrollmentDraft::dated(today_iso()));
            true
        }
        Msg::CloseEnrollmentForm => {
            component.enrollment_form.close();
            true
        }
        Msg::EnrollmentInput(field, value) => {
            if let Some(draft) = component.enrollment_form.draft_mut() {
                draft.set(field, value);
            }
            // Selects are controlled; re-render so the chosen option sticks.
            true
        }
        Msg::SubmitEnrollment => {
            let submitted = component.enrollment_form.submit();
            submit(component, ctx, submitted, Action::CreateEnrollment)
        }

        Msg::ViewDetail(request) => {
            load_detail(component, ctx, request);
            false
        }
        Msg::DetailLoaded(request, Ok(detail)) => {
            if component.detail.as_ref().map(Detail::request) != Some(request) {
                discard_edits(component);
            }
            component.detail = Some(detail);
            true
        }
        Msg::DetailLoaded(request, Err(err)) => {
            show_toast(&request.failure_notice(&err));
            false
        }
        Msg::CloseDetail => {
            component.detail = None;
            discard_edits(component);
            true
        }

        Msg::OpenEdit => {
            match &component.detail {
                Some(Detail::Student(student)) => {
                    component
                        .student_edit
                        .open(student.id, StudentDraft::from(student));
                }
                Some(Detail::Course(course)) => {
                    component
                        .course_edit
                        .open(course.id, CourseDraft::from(course));
                }
                None => return false,
            }
            true
        }
        Msg::CancelEdit => {
            component.student_edit.close();
            component.course_edit.close();
            true
        }
        Msg::StudentEditInput(field, value) => {
            if let Some(draft) = component.student_edit.draft_mut() {
                draft.set(field, value);
            }
            false
        }
        Msg::CourseEditInput(field, value) => {
            if let Some(draft) = component.course_edit.draft_mut() {
                draft.set(field, value);
            }
            false
        }
        Msg::SubmitEdit => match component.detail.as_ref().map(Detail::request) {
            Some(DetailRequest::Student(id)) => {
                let submitted = component.student_edit.submit(id);
                submit(component, ctx, submitted, |(id, payload)| {
                    Action::UpdateStudent(id, payload)
                })
            }
            Some(DetailRequest::Course(id)) => {
                let submitted = component.course_edit.submit(id);
                submit(component, ctx, submitted, |(id, payload)| {
                    Action::UpdateCourse(id, payload)
                })
            }
            None => false,
        },
    }
}

/// Hands an action to the controller and, if accepted, runs it detached.
///
/// Returns whether the action was sent. Declined confirmations and duplicates
/// of an outstanding action leave everything untouched.
fn dispatch(
    component: &mut RegistryComponent,
    ctx: &Context<RegistryComponent>,
    action: Action,
) -> bool {
    match component.controller.begin(action, confirm_with_user) {
        Dispatch::Ready(action) => {
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let completion = execute(&api, action).await;
                link.send_message(Msg::Completed(completion));
            });
            true
        }
        Dispatch::Declined | Dispatch::Busy(_) => false,
    }
}

/// Turns a form submission into a dispatched action.
///
/// Validation failures are toasted and leave the form editable. If the action
/// cannot be sent the form is released from `Pending` straight away.
fn submit<P>(
    component: &mut RegistryComponent,
    ctx: &Context<RegistryComponent>,
    submitted: Result<Option<P>, ValidationError>,
    into_action: impl FnOnce(P) -> Action,
) -> bool {
    match submitted {
        Ok(Some(payload)) => {
            let action = into_action(payload);
            let key = action.key();
            if !dispatch(component, ctx, action) {
                settle_form(component, key, false);
            }
            true
        }
        Ok(None) => false,
        Err(invalid) => {
            show_toast(&Notice::error(invalid.to_string()));
            true
        }
    }
}

fn settle_form(component: &mut RegistryComponent, key: ActionKey, succeeded: bool) {
    match (key.kind, key.record_id()) {
        (ActionKind::CreateStudent, _) => component.student_form.settle(succeeded),
        (ActionKind::CreateCourse, _) => component.course_form.settle(succeeded),
        (ActionKind::CreateEnrollment, _) => component.enrollment_form.settle(succeeded),
        (ActionKind::UpdateStudent, Some(id)) => component.student_edit.settle(id, succeeded),
        (ActionKind::UpdateCourse, Some(id)) => component.course_edit.settle(id, succeeded),
        _ => {}
    }
}

/// Drops both edit drafts, including one whose save is still outstanding;
/// its late completion is then ignored by `RecordEdit::settle`.
fn discard_edits(component: &mut RegistryComponent) {
    component.student_edit.discard();
    component.course_edit.discard();
}

/// Keeps an open detail sheet in step with a successful mutation of its record.
fn sync_open_detail(
    component: &mut RegistryComponent,
    ctx: &Context<RegistryComponent>,
    key: ActionKey,
) {
    let Some(open) = component.detail.as_ref().map(Detail::request) else {
        return;
    };
    let touches_open = match (open, key.kind) {
        (DetailRequest::Student(id), ActionKind::UpdateStudent | ActionKind::DeleteStudent)
        | (DetailRequest::Course(id), ActionKind::UpdateCourse | ActionKind::DeleteCourse) => {
            key.record_id() == Some(id)
        }
        _ => false,
    };
    if !touches_open {
        return;
    }
    match key.kind {
        ActionKind::DeleteStudent | ActionKind::DeleteCourse => {
            component.detail = None;
            discard_edits(component);
        }
        _ => load_detail(component, ctx, open),
    }
}

fn load_detail(
    component: &RegistryComponent,
    ctx: &Context<RegistryComponent>,
    request: DetailRequest,
) {
    let api = component.api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = fetch_detail(&api, request).await;
        link.send_message(Msg::DetailLoaded(request, result));
    });
}
