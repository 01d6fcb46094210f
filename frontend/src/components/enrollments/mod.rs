//! Enrollments tab: enroll form with student/course pickers and the table of
//! rows derived from the students mirror.

use common::forms::EnrollmentField;
use common::model::enrollment::EnrollmentRow;
use common::sync::Action;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::fields::{select_input, text_input};
use crate::components::registry::{Msg, RegistryComponent};

pub const EMPTY_ENROLLMENTS: &str = "No enrollments found. Create your first enrollment!";

pub fn enrollments_tab(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    html! {
        <section class="tab-panel">
            <div class="section-header">
                <h2>{ "Enrollments" }</h2>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenEnrollmentForm)}>
                    { "+ New Enrollment" }
                </button>
            </div>
            { enrollment_form(component, link) }
            { enrollment_table(component, link) }
        </section>
    }
}

fn enrollment_form(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    let form = &component.enrollment_form;
    if form.is_hidden() {
        return html! {};
    }
    let draft = form.draft();
    let pending = form.is_pending();
    let store = component.controller.store();
    let on_input = link.callback(|(field, value): (EnrollmentField, String)| {
        Msg::EnrollmentInput(field, value)
    });
    html! {
        <div class="form-container">
            <h3>{ "Enroll Student in Course" }</h3>
            <form onsubmit={link.callback(|event: SubmitEvent| {
                event.prevent_default();
                Msg::SubmitEnrollment
            })}>
                { select_input("Student", "Select a student...", &store.student_options(),
                    &draft.student_id, pending,
                    on_input.reform(|value| (EnrollmentField::Student, value))) }
                { select_input("Course", "Select a course...", &store.course_options(),
                    &draft.course_id, pending,
                    on_input.reform(|value| (EnrollmentField::Course, value))) }
                { text_input("Enrollment Date", &draft.enrollment_date, "date", pending,
                    on_input.reform(|value| (EnrollmentField::Date, value))) }
                <div class="form-actions">
                    <button type="submit" class="btn btn-success" disabled={pending}>
                        { if pending { "Enrolling..." } else { "Enroll" } }
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled={pending}
                        onclick={link.callback(|_| Msg::CloseEnrollmentForm)}
                    >
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn enrollment_table(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    let rows = component.controller.store().enrollments();
    html! {
        <table class="enrollments-table">
            <thead>
                <tr>
                    <th>{ "Student" }</th>
                    <th>{ "Course" }</th>
                    <th>{ "Enrollment Date" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                if rows.is_empty() {
                    <tr><td colspan="4" class="empty-message">{ EMPTY_ENROLLMENTS }</td></tr>
                } else {
                    { for rows.iter().map(|row| enrollment_row(component, row, link)) }
                }
            </tbody>
        </table>
    }
}

fn enrollment_row(
    component: &RegistryComponent,
    row: &EnrollmentRow,
    link: &Scope<RegistryComponent>,
) -> Html {
    let (student_id, course_id) = (row.student_id, row.course_id);
    let unenroll = Action::DeleteEnrollment { student_id, course_id };
    let busy = component.is_busy(&unenroll);
    let on_unenroll = link.callback(move |_| {
        Msg::Dispatch(Action::DeleteEnrollment {
            student_id,
            course_id,
        })
    });
    html! {
        <tr>
            <td>{ row.student_name.clone() }</td>
            <td>{ row.course_name.clone() }</td>
            <td>{ row.display_date() }</td>
            <td>
                <button
                    class="btn btn-danger btn-small"
                    disabled={busy}
                    onclick={on_unenroll}
                >
                    { "Unenroll" }
                </button>
            </td>
        </tr>
    }
}
