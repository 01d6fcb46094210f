//! Students tab: creation form, card list and the student detail body.

use common::forms::{StudentDraft, StudentField};
use common::model::student::Student;
use common::sync::{Action, DetailRequest};
use yew::html::Scope;
use yew::prelude::*;

use crate::card_grid::CardGrid;
use crate::components::fields::text_input;
use crate::components::registry::{Msg, RegistryComponent};

pub const EMPTY_STUDENTS: &str = "No students found. Add your first student!";
pub const NO_COURSES: &str = "Not enrolled in any courses";

pub fn students_tab(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    html! {
        <section class="tab-panel">
            <div class="section-header">
                <h2>{ "Students" }</h2>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenStudentForm)}>
                    { "+ Add Student" }
                </button>
            </div>
            { student_form(component, link) }
            { student_list(component, link) }
        </section>
    }
}

fn student_form(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    let form = &component.student_form;
    if form.is_hidden() {
        return html! {};
    }
    let pending = form.is_pending();
    let on_input =
        link.callback(|(field, value): (StudentField, String)| Msg::StudentInput(field, value));
    html! {
        <div class="form-container">
            <h3>{ "Add New Student" }</h3>
            <form onsubmit={link.callback(|event: SubmitEvent| {
                event.prevent_default();
                Msg::SubmitStudent
            })}>
                { student_fields(form.draft(), pending, on_input) }
                <div class="form-actions">
                    <button type="submit" class="btn btn-success" disabled={pending}>
                        { if pending { "Saving..." } else { "Save Student" } }
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled={pending}
                        onclick={link.callback(|_| Msg::CloseStudentForm)}
                    >
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Inputs shared by the creation form and the edit form in the detail sheet.
pub fn student_fields(
    draft: &StudentDraft,
    disabled: bool,
    on_input: Callback<(StudentField, String)>,
) -> Html {
    html! {
        <>
            { text_input("First Name", &draft.first_name, "text", disabled,
                on_input.reform(|value| (StudentField::FirstName, value))) }
            { text_input("Last Name", &draft.last_name, "text", disabled,
                on_input.reform(|value| (StudentField::LastName, value))) }
            { text_input("Email", &draft.email, "email", disabled,
                on_input.reform(|value| (StudentField::Email, value))) }
        </>
    }
}

fn student_list(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    let students = component.controller.store().students();
    if students.is_empty() {
        return html! { <p class="empty-message">{ EMPTY_STUDENTS }</p> };
    }
    html! {
        <CardGrid>
            { for students.iter().map(|student| student_card(component, student, link)) }
        </CardGrid>
    }
}

fn student_card(
    component: &RegistryComponent,
    student: &Student,
    link: &Scope<RegistryComponent>,
) -> Html {
    let id = student.id;
    let deleting = component.is_busy(&Action::DeleteStudent(id));
    html! {
        <div
            class="card clickable"
            key={id.to_string()}
            onclick={link.callback(move |_| Msg::ViewDetail(DetailRequest::Student(id)))}
        >
            <h3>{ student.full_name() }</h3>
            <p>{ student.email.clone() }</p>
            <div class="card-actions" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                <button
                    class="btn btn-danger"
                    disabled={deleting}
                    onclick={link.callback(move |_| Msg::Dispatch(Action::DeleteStudent(id)))}
                >
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}

/// Body of the detail sheet for a student fetched with its courses embedded.
pub fn student_detail(
    component: &RegistryComponent,
    student: &Student,
    link: &Scope<RegistryComponent>,
) -> Html {
    let edit = &component.student_edit;
    if edit.is_open_for(student.id) {
        let form = edit.form();
        let pending = form.is_pending();
        let on_input = link.callback(|(field, value): (StudentField, String)| {
            Msg::StudentEditInput(field, value)
        });
        return html! {
            <form class="detail-edit" onsubmit={link.callback(|event: SubmitEvent| {
                event.prevent_default();
                Msg::SubmitEdit
            })}>
                { student_fields(form.draft(), pending, on_input) }
                <div class="form-actions">
                    <button type="submit" class="btn btn-success" disabled={pending}>{ "Save" }</button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled={pending}
                        onclick={link.callback(|_| Msg::CancelEdit)}
                    >
                        { "Cancel" }
                    </button>
                </div>
            </form>
        };
    }

    let courses = student.enrolled_courses();
    html! {
        <div class="detail-body">
            <p><strong>{ "Name: " }</strong>{ student.full_name() }</p>
            <p><strong>{ "Email: " }</strong>{ student.email.clone() }</p>
            <h4>{ "Enrolled Courses" }</h4>
            if courses.is_empty() {
                <p class="empty-message">{ NO_COURSES }</p>
            } else {
                <div class="tags">
                    { for courses.iter().map(|course| html! {
                        <span class="tag">{ format!("{} ({} credits)", course.name, course.credits) }</span>
                    }) }
                </div>
            }
            <div class="form-actions">
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenEdit)}>{ "Edit" }</button>
            </div>
        </div>
    }
}
