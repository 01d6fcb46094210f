//! Courses tab: creation form, card list and the course detail body.

use common::forms::{CourseDraft, CourseField};
use common::model::course::Course;
use common::sync::{Action, DetailRequest};
use yew::html::Scope;
use yew::prelude::*;

use crate::card_grid::CardGrid;
use crate::components::fields::{number_input, text_area, text_input};
use crate::components::registry::{Msg, RegistryComponent};

pub const EMPTY_COURSES: &str = "No courses found. Add your first course!";
pub const NO_STUDENTS: &str = "No students enrolled";

pub fn courses_tab(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    html! {
        <section class="tab-panel">
            <div class="section-header">
                <h2>{ "Courses" }</h2>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCourseForm)}>
                    { "+ Add Course" }
                </button>
            </div>
            { course_form(component, link) }
            { course_list(component, link) }
        </section>
    }
}

fn course_form(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    let form = &component.course_form;
    if form.is_hidden() {
        return html! {};
    }
    let pending = form.is_pending();
    let on_input =
        link.callback(|(field, value): (CourseField, String)| Msg::CourseInput(field, value));
    html! {
        <div class="form-container">
            <h3>{ "Add New Course" }</h3>
            <form onsubmit={link.callback(|event: SubmitEvent| {
                event.prevent_default();
                Msg::SubmitCourse
            })}>
                { course_fields(form.draft(), pending, on_input) }
                <div class="form-actions">
                    <button type="submit" class="btn btn-success" disabled={pending}>
                        { if pending { "Saving..." } else { "Save Course" } }
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled={pending}
                        onclick={link.callback(|_| Msg::CloseCourseForm)}
                    >
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </div>
    }
}

pub fn course_fields(
    draft: &CourseDraft,
    disabled: bool,
    on_input: Callback<(CourseField, String)>,
) -> Html {
    html! {
        <>
            { text_input("Course Name", &draft.name, "text", disabled,
                on_input.reform(|value| (CourseField::Name, value))) }
            { text_area("Description", &draft.description, disabled,
                on_input.reform(|value| (CourseField::Description, value))) }
            { number_input("Credits", &draft.credits, disabled,
                on_input.reform(|value| (CourseField::Credits, value))) }
        </>
    }
}

fn course_list(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    let courses = component.controller.store().courses();
    if courses.is_empty() {
        return html! { <p class="empty-message">{ EMPTY_COURSES }</p> };
    }
    html! {
        <CardGrid>
            { for courses.iter().map(|course| course_card(component, course, link)) }
        </CardGrid>
    }
}

fn course_card(
    component: &RegistryComponent,
    course: &Course,
    link: &Scope<RegistryComponent>,
) -> Html {
    let id = course.id;
    let deleting = component.is_busy(&Action::DeleteCourse(id));
    html! {
        <div
            class="card clickable"
            key={id.to_string()}
            onclick={link.callback(move |_| Msg::ViewDetail(DetailRequest::Course(id)))}
        >
            <h3>{ course.name.clone() }</h3>
            <p>{ course.description_or_placeholder() }</p>
            <p class="credits">{ format!("Credits: {}", course.credits) }</p>
            <div class="card-actions" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                <button
                    class="btn btn-danger"
                    disabled={deleting}
                    onclick={link.callback(move |_| Msg::Dispatch(Action::DeleteCourse(id)))}
                >
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}

/// Body of the detail sheet for a course fetched with its students embedded.
pub fn course_detail(
    component: &RegistryComponent,
    course: &Course,
    link: &Scope<RegistryComponent>,
) -> Html {
    let edit = &component.course_edit;
    if edit.is_open_for(course.id) {
        let form = edit.form();
        let pending = form.is_pending();
        let on_input = link.callback(|(field, value): (CourseField, String)| {
            Msg::CourseEditInput(field, value)
        });
        return html! {
            <form class="detail-edit" onsubmit={link.callback(|event: SubmitEvent| {
                event.prevent_default();
                Msg::SubmitEdit
            })}>
                { course_fields(form.draft(), pending, on_input) }
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

    let students = course.enrolled_students();
    html! {
        <div class="detail-body">
            <p><strong>{ "Name: " }</strong>{ course.name.clone() }</p>
            <p><strong>{ "Description: " }</strong>{ course.description_or_placeholder() }</p>
            <p><strong>{ "Credits: " }</strong>{ course.credits.to_string() }</p>
            <h4>{ "Enrolled Students" }</h4>
            if students.is_empty() {
                <p class="empty-message">{ NO_STUDENTS }</p>
            } else {
                <div class="tags">
                    { for students.iter().map(|student| html! {
                        <span class="tag">{ student.full_name() }</span>
                    }) }
                </div>
            }
            <div class="form-actions">
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenEdit)}>{ "Edit" }</button>
            </div>
        </div>
    }
}
