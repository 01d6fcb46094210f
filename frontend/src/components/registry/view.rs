//! View function for the registry dashboard: tab bar, active tab body and
//! the detail sheet.

use common::sync::Detail;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::{courses, enrollments, students};
use crate::tops_sheet::detail_top_sheet::DetailTopSheet;

use super::messages::Msg;
use super::state::{RegistryComponent, Tab};

pub fn view(component: &RegistryComponent, ctx: &Context<RegistryComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="registry-root">
            { build_tab_bar(component, link) }
            <div class="tab-content">
                {
                    match component.active_tab {
                        Tab::Students => students::students_tab(component, link),
                        Tab::Courses => courses::courses_tab(component, link),
                        Tab::Enrollments => enrollments::enrollments_tab(component, link),
                    }
                }
            </div>
            { build_detail_sheet(component, link) }
        </div>
    }
}

fn build_tab_bar(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    html! {
        <nav class="tabs">
            { for Tab::ALL.iter().map(|&tab| {
                let active = component.active_tab == tab;
                html! {
                    <button
                        class={classes!("tab-btn", active.then_some("active"))}
                        onclick={link.callback(move |_| Msg::SetTab(tab))}
                    >
                        { tab.label() }
                    </button>
                }
            }) }
        </nav>
    }
}

fn build_detail_sheet(component: &RegistryComponent, link: &Scope<RegistryComponent>) -> Html {
    let (title, body) = match &component.detail {
        Some(Detail::Student(student)) => (
            "Student Details",
            students::student_detail(component, student, link),
        ),
        Some(Detail::Course(course)) => (
            "Course Details",
            courses::course_detail(component, course, link),
        ),
        None => ("", html! {}),
    };
    html! {
        <DetailTopSheet
            title={title}
            open={component.detail.is_some()}
            on_close={link.callback(|_| Msg::CloseDetail)}
        >
            { body }
        </DetailTopSheet>
    }
}
