use crate::components::registry::RegistryComponent;
use yew::{html, AttrValue, Component, Context, Html};

/// Compile-time override of the API base address (`API_BASE_URL=... trunk build`).
const API_BASE_URL: Option<&str> = option_env!("API_BASE_URL");

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <header>
                    <h1>{ "🎓 Course Enrollment System" }</h1>
                    <p>{ "Manage students, courses, and enrollments" }</p>
                </header>
                <RegistryComponent api_base_url={API_BASE_URL.map(AttrValue::from)} />
            </div>
        }
    }
}
