//! Registry dashboard: root component for students, courses and enrollments.
//!
//! Responsibilities
//! - Own the `Controller` (local mirrors plus in-flight guard) and the HTTP client.
//! - Delegate message handling to `update::update` and rendering to `view::view`.
//! - On first render, load every collection once so all three tabs start populated.

use common::config::ApiConfig;
use common::sync::Action;
use log::info;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RegistryProps;
pub use state::RegistryComponent;

impl Component for RegistryComponent {
    type Message = Msg;
    type Properties = RegistryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ApiConfig::from_override(ctx.props().api_base_url.as_deref());
        info!("registry talking to {}", config.base_url());
        RegistryComponent::new(config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Dispatch(Action::LoadAll));
        }
    }
}
