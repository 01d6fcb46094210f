use crate::app::App;

mod api;
mod app;
mod card_grid;
mod components;
mod logging;
mod tops_sheet;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
