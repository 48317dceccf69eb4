use crate::app::App;

mod api;
mod app;
mod cache;
mod components;
mod helpers;

fn main() {
    yew::Renderer::<App>::new().render();
}
