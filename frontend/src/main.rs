use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod forms;
mod pages;
mod resources;
mod routes;
mod session;

fn main() {
    yew::Renderer::<App>::new().render();
}
