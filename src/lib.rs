pub mod app;
pub mod components;
pub mod conf;

pub fn run() {
    yew::Renderer::<app::App>::new().render();
}
