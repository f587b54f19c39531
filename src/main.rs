mod api;
mod app;
mod components;
mod engine;
mod pages;
mod share;
mod storage;
mod store;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
