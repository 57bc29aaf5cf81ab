#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::template::Template;
use dioxus::prelude::*;
use pages::landing::Landing;

#[derive(Routable, PartialEq, Clone)]
enum Route {
    #[layout(Template)]
        #[route("/")]
        Landing {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    rsx! { Router::<Route> {} }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "There is nothing at this address. The collection lives on the front page." }
        pre { color: "red", "log:\nattempted to navigate to: {route:?}" }
    }
}
