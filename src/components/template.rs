use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::{
  components::{logo::LogoMark, nav::NavBar},
  utils::content::{BRAND, FOOTER_TAGLINE},
  Route,
};

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("/assets/landing.css");

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "page-backdrop",
      NavBar { }
      Outlet::<Route> {}
      Footer { }
    }
  }
}

#[component]
pub fn Footer() -> Element {
  // read from the host clock on every render
  let year = Local::now().year();

  rsx! {
    footer {
      class: "site-footer",
      div {
        class: "footer-container",
        div {
          class: "footer-brand",
          LogoMark { size: 28 }
          span { class: "copyright", "© {year} {BRAND.name}" }
        }
        div { class: "footer-tagline", "{FOOTER_TAGLINE}" }
      }
    }
  }
}
