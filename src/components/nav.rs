#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
  components::{glow_button::GlowButton, logo::LogoMark},
  utils::{content::BRAND, scroll::{scroll_to_section, Section}},
};

pub const NAV_LINKS: [(&str, Section); 3] = [
  ("New Arrivals", Section::NewArrivals),
  ("About", Section::About),
  ("Shop", Section::Shop),
];

#[component]
pub fn NavBar() -> Element {
  rsx! {
    header {
      class: "nav-shell",
      div {
        class: "nav-container",
        nav {
          class: "nav-bar",
          div {
            class: "nav-brand",
            LogoMark {}
            span { class: "nav-brand-name", "{BRAND.name}" }
          }
          div {
            class: "nav-links",
            for (label, section) in NAV_LINKS {
              button {
                key: "{label}",
                class: "nav-link",
                "data-section": section.anchor_id(),
                onclick: move |_| scroll_to_section(section),
                "{label}"
              }
            }
          }
          div {
            class: "nav-cta",
            GlowButton {
              label: "Shop BeYou",
              onclick: move |_| scroll_to_section(Section::Shop)
            }
          }
        }
      }
    }
  }
}
