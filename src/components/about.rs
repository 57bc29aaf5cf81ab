#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
  components::{glow_button::GlowButton, scene::SceneEmbed},
  utils::{config::ABOUT_SCENE_URL, motion::ABOUT_SCENE_REVEAL, reveal::use_reveal, scroll::Section},
};

const SCENE_PANE_ID: &str = "about-scene";

#[component]
pub fn AboutPanel() -> Element {
  // fires once, when 40% of the pane is on screen
  let reveal = use_reveal(0.4, ABOUT_SCENE_REVEAL);
  let reveal_class = reveal.class();

  rsx! {
    section {
      id: Section::About.anchor_id(),
      class: "about-section",
      div {
        class: "glass-card about-card",
        div {
          class: "about-grid",
          div {
            class: "about-copy",
            h3 { "Made for movement. Designed for you." }
            p {
              "Thoughtful silhouettes meet cloud-soft materials for pieces you'll reach for every day. "
              "Minimal by design, elevated in feel: a wardrobe that adapts to your life and lets your personality lead."
            }
            div {
              class: "cta-row",
              a { href: Section::Shop.href(), GlowButton { label: "Shop BeYou" } }
              a {
                href: Section::NewArrivals.href(),
                button { class: "ghost-button", "Explore Collection" }
              }
            }
          }
          div {
            class: "about-stage",
            div {
              id: SCENE_PANE_ID,
              class: "about-scene {reveal_class}",
              style: reveal.style(),
              onmounted: move |_evt| reveal.observe(SCENE_PANE_ID),
              onanimationend: move |evt| reveal.settle(&evt.data().animation_name()),
              SceneEmbed { scene: ABOUT_SCENE_URL.to_string() }
            }
            div { class: "scene-vignette about-vignette" }
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::components::render;

  #[test]
  fn scene_waits_hidden_until_first_view() {
    let html = render(AboutPanel);
    assert!(html.contains(r#"id="about""#));
    assert!(html.contains("about-scene reveal reveal-hidden"));
    assert!(!html.contains("fade-scale"));
    assert!(html.contains(ABOUT_SCENE_URL));
  }
}
