#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
  components::{blob::{AmbientBlob, BlobConfig}, glow_button::GlowButton, scene::SceneEmbed},
  utils::{
    config::HERO_SCENE_URL,
    content::{BRAND, HERO_FEATURES},
    motion::{HERO_ENTRANCE, HERO_STAGGER_MS},
    scroll::Section,
  },
};

fn hero_blobs() -> [BlobConfig; 3] {
  [
    BlobConfig { position: "hero-blob-a", color_from: "#f3ede4", color_to: "#f7dcd0", size: 420, opacity: 0.75, delay_ms: 0 },
    BlobConfig { position: "hero-blob-b", color_from: "#e6f0ff", color_to: "#efe9ff", size: 380, opacity: 0.65, delay_ms: 1_200 },
    BlobConfig { position: "hero-blob-c", color_from: "#fff6ea", color_to: "#e7e7e7", size: 520, opacity: 0.5, delay_ms: 500 },
  ]
}

// one-shot entrance, staggered by position
fn entrance(step: u32) -> String {
  HERO_ENTRANCE.delayed(step * HERO_STAGGER_MS).css()
}

#[component]
pub fn Hero() -> Element {
  rsx! {
    section {
      class: "hero",
      for (idx, config) in hero_blobs().into_iter().enumerate() {
        AmbientBlob { key: "hero-blob-{idx}", config }
      }
      div {
        class: "hero-grid",
        div {
          class: "hero-copy",
          h1 { class: "hero-title", style: entrance(0), "{BRAND.name}" }
          p { class: "hero-tagline", style: entrance(1), "{BRAND.tagline}" }
          div {
            class: "hero-actions",
            style: entrance(2),
            a {
              href: Section::Shop.href(),
              class: "group",
              GlowButton { label: "Explore Collection" }
            }
            a {
              href: Section::NewArrivals.href(),
              class: "group",
              button { class: "ghost-button", "Shop BeYou" }
            }
          }
          div {
            class: "hero-features",
            span { class: "hero-rule" }
            "{HERO_FEATURES}"
          }
        }
        div {
          class: "hero-stage",
          div {
            class: "scene-panel",
            SceneEmbed { scene: HERO_SCENE_URL.to_string() }
            div { class: "scene-vignette" }
          }
          div { class: "scene-shadow" }
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
  fn entrance_is_staggered_and_one_shot() {
    let html = render(Hero);
    for delay in ["ease-out 0ms 1 both", "ease-out 100ms 1 both", "ease-out 200ms 1 both"] {
      assert!(html.contains(delay), "missing entrance delay {delay}");
    }
  }

  #[test]
  fn embeds_exactly_one_scene() {
    let html = render(Hero);
    assert_eq!(html.matches("<spline-viewer").count(), 1);
    assert!(html.contains(HERO_SCENE_URL));
  }

  #[test]
  fn three_desynchronised_blobs() {
    let html = render(Hero);
    assert_eq!(html.matches("ambient-blob hero-blob-").count(), 3);
    assert!(html.contains("1200ms infinite"));
    assert!(html.contains("500ms infinite"));
  }
}
