#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
  components::{blob::{AmbientBlob, BlobConfig}, glow_button::GlowButton},
  utils::{motion::BANNER_HEADING_REVEAL, reveal::use_reveal, scroll::Section},
};

const HEADING_ID: &str = "shop-heading";

#[component]
pub fn PromoBanner() -> Element {
  let reveal = use_reveal(0.0, BANNER_HEADING_REVEAL);
  let reveal_class = reveal.class();

  rsx! {
    section {
      id: Section::Shop.anchor_id(),
      class: "banner-section",
      div {
        class: "glass-card banner-card",
        h3 {
          id: HEADING_ID,
          class: "banner-heading {reveal_class}",
          style: reveal.style(),
          onmounted: move |_evt| reveal.observe(HEADING_ID),
          onanimationend: move |evt| reveal.settle(&evt.data().animation_name()),
          "Step into comfort with BeYou"
        }
        p {
          class: "banner-copy",
          "Discover essential layers in soft neutrals and blush undertones. Precision cut. Feather-soft touch."
        }
        div {
          class: "banner-actions",
          GlowButton { label: "Shop Now" }
        }
        AmbientBlob {
          config: BlobConfig { position: "banner-blob-a", color_from: "#f6efe6", color_to: "#e9e6ff", size: 260, opacity: 0.55, delay_ms: 0 }
        }
        AmbientBlob {
          config: BlobConfig { position: "banner-blob-b", color_from: "#fff2e6", color_to: "#eee", size: 300, opacity: 0.45, delay_ms: 800 }
        }
      }
    }
  }
}
