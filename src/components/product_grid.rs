#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::{content::DisplayItem, motion::FABRIC_DRIFT, scroll::Section};

/// One card per item, in the order given.
#[component]
pub fn ProductGrid(items: &'static [DisplayItem]) -> Element {
  rsx! {
    section {
      id: Section::NewArrivals.anchor_id(),
      class: "product-section",
      div {
        class: "section-container",
        div {
          class: "section-heading",
          h2 { "New Arrivals" }
          a { href: Section::Shop.href(), class: "view-all", "View all" }
        }
        div {
          class: "product-grid",
          for (idx, item) in items.iter().enumerate() {
            ProductCard { key: "product-card{idx}", item: *item }
          }
        }
      }
    }
  }
}

// hover lift is pure css, the card keeps no state
#[component]
fn ProductCard(item: DisplayItem) -> Element {
  rsx! {
    div {
      class: "product-card",
      if let Some(badge) = item.badge {
        span { class: "product-badge", "{badge}" }
      }
      div {
        class: "product-media",
        div { class: "fabric-drift", style: FABRIC_DRIFT.css() }
        img { class: "product-image", src: item.image, alt: "product" }
        div { class: "product-sheen" }
      }
      div {
        class: "product-meta",
        div {
          p { class: "product-title", "{item.title}" }
          p { class: "product-price", "{item.price}" }
        }
        button { class: "add-button", "Add" }
      }
    }
  }
}
