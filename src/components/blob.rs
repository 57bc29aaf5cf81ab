#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::motion::BLOB_FLOAT;

#[derive(Debug, Clone, PartialEq)]
pub struct BlobConfig {
  /// stylesheet class that places the blob inside its section
  pub position: &'static str,
  pub color_from: &'static str,
  pub color_to: &'static str,
  pub opacity: f32,
  /// edge length in px
  pub size: u32,
  /// offsets the float loop so neighbouring blobs drift out of phase
  pub delay_ms: u32,
}

impl Default for BlobConfig {
  fn default() -> Self {
    Self {
      position: "",
      color_from: "#fdebd3",
      color_to: "#e8e6ff",
      opacity: 0.7,
      size: 360,
      delay_ms: 0,
    }
  }
}

impl BlobConfig {
  pub fn style(&self) -> String {
    format!(
      "width: {}px; height: {}px; opacity: {}; {}",
      self.size, self.size, self.opacity, BLOB_FLOAT.delayed(self.delay_ms).css()
    )
  }

  pub fn fill(&self) -> String {
    format!(
      "background: radial-gradient(60% 60% at 50% 50%, {}, {}); filter: saturate(1.05);",
      self.color_from, self.color_to
    )
  }
}

/// Soft pastel shape floating up and down forever. Never intercepts pointer events.
#[component]
pub fn AmbientBlob(config: BlobConfig) -> Element {
  rsx! {
    div {
      class: "ambient-blob {config.position}",
      style: config.style(),
      aria_hidden: "true",
      div { class: "ambient-blob-fill", style: config.fill() }
    }
  }
}
