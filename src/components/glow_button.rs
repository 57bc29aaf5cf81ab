#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Dark pill button. Hovering turns on the glow halo; nothing else is tracked.
#[component]
pub fn GlowButton(label: String, onclick: Option<EventHandler<MouseEvent>>) -> Element {
  let mut glowing = use_signal(|| false);

  rsx! {
    button {
      class: if glowing() { "glow-button glowing" } else { "glow-button" },
      onmouseenter: move |_| glowing.set(true),
      onmouseleave: move |_| glowing.set(false),
      onclick: move |evt| {
        if let Some(handler) = onclick {
          handler.call(evt);
        }
      },
      span { class: "glow-halo", aria_hidden: "true" }
      span { class: "glow-label", "{label}" }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::components::render;

  #[test]
  fn renders_label_without_glow_at_rest() {
    fn app() -> Element {
      rsx! { GlowButton { label: "Shop Now" } }
    }
    let html = render(app);
    assert!(html.contains(r#"class="glow-button""#));
    assert!(!html.contains("glowing"));
    assert!(html.contains("Shop Now"));
  }
}
