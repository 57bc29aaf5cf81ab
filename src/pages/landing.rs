use dioxus::prelude::*;

use crate::{
  components::{about::AboutPanel, banner::PromoBanner, hero::Hero, product_grid::ProductGrid},
  utils::content::NEW_ARRIVALS,
};

/// Fixed section order; nothing here is conditional.
#[component]
pub fn Landing() -> Element {
  rsx! {
    main {
      class: "landing",
      Hero { }
      ProductGrid { items: &NEW_ARRIVALS[..] }
      AboutPanel { }
      PromoBanner { }
    }
  }
}
