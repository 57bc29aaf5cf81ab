//! Static page content. Everything here is compiled in and never mutated.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandIdentity {
  pub name: &'static str,
  pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayItem {
  pub title: &'static str,
  /// Already formatted for display, e.g. `$68`.
  pub price: &'static str,
  pub image: &'static str,
  pub badge: Option<&'static str>,
}

pub const BRAND: BrandIdentity = BrandIdentity {
  name: "BeYou",
  tagline: "Embrace individuality. Wear confidence. Live in comfort.",
};

pub const HERO_FEATURES: &str = "Ultra-soft fabrics • Tailored silhouettes • Everyday luxury";
pub const FOOTER_TAGLINE: &str = "Crafted with care • Designed for life";

const HOODIE_IMAGE: &str = "https://images.unsplash.com/photo-1575450384270-54444858bc39?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxDb250b3VyJTIwVGVlfGVufDB8MHx8fDE3NjI5NDM4MjV8MA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80";

/// Rendered in this order by the product grid.
pub static NEW_ARRIVALS: [DisplayItem; 4] = [
  DisplayItem {
    title: "Contour Tee",
    price: "$68",
    image: "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?auto=format&fit=crop&w=800&q=60",
    badge: Some("NEW"),
  },
  DisplayItem {
    title: "Fluid Hoodie",
    price: "$120",
    image: HOODIE_IMAGE,
    badge: Some("LIMITED"),
  },
  DisplayItem {
    title: "AirFlex Jogger",
    price: "$98",
    image: "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&w=800&q=60",
    badge: None,
  },
  DisplayItem {
    title: "Ripple Dress",
    price: "$150",
    image: HOODIE_IMAGE,
    badge: None,
  },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_arrivals_keep_listed_order() {
    let titles: Vec<_> = NEW_ARRIVALS.iter().map(|i| i.title).collect();
    assert_eq!(titles, ["Contour Tee", "Fluid Hoodie", "AirFlex Jogger", "Ripple Dress"]);
  }

  #[test]
  fn only_first_two_items_carry_badges() {
    let badges: Vec<_> = NEW_ARRIVALS.iter().map(|i| i.badge).collect();
    assert_eq!(badges, [Some("NEW"), Some("LIMITED"), None, None]);
  }
}
