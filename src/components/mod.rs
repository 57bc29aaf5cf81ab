pub mod about;
pub mod banner;
pub mod blob;
pub mod glow_button;
pub mod hero;
pub mod logo;
pub mod nav;
pub mod product_grid;
pub mod scene;
pub mod template;

#[cfg(test)]
pub(crate) fn render(app: fn() -> dioxus::prelude::Element) -> String {
  let mut dom = dioxus::prelude::VirtualDom::new(app);
  dom.rebuild_in_place();
  dioxus_ssr::render(&dom)
}
