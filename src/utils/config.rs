//! Build-time configuration, resolved by `build.rs` from the environment or `.env`.

/// Scene shown in the hero panel.
pub const HERO_SCENE_URL: &str = env!("HERO_SCENE_URL");
/// Scene shown in the right pane of the about panel.
pub const ABOUT_SCENE_URL: &str = env!("ABOUT_SCENE_URL");
/// ES module that defines the `spline-viewer` custom element.
pub const SPLINE_VIEWER_URL: &str = env!("SPLINE_VIEWER_URL");
