#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::config::SPLINE_VIEWER_URL;

const VIEWER_SCRIPT_ID: &str = "spline-viewer-module";

// defines the `spline-viewer` element; injected at most once per page
fn load_viewer_script() {
  document::eval(&format!(
    r#"
    if (!document.getElementById("{VIEWER_SCRIPT_ID}")) {{
      const scriptElem = document.createElement('script');
      scriptElem.id = "{VIEWER_SCRIPT_ID}";
      scriptElem.type = 'module';
      scriptElem.src = "{SPLINE_VIEWER_URL}";
      scriptElem.onerror = function() {{
        console.error(`Error loading script: ${{scriptElem.src}}`);
      }};
      document.head.appendChild(scriptElem);
    }}
    "#
  ));
}

/// Remote 3D scene. Loading and rendering belong to the viewer element.
#[component]
pub fn SceneEmbed(scene: String) -> Element {
  rsx! {
    div {
      class: "scene-embed",
      onmounted: move |_evt| load_viewer_script(),
      spline-viewer { "url": "{scene}" }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::components::render;

  #[test]
  fn passes_scene_url_to_viewer() {
    fn app() -> Element {
      rsx! { SceneEmbed { scene: "https://prod.spline.design/abc/scene.splinecode" } }
    }
    let html = render(app);
    assert!(html.contains("<spline-viewer"));
    assert!(html.contains(r#"url="https://prod.spline.design/abc/scene.splinecode""#));
  }
}
