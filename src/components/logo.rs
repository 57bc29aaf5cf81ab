#![allow(non_snake_case)]

use dioxus::prelude::*;

/// BY monogram on a frosted tile. `size` is the tile edge in px.
#[component]
pub fn LogoMark(#[props(default = 36)] size: u32) -> Element {
  let glyph = size.saturating_sub(8);

  rsx! {
    div {
      class: "logo-mark",
      div {
        class: "logo-tile",
        style: "width: {size}px; height: {size}px;",
        svg {
          width: "{glyph}",
          height: "{glyph}",
          view_box: "0 0 64 64",
          "aria-label": "BY monogram",
          defs {
            linearGradient {
              id: "by-monogram-grad",
              x1: "0",
              y1: "0",
              x2: "1",
              y2: "1",
              stop { offset: "0%", stop_color: "#1a1a1a" }
              stop { offset: "100%", stop_color: "#313131" }
            }
          }
          path {
            d: "M14 14h20c7.1 0 12 4.5 12 10.7 0 4.9-3 8.9-7.9 10v.2c6 .9 10.1 5 10.1 10.9C48.2 53.7 41.9 58 32.9 58H14V14zm13.1 18c3.2 0 5.1-1.7 5.1-4.4s-1.9-4.4-5.1-4.4h-3.1V32h3.1zm1.2 22c4 0 6.5-2 6.5-5.3 0-3.3-2.6-5.3-6.5-5.3h-4.3V54h4.3z",
            fill: "url(#by-monogram-grad)"
          }
          path {
            d: "M50 14h6.5v33.1c0 3.6 1.6 5.3 4.5 5.3 1.4 0 2.7-.3 3.5-.7L66 58c-1.6 1-4.2 1.7-7.4 1.7-6.2 0-9.1-3.6-9.1-10.1V14z",
            fill: "url(#by-monogram-grad)"
          }
        }
      }
    }
  }
}
