use dioxus::logger::tracing::{debug, warn};
use web_sys::{window, Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::error::AppError;

/// Page regions reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
  NewArrivals,
  About,
  Shop,
}

impl Section {
  pub const ALL: [Section; 3] = [Section::NewArrivals, Section::About, Section::Shop];

  /// Shared by the nav links and the `id` of the section element.
  pub const fn anchor_id(&self) -> &'static str {
    match self {
      Section::NewArrivals => "new",
      Section::About => "about",
      Section::Shop => "shop",
    }
  }

  pub fn href(&self) -> String {
    format!("#{}", self.anchor_id())
  }
}

/// Anything that can look up an anchor and bring it into view.
pub trait AnchorHost {
  type Anchor;

  fn find_anchor(&self, id: &str) -> Option<Self::Anchor>;
  fn scroll_to_top_edge(&self, anchor: &Self::Anchor);
}

/// Requests a smooth scroll to `section`. A missing anchor is a no-op.
pub fn scroll_to<H: AnchorHost>(host: &H, section: Section) {
  let id = section.anchor_id();
  match host.find_anchor(id) {
    Some(anchor) => {
      debug!("scrolling to section #{}", id);
      host.scroll_to_top_edge(&anchor);
    },
    None => debug!("no anchor #{} on the page, skipping scroll", id),
  }
}

pub struct BrowserViewport {
  document: Document,
}

impl BrowserViewport {
  pub fn current() -> Result<Self, AppError> {
    let window = window().ok_or_else(|| AppError::MissingHost("global window".into()))?;
    let document = window.document().ok_or_else(|| AppError::MissingHost("document".into()))?;
    Ok(Self { document })
  }
}

impl AnchorHost for BrowserViewport {
  type Anchor = Element;

  fn find_anchor(&self, id: &str) -> Option<Element> {
    self.document.get_element_by_id(id)
  }

  fn scroll_to_top_edge(&self, anchor: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    anchor.scroll_into_view_with_scroll_into_view_options(&options);
  }
}

/// Click handler entry point for the navigation bar.
pub fn scroll_to_section(section: Section) {
  match BrowserViewport::current() {
    Ok(viewport) => scroll_to(&viewport, section),
    Err(e) => warn!("cannot scroll to #{}: {}", section.anchor_id(), e),
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use super::*;

  struct RecordingHost {
    anchors: Vec<&'static str>,
    requests: RefCell<Vec<String>>,
  }

  impl RecordingHost {
    fn with_anchors(anchors: &[&'static str]) -> Self {
      Self { anchors: anchors.to_vec(), requests: RefCell::new(vec![]) }
    }
  }

  impl AnchorHost for RecordingHost {
    type Anchor = String;

    fn find_anchor(&self, id: &str) -> Option<String> {
      self.anchors.iter().find(|a| **a == id).map(|a| a.to_string())
    }

    fn scroll_to_top_edge(&self, anchor: &String) {
      self.requests.borrow_mut().push(anchor.clone());
    }
  }

  #[test]
  fn every_nav_section_issues_exactly_one_request() {
    for section in Section::ALL {
      let host = RecordingHost::with_anchors(&["new", "about", "shop"]);
      scroll_to(&host, section);
      assert_eq!(*host.requests.borrow(), vec![section.anchor_id().to_string()]);
    }
  }

  #[test]
  fn new_arrivals_targets_new_anchor() {
    let host = RecordingHost::with_anchors(&["new"]);
    scroll_to(&host, Section::NewArrivals);
    assert_eq!(*host.requests.borrow(), vec!["new".to_string()]);
  }

  #[test]
  fn missing_anchor_is_silent_noop() {
    let host = RecordingHost::with_anchors(&["new", "shop"]);
    scroll_to(&host, Section::About);
    assert!(host.requests.borrow().is_empty());
  }

  #[test]
  fn repeated_clicks_are_not_coalesced() {
    let host = RecordingHost::with_anchors(&["shop"]);
    scroll_to(&host, Section::Shop);
    scroll_to(&host, Section::Shop);
    assert_eq!(host.requests.borrow().len(), 2);
  }

  #[test]
  fn anchor_ids_match_href() {
    assert_eq!(Section::NewArrivals.href(), "#new");
    assert_eq!(Section::About.href(), "#about");
    assert_eq!(Section::Shop.href(), "#shop");
  }
}
