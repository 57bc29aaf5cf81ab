//! Fire-once reveal animations triggered by the first scroll into view.

use dioxus::{logger::tracing::{debug, error}, prelude::*};
use js_sys::{
  wasm_bindgen::{closure::Closure, JsCast, JsValue},
  Array,
};
use web_sys::{window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{error::AppError, motion::Transition};

/// hidden -> animating -> settled, never backwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
  #[default]
  Hidden,
  Animating,
  Settled,
}

impl RevealPhase {
  pub fn on_visible(self) -> Self {
    match self {
      RevealPhase::Hidden => RevealPhase::Animating,
      other => other,
    }
  }

  pub fn on_animation_end(self) -> Self {
    match self {
      RevealPhase::Animating => RevealPhase::Settled,
      other => other,
    }
  }

  pub fn class(&self) -> &'static str {
    match self {
      RevealPhase::Hidden => "reveal reveal-hidden",
      RevealPhase::Animating => "reveal reveal-animating",
      RevealPhase::Settled => "reveal reveal-settled",
    }
  }
}

// browsers report the crossing ratio a hair under the threshold
const RATIO_TOLERANCE: f64 = 1e-3;

/// An entry counts once it intersects and at least `threshold` of it is visible.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
  is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

#[derive(Clone, Copy, PartialEq)]
pub struct Reveal {
  phase: Signal<RevealPhase>,
  threshold: f64,
  transition: Transition,
}

/// `threshold` is the visible fraction (0.0..=1.0) that triggers the animation.
pub fn use_reveal(threshold: f64, transition: Transition) -> Reveal {
  let phase = use_signal(RevealPhase::default);
  Reveal { phase, threshold, transition }
}

impl Reveal {
  pub fn phase(&self) -> RevealPhase {
    *self.phase.read()
  }

  pub fn class(&self) -> &'static str {
    self.phase().class()
  }

  pub fn style(&self) -> String {
    match self.phase() {
      RevealPhase::Animating => self.transition.css(),
      _ => String::new(),
    }
  }

  /// Whether an ended animation is this reveal's own, not one bubbling up from a child.
  pub fn owns_animation(&self, animation_name: &str) -> bool {
    animation_name == self.transition.keyframes.name()
  }

  /// Wire to `onanimationend`.
  pub fn settle(&self, animation_name: &str) {
    if !self.owns_animation(animation_name) {
      return;
    }
    let mut phase = self.phase;
    let next = phase.peek().on_animation_end();
    phase.set(next);
  }

  /// Wire to `onmounted` of the element carrying `element_id`.
  pub fn observe(&self, element_id: &str) {
    if let Err(e) = self.attach_observer(element_id) {
      error!("reveal for #{} disabled: {}", element_id, e);
      // never leave content invisible
      let mut phase = self.phase;
      phase.set(RevealPhase::Settled);
    }
  }

  fn attach_observer(&self, element_id: &str) -> Result<(), AppError> {
    let document = window()
      .and_then(|w| w.document())
      .ok_or_else(|| AppError::MissingHost("document".into()))?;
    let target = document
      .get_element_by_id(element_id)
      .ok_or_else(|| AppError::MissingHost(format!("element #{}", element_id)))?;

    let mut phase = self.phase;
    let threshold = self.threshold;
    let id = element_id.to_string();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
      let crossed = entries.iter().any(|entry| {
        let entry = entry.unchecked_into::<IntersectionObserverEntry>();
        crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold)
      });
      if crossed {
        debug!("#{} scrolled into view, revealing", id);
        let next = phase.peek().on_visible();
        phase.set(next);
        observer.disconnect();
      }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(self.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
      .map_err(|e| AppError::ObserverError(format!("{:?}", e)))?;
    observer.observe(&target);
    // owned by the observer from here on, released when the page goes away
    callback.forget();
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::motion::ABOUT_SCENE_REVEAL;

  #[test]
  fn first_visibility_starts_the_animation() {
    assert_eq!(RevealPhase::Hidden.on_visible(), RevealPhase::Animating);
    assert_eq!(RevealPhase::Animating.on_animation_end(), RevealPhase::Settled);
  }

  #[test]
  fn fires_at_most_once_across_scroll_cycles() {
    let mut phase = RevealPhase::default();
    let mut started = 0;
    for _ in 0..5 {
      let before = phase;
      phase = phase.on_visible();
      if before == RevealPhase::Hidden && phase == RevealPhase::Animating {
        started += 1;
      }
      phase = phase.on_animation_end();
    }
    assert_eq!(started, 1);
    assert_eq!(phase, RevealPhase::Settled);
  }

  #[test]
  fn no_reverse_transitions() {
    assert_eq!(RevealPhase::Settled.on_visible(), RevealPhase::Settled);
    assert_eq!(RevealPhase::Settled.on_animation_end(), RevealPhase::Settled);
    assert_eq!(RevealPhase::Hidden.on_animation_end(), RevealPhase::Hidden);
    assert_eq!(RevealPhase::Animating.on_visible(), RevealPhase::Animating);
  }

  #[test]
  fn ratio_reported_just_under_threshold_still_reveals() {
    let crossed = crosses_threshold(true, 0.399_999_99, 0.4);
    assert!(crossed);
    let phase = if crossed { RevealPhase::Hidden.on_visible() } else { RevealPhase::Hidden };
    assert_eq!(phase, RevealPhase::Animating);
  }

  #[test]
  fn only_own_keyframes_settle_the_reveal() {
    fn app() -> Element {
      let reveal = use_reveal(0.4, ABOUT_SCENE_REVEAL);
      assert!(reveal.owns_animation("fade-scale"));
      assert!(!reveal.owns_animation("float-y"));
      assert!(!reveal.owns_animation(""));
      rsx! { div {} }
    }
    crate::components::render(app);
  }

  #[test]
  fn threshold_requires_real_intersection() {
    assert!(crosses_threshold(true, 0.4, 0.4));
    assert!(crosses_threshold(true, 0.0, 0.0));
    assert!(!crosses_threshold(true, 0.2, 0.4));
    assert!(!crosses_threshold(true, 0.39, 0.4));
    assert!(!crosses_threshold(false, 1.0, 0.0));
  }
}
