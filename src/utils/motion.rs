//! Declarative animation parameters.
//!
//! A [`Transition`] only describes an animation; the keyframes live in
//! `assets/landing.css` and the browser runs the timing loop. Nothing here
//! waits on or observes completion.

use std::fmt;

/// Keyframe sets defined in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyframes {
  /// opacity 0 -> 1 while rising into place
  RiseIn,
  /// small rise, compact variant used by the banner heading
  RiseInShort,
  /// 0 -> -12px -> 0 vertical float
  FloatY,
  /// opacity 0 -> 1, scale 0.98 -> 1
  FadeScale,
  /// slow x/y wander of the fabric shape behind product images
  Drift,
}

impl Keyframes {
  pub fn name(&self) -> &'static str {
    match self {
      Keyframes::RiseIn => "rise-in",
      Keyframes::RiseInShort => "rise-in-short",
      Keyframes::FloatY => "float-y",
      Keyframes::FadeScale => "fade-scale",
      Keyframes::Drift => "drift",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
  EaseOut,
  EaseInOut,
}

impl fmt::Display for Easing {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Easing::EaseOut => write!(f, "ease-out"),
      Easing::EaseInOut => write!(f, "ease-in-out"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
  Once,
  Forever,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
  pub keyframes: Keyframes,
  pub duration_ms: u32,
  pub delay_ms: u32,
  pub easing: Easing,
  pub repeat: Repeat,
}

impl Transition {
  /// One-shot animation that holds its final frame.
  pub const fn once(keyframes: Keyframes, duration_ms: u32) -> Self {
    Self { keyframes, duration_ms, delay_ms: 0, easing: Easing::EaseOut, repeat: Repeat::Once }
  }

  /// Infinite loop; restarts from the first frame on every remount.
  pub const fn forever(keyframes: Keyframes, duration_ms: u32) -> Self {
    Self { keyframes, duration_ms, delay_ms: 0, easing: Easing::EaseInOut, repeat: Repeat::Forever }
  }

  pub const fn delayed(mut self, delay_ms: u32) -> Self {
    self.delay_ms = delay_ms;
    self
  }

  /// Renders the inline `animation` declaration.
  pub fn css(&self) -> String {
    // `both` keeps one-shot elements hidden during their delay and at rest afterwards
    let (count, fill) = match self.repeat {
      Repeat::Once => ("1", "both"),
      Repeat::Forever => ("infinite", "none"),
    };
    format!(
      "animation: {} {}ms {} {}ms {} {};",
      self.keyframes.name(), self.duration_ms, self.easing, self.delay_ms, count, fill
    )
  }
}

// Hero entrance, staggered per element
pub const HERO_ENTRANCE: Transition = Transition::once(Keyframes::RiseIn, 600);
pub const HERO_STAGGER_MS: u32 = 100;

pub const BLOB_FLOAT: Transition = Transition::forever(Keyframes::FloatY, 8_000);
pub const FABRIC_DRIFT: Transition = Transition::forever(Keyframes::Drift, 10_000);

pub const ABOUT_SCENE_REVEAL: Transition = Transition::once(Keyframes::FadeScale, 600);
pub const BANNER_HEADING_REVEAL: Transition = Transition::once(Keyframes::RiseInShort, 500);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn one_shot_runs_a_single_iteration() {
    let css = HERO_ENTRANCE.delayed(200).css();
    assert_eq!(css, "animation: rise-in 600ms ease-out 200ms 1 both;");
  }

  #[test]
  fn ambient_loop_never_terminates() {
    let css = BLOB_FLOAT.delayed(1_200).css();
    assert_eq!(css, "animation: float-y 8000ms ease-in-out 1200ms infinite none;");
  }

  #[test]
  fn delay_leaves_other_fields_alone() {
    let t = ABOUT_SCENE_REVEAL.delayed(50);
    assert_eq!(t.keyframes, Keyframes::FadeScale);
    assert_eq!(t.duration_ms, 600);
    assert_eq!(t.repeat, Repeat::Once);
    assert_eq!(t.easing, Easing::EaseOut);
    assert_eq!(t.delay_ms, 50);
  }
}
