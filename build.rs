use dotenvy::dotenv;

const SCENE_DEFAULTS: [(&str, &str); 3] = [
  ("HERO_SCENE_URL", "https://prod.spline.design/8tFqWQxH0wOqcRkV/scene.splinecode"),
  ("ABOUT_SCENE_URL", "https://prod.spline.design/sZ8k3R5GQPMQgn5H/scene.splinecode"),
  ("SPLINE_VIEWER_URL", "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js"),
];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // the .env file is optional, every key has a default
  let _ = dotenv();

  for (key, default) in SCENE_DEFAULTS {
    println!("cargo::rerun-if-env-changed={}", key);
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    println!("cargo::rustc-env={}={}", key, value);
  }
}
