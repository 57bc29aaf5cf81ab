pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod reveal;
pub mod scroll;
