//! Recruiting console: identifier formatting and API payload rendering.

#[path = "_core/mod.rs"]
pub mod core;
pub mod commands;
pub mod render;

pub use self::core::{config, telemetry};
