// Library exports for the trainlog CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod render;
pub mod sessions;
