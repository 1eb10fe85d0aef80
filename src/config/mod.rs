//! Configuration module for Wedding Bells
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WeddingPaths;
pub use settings::Settings;
