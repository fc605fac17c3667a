//! # Core Module
//!
//! Shared configuration for the overlay and the binaries that host it.
//!
//! ## Organization
//!
//! - **Config**: `GuiConfig` and the file-backed `Config` trait
//! - **Foundation**: logging helpers

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{Config, ConfigError, GuiConfig, SchemaConfig};
