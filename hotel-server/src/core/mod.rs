//! Core module - server configuration
//!
//! - [`Config`] - environment-driven configuration

pub mod config;

pub use config::Config;
