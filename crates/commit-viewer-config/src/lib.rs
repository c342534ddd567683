//! Configuration and file management for commit-viewer
//!
//! This crate provides:
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) and API URL resolution
//! - Cache/log directory paths

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, API_URL_ENV};
pub use config_file::load_config_file;
