//! Constants used throughout the data layer
//!
//! This module centralizes magic strings and default values to improve
//! maintainability and consistency.

// Configuration file locations
pub const LOCAL_CONFIG_FILE: &str = "league-data.toml";
pub const CONFIG_DIR_NAME: &str = "league-data";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const IN_MEMORY_URL_PREFIX: &str = "sqlite::memory:";

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
