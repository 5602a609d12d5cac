//! Configuration module for the dupe checker.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Hash type selection
//! - Configuration validation

pub mod hash_type;
pub mod loader;
pub mod validation;

pub use hash_type::HashType;
pub use loader::{default_config_path, Config, FlashpointConfig, FpfssConfig, OptionsConfig};
pub use validation::{validate_config, validate_digest, validate_token};
