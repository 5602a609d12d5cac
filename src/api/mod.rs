//! FPFSS API module.
//!
//! This module provides:
//! - HTTP client for the duplicate index endpoints
//! - API response types

pub mod client;
pub mod types;

pub use client::FpfssApi;
pub use types::*;
