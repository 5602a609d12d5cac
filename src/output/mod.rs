//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Spinners for blocking steps

pub mod console;
pub mod progress;

pub use console::{print_banner, print_error, print_info, print_success, print_warning};
pub use progress::create_spinner;
