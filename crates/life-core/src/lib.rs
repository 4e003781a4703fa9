//! Core types and configuration for the toroidal Game of Life workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::{Error, Result};
pub use types::*;
