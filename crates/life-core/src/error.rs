//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid grid dimension {0}: must be at least 1")]
    InvalidDimension(i32),

    #[error("configuration error: {0}")]
    Config(String),
}
