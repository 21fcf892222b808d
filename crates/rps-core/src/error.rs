//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `RpsError` as one variant
//! via `#[from]`, so core validation failures flow through `?` unchanged.

use thiserror::Error;

/// Errors raised while validating a run's configuration.
#[derive(Debug, Error)]
pub enum RpsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("arena {width}x{height} cannot hold a sprite of size {size} inside its walls")]
    ArenaTooSmall {
        width:  u32,
        height: u32,
        size:   u32,
    },
}

/// Shorthand result type for all `rps-*` crates.
pub type RpsResult<T> = Result<T, RpsError>;
