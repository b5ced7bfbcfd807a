//! # Store Error Types
//!
//! Mutations on the store never fail. The only fallible step is building
//! the initial state from a seed file at startup.
//!
//! ## Error Flow
//! ```text
//! seed.json ──read──► StoreError::SeedLoad   (missing file, permissions)
//!           ──parse─► StoreError::SeedParse  (malformed JSON, bad enum)
//!                          │
//!                          ▼
//!                 server startup aborts with a logged error
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    SeedLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid seed JSON.
    #[error("Invalid seed data: {0}")]
    SeedParse(#[from] serde_json::Error),
}

/// Result type for store construction.
pub type StoreResult<T> = Result<T, StoreError>;
