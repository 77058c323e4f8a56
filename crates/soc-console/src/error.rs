//! Error types for the soc-console crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Store error: {0}")]
    Store(#[from] soc_store::StoreError),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
