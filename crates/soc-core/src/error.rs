use thiserror::Error;

/// Top-level error type for the SOC console.
#[derive(Error, Debug)]
pub enum SocError {
    #[error("Configuration error: {0}")]
    Config(String),
}
