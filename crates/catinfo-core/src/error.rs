//! Error types for Cat Info

use thiserror::Error;

/// Main error type for Cat Info operations.
///
/// Page transitions never fail; these cover parsing identifiers that arrive
/// as strings (routes, CLI) and validating a [`crate::PageConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatInfoError {
    /// String did not name one of the three content panels
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// String did not name a theme mode
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Page configuration rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for Cat Info operations
pub type Result<T> = std::result::Result<T, CatInfoError>;
