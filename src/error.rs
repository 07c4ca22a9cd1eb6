use thiserror::Error;

/// Malformed wire content found while decoding a stored session.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid table size token {0:?}")]
    InvalidSize(String),
    #[error("table size must be positive")]
    NonPositiveSize,
    #[error("table size {0} is too large to decode")]
    SizeTooLarge(usize),
    #[error("truncated session payload: expected {expected} cell tokens, found {found}")]
    Truncated { expected: usize, found: usize },
}

/// Failure on the session load/save path.
///
/// Callers only see which operation failed; the concrete cause is kept as
/// `source` for logs and diagnostics.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Loading failed")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Saving failed")]
    Save(#[source] Box<dyn std::error::Error + Send + Sync>),
}
