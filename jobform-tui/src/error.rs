//! Front-end error types

/// Errors surfaced by the terminal front end.
///
/// Validation failures never appear here; they render inline beside the
/// offending field. This covers the terminal itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
