//! Result type alias for feedmill
//!
//! A convenience alias using [`FeedmillError`] as the error type; use it for
//! every fallible operation below the CLI boundary.

use super::errors::FeedmillError;

/// Result type alias for feedmill operations
///
/// # Examples
///
/// ```
/// use feedmill::domain::result::Result;
/// use feedmill::domain::errors::FeedmillError;
///
/// fn parse_limit(raw: &str) -> Result<usize> {
///     raw.parse()
///         .map_err(|_| FeedmillError::Validation(format!("bad limit: {raw}")))
/// }
///
/// assert!(parse_limit("10").is_ok());
/// assert!(parse_limit("ten").is_err());
/// ```
pub type Result<T> = std::result::Result<T, FeedmillError>;
