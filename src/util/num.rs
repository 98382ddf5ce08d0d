use crate::error::SessionError;

/// Converts numeric token text into an `f64`.
///
/// The text is handed to the standard float parser unchanged, so anything it
/// accepts is accepted here, including `1.` and `inf`.
///
/// # Errors
/// Returns [`SessionError::InvalidNumber`] carrying the text and its column if
/// the text is not a valid floating-point literal.
///
/// # Example
/// ```
/// use tally::{error::SessionError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("2.5", 1).unwrap(), 2.5);
///
/// let err = parse_literal("1.2.3", 4).unwrap_err();
/// assert!(matches!(err, SessionError::InvalidNumber { column: 4, .. }));
/// ```
pub fn parse_literal(text: &str, column: usize) -> Result<f64, SessionError> {
    text.parse().map_err(|_| SessionError::InvalidNumber { text: text.to_string(),
                                                           column })
}
