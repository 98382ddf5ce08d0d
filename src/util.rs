/// Numeric literal conversion.
///
/// Converts token text into `f64` values, turning malformed text into a
/// session error that records where the text started.
pub mod num;
/// Logging backend.
///
/// A minimal `log` implementation that writes records to standard error so
/// that standard output only ever carries the session transcript.
pub mod logger;
