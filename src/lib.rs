//! # tally
//!
//! tally is an interactive, line-oriented stack calculator written in Rust.
//! Each input line is tokenized and evaluated left to right on an operand
//! stack; variables persist across lines, and the last result is always
//! available as `it`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::SessionError,
    interpreter::{session::Session, tokenizer::Tokenizer},
};

/// Provides error and control signal types.
///
/// This module defines everything that can stop the evaluation of a line:
/// recoverable line errors carrying the failing column, fatal session errors,
/// and the deliberate session endings (`exit` and end of input).
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches columns for caret diagnostics.
/// - Supports propagation with `?` across the tokenizer, evaluator and
///   session.
pub mod error;
/// Orchestrates tokenizing, evaluation and the interactive loop.
///
/// This module ties together the lexer, tokenizer, evaluator and session
/// driver, and exposes the public API for evaluating input.
pub mod interpreter;
/// General utilities: numeric literal conversion and the logging backend.
pub mod util;

/// Runs a whole session over `source` and returns everything it printed.
///
/// The transcript includes a prompt before every line read, the value or
/// diagnostic for each line, and the farewell once `exit` is typed or the
/// input runs out.
///
/// # Errors
/// Returns an error if a numeric literal cannot be converted to a number.
///
/// # Examples
/// ```
/// use tally::get_transcript;
///
/// let transcript = get_transcript("3 4 +\n").unwrap();
/// assert_eq!(transcript, ">> 7.0\n>> \nBye\n");
///
/// let transcript = get_transcript("6 0 /\nexit\n").unwrap();
/// assert_eq!(transcript,
///            ">> Division by zero\n6 0 /\n    ^\nno value\n>> Bye\n");
/// ```
pub fn get_transcript(source: &str) -> Result<String, SessionError> {
    let mut output = Vec::new();
    Session::new(Tokenizer::new(source.as_bytes(), &mut output)).run()?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
