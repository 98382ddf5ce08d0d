/// Core evaluation logic and context management.
///
/// Contains the line-level stack machine, the persistent symbol table and the
/// rules for interleaving operands and operators.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*` and `/` to the two topmost stack values.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation (`~`).
pub mod unary;

/// Assignment evaluation.
///
/// Handles the `=` operator, which reads the token that follows it and
/// stores that token's text as a number.
pub mod assign;
