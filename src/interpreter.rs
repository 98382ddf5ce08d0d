/// The evaluator module executes a line of tokens on an operand stack.
///
/// The evaluator consumes tokens left to right, pushes operands, applies
/// operators to the values already on the stack, and stores each line's
/// result in a persistent symbol table.
///
/// # Responsibilities
/// - Enforces the operand/operator interleaving rules.
/// - Maintains variables across lines, including the implicit `it`.
/// - Reports errors such as division by zero with the failing column.
pub mod evaluator;
/// The lexer module classifies token shapes.
///
/// Declares the token types handed to the evaluator and the `logos` lexer
/// that recognizes numbers, identifiers and operators within a line.
pub mod lexer;
/// The session module drives the read-eval-print loop.
///
/// Prints each line's value, or a caret diagnostic followed by `no value`,
/// and ends the loop on `exit` or at the end of input.
pub mod session;
/// The tokenizer module reads input lines and hands out tokens.
///
/// # Responsibilities
/// - Writes the prompt before each physical read.
/// - Tracks the column of every token for diagnostics.
/// - Supports a one-token pushback and discarding the rest of a line.
pub mod tokenizer;
