/// Line-level evaluation errors.
///
/// Defines every error that can abort the evaluation of a single input line,
/// such as a missing operand or a division by zero. These errors are always
/// recoverable: the session reports them with a caret diagnostic and moves on
/// to the next line.
pub mod eval_error;
/// Session-ending errors.
///
/// Contains the failures that cannot be recovered from by skipping a line:
/// I/O failures on the input or output streams and numeric literals that
/// cannot be converted to a floating-point value.
pub mod session_error;
/// Control signals that cut a line evaluation short.
///
/// Groups the recoverable and fatal errors together with the two ways a
/// session ends on purpose (`exit` and end of input), so every layer can
/// propagate them with `?`.
pub mod signal;

pub use eval_error::EvalError;
pub use session_error::SessionError;
pub use signal::{Halt, Interrupt};
