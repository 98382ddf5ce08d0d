use crate::error::{EvalError, SessionError};

/// The two deliberate ways a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The user typed the `exit` identifier.
    Exit,
    /// The input stream has no more lines.
    EndOfInput,
}

/// Anything that stops the evaluation of the current line before it yields a
/// value.
#[derive(Debug)]
pub enum Interrupt {
    /// The line was malformed; the session reports it and continues.
    Failed(EvalError),
    /// The session should end normally.
    Halt(Halt),
    /// The session cannot continue.
    Fatal(SessionError),
}

impl From<EvalError> for Interrupt {
    fn from(e: EvalError) -> Self {
        Self::Failed(e)
    }
}

impl From<Halt> for Interrupt {
    fn from(h: Halt) -> Self {
        Self::Halt(h)
    }
}

impl From<SessionError> for Interrupt {
    fn from(e: SessionError) -> Self {
        Self::Fatal(e)
    }
}

impl From<std::io::Error> for Interrupt {
    fn from(e: std::io::Error) -> Self {
        Self::Fatal(SessionError::Io(e))
    }
}
