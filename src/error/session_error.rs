#[derive(Debug)]
/// Represents the errors that terminate a session abnormally.
pub enum SessionError {
    /// Reading a line or writing output failed.
    Io(std::io::Error),
    /// Numeric text could not be converted to a floating-point value.
    ///
    /// The tokenizer accepts any run of digits and dots (`1.2.3`), and an
    /// assignment re-reads the token after `=` as a number even when it is
    /// an identifier. Both end the session here.
    InvalidNumber {
        /// The text that failed to parse.
        text:   String,
        /// The column where the text starts.
        column: usize,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidNumber { text, column } => {
                write!(f, "Column {column}: '{text}' is not a valid number.")
            },
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidNumber { .. } => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
