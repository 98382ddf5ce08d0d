#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating one line.
///
/// Every variant records the 1-based column of the token that triggered it,
/// which the session uses to place the caret under the offending character.
pub enum EvalError {
    /// An operand directly followed an operator.
    OperandAfterOperator {
        /// The column of the offending operand.
        column: usize,
    },
    /// Unary minus was applied to an empty stack.
    MissingOperand {
        /// The column of the `~` operator.
        column: usize,
    },
    /// A binary operator found fewer than two values on the stack.
    InsufficientOperands {
        /// The column of the operator.
        column: usize,
    },
    /// The right-hand operand of a division was zero.
    DivisionByZero {
        /// The column of the `/` operator.
        column: usize,
    },
    /// An assignment found nothing on the stack.
    NoValueToAssign {
        /// The column of the `=` operator.
        column: usize,
    },
    /// The token after `=` was neither a number nor an identifier.
    ExpectedVariableAfterAssign {
        /// The column of the token following `=`.
        column: usize,
    },
    /// A character that starts no known token.
    BadToken {
        /// The unrecognized character.
        token:  char,
        /// The column of the character.
        column: usize,
    },
    /// The line did not leave exactly one value on the stack.
    MalformedExpression {
        /// The column just past the end of the line.
        column: usize,
    },
}

impl EvalError {
    /// Returns the 1-based column the error points at.
    ///
    /// # Example
    /// ```
    /// use tally::error::EvalError;
    ///
    /// let err = EvalError::BadToken { token: '&', column: 3 };
    /// assert_eq!(err.column(), 3);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::OperandAfterOperator { column }
            | Self::MissingOperand { column }
            | Self::InsufficientOperands { column }
            | Self::DivisionByZero { column }
            | Self::NoValueToAssign { column }
            | Self::ExpectedVariableAfterAssign { column }
            | Self::BadToken { column, .. }
            | Self::MalformedExpression { column } => *column,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandAfterOperator { .. } => {
                write!(f, "Operand encountered after an operator")
            },
            Self::MissingOperand { .. } => write!(f, "No operand for unary minus"),
            Self::InsufficientOperands { .. } => {
                write!(f, "Too few operands for binary operator")
            },
            Self::DivisionByZero { .. } => write!(f, "Division by zero"),
            Self::NoValueToAssign { .. } => write!(f, "No value to assign"),
            Self::ExpectedVariableAfterAssign { .. } => write!(f, "Expected variable after '='"),
            Self::BadToken { token, .. } => write!(f, "Bad token: {token}"),
            Self::MalformedExpression { .. } => write!(f, "Malformed expression"),
        }
    }
}

impl std::error::Error for EvalError {}
