use logos::Logos;

/// The operators that combine the two topmost stack values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

/// The operators recognized on an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`, `-`, `*` or `/`.
    Binary(BinaryOperator),
    /// `~`
    UnaryMinus,
    /// `=`
    Assign,
}

impl Operator {
    /// Returns the character the operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Binary(BinaryOperator::Add) => '+',
            Self::Binary(BinaryOperator::Subtract) => '-',
            Self::Binary(BinaryOperator::Multiply) => '*',
            Self::Binary(BinaryOperator::Divide) => '/',
            Self::UnaryMinus => '~',
            Self::Assign => '=',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Operator::Binary(*self).symbol())
    }
}

/// A token handed to the evaluator.
///
/// Numbers keep their source text; conversion to `f64` happens when the
/// evaluator pushes them, so that malformed text such as `1.2.3` is reported
/// by the evaluator with its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Numeric literal text, such as `42` or `3.14`.
    Number(String),
    /// Variable name, such as `x` or `it`.
    Identifier(String),
    /// One of the single-character operators.
    Operator(Operator),
    /// The end of the current line.
    EndOfLine,
    /// A character that starts no known token.
    Invalid(char),
}

/// The token shapes recognized within a line.
///
/// This is the raw classification produced by the `logos` lexer. Blanks are
/// skipped, and anything unmatched comes back as a lexer error which the
/// tokenizer turns into [`Token::Invalid`]. Line ends never reach the lexer.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
pub enum Lexeme {
    /// A digit followed by any run of digits and dots. Multiple dots are
    /// accepted here and rejected when the text is converted.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Single-character operators.
    #[token("+", |_| Operator::Binary(BinaryOperator::Add))]
    #[token("-", |_| Operator::Binary(BinaryOperator::Subtract))]
    #[token("*", |_| Operator::Binary(BinaryOperator::Multiply))]
    #[token("/", |_| Operator::Binary(BinaryOperator::Divide))]
    #[token("~", |_| Operator::UnaryMinus)]
    #[token("=", |_| Operator::Assign)]
    Operator(Operator),
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(text) => Self::Number(text),
            Lexeme::Identifier(name) => Self::Identifier(name),
            Lexeme::Operator(op) => Self::Operator(op),
        }
    }
}
