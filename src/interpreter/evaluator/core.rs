use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use log::debug;

use crate::{
    error::{EvalError, Halt, Interrupt},
    interpreter::{
        lexer::{Operator, Token},
        tokenizer::Tokenizer,
    },
    util::num::parse_literal,
};

/// Result type used by the evaluator.
///
/// A line evaluation either yields a value of type `T` or is cut short by an
/// [`Interrupt`]: a recoverable error, a request to end the session, or a
/// fatal failure.
pub type EvalResult<T> = Result<T, Interrupt>;

/// Variable receiving a line's result when the line makes no assignment.
pub const IMPLICIT_TARGET: &str = "it";
/// Identifier that ends the session.
pub const EXIT_COMMAND: &str = "exit";

/// Stores the session-wide evaluation context.
///
/// The only state that survives from one line to the next is the symbol
/// table. The operand stack and the assignment target live in a per-line
/// [`LineState`] created by [`Context::evaluate_line`].
#[derive(Debug, Default)]
pub struct Context {
    /// Variable values by name. Entries are created on first reference with
    /// the value `0.0` and are never removed.
    pub symbols: HashMap<String, f64>,
}

/// Evaluation state scoped to a single line.
pub(super) struct LineState {
    /// Operand stack; the last element is the top.
    pub stack:             Vec<f64>,
    /// Variable that receives the line's result.
    pub target:            String,
    /// The identifier referenced most recently on this line.
    pub real_var:          String,
    /// Whether the previous token was an operator.
    pub last_was_operator: bool,
}

impl LineState {
    fn new() -> Self {
        Self { stack:             Vec::new(),
               target:            IMPLICIT_TARGET.to_string(),
               real_var:          String::new(),
               last_was_operator: false, }
    }

    /// Rejects an operand that directly follows an operator.
    const fn expect_operand(&self, column: usize) -> Result<(), EvalError> {
        if self.last_was_operator {
            return Err(EvalError::OperandAfterOperator { column });
        }
        Ok(())
    }
}

impl Context {
    /// Creates a context with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a variable, if it has been referenced or
    /// assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.symbols.get(name).copied()
    }

    /// Returns the full symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &HashMap<String, f64> {
        &self.symbols
    }

    /// Evaluates exactly one line of input.
    ///
    /// Tokens are consumed left to right until the end of the line. Numbers
    /// and variables are pushed on the stack; operators pop their operands
    /// and push the result. When the line ends, exactly one value must be
    /// left: it is stored into the line's target (`it` unless an assignment
    /// changed it) and returned.
    ///
    /// # Errors
    /// - [`Interrupt::Failed`] for malformed input. The rest of the line is
    ///   left unread; the caller is expected to report and flush it.
    /// - [`Interrupt::Halt`] on `exit` or when the input is exhausted.
    /// - [`Interrupt::Fatal`] on I/O errors or unparseable numeric text.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::core::Context, tokenizer::Tokenizer};
    ///
    /// let mut out = Vec::new();
    /// let mut tokens = Tokenizer::new("10 3 -\nit\n".as_bytes(), &mut out);
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.evaluate_line(&mut tokens).unwrap(), 7.0);
    /// assert_eq!(context.evaluate_line(&mut tokens).unwrap(), 7.0);
    /// assert_eq!(context.get("it"), Some(7.0));
    /// ```
    pub fn evaluate_line<R: BufRead, W: Write>(&mut self,
                                               tokens: &mut Tokenizer<R, W>)
                                               -> EvalResult<f64> {
        let mut line = LineState::new();

        loop {
            let token = tokens.next_token()?;
            let column = tokens.column();

            match token {
                Token::EndOfLine => break,
                Token::Number(text) => {
                    line.expect_operand(column)?;
                    line.stack.push(parse_literal(&text, column)?);
                    line.last_was_operator = false;
                },
                Token::Identifier(name) => {
                    line.expect_operand(column)?;
                    if name == EXIT_COMMAND {
                        return Err(Halt::Exit.into());
                    }
                    let value = self.lookup(&name);
                    line.stack.push(value);
                    line.real_var = name;
                    line.last_was_operator = false;
                },
                Token::Operator(Operator::UnaryMinus) => {
                    Self::apply_negate(&mut line.stack, column)?;
                    line.last_was_operator = true;
                },
                Token::Operator(Operator::Binary(op)) => {
                    Self::apply_binary(op, &mut line.stack, column)?;
                    line.last_was_operator = true;
                },
                Token::Operator(Operator::Assign) => self.apply_assign(&mut line, tokens, column)?,
                Token::Invalid(token) => return Err(EvalError::BadToken { token, column }.into()),
            }
        }

        let [result] = *line.stack.as_slice() else {
            return Err(EvalError::MalformedExpression { column: tokens.column() }.into());
        };

        debug!("{} <- {result}", line.target);
        self.symbols.insert(line.target, result);
        Ok(result)
    }

    /// Returns the value of `name`, creating it with `0.0` if it is unknown.
    fn lookup(&mut self, name: &str) -> f64 {
        *self.symbols.entry(name.to_string()).or_insert(0.0)
    }
}
