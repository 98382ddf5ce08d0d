use std::io::{BufRead, Write};

use log::debug;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult, LineState},
        lexer::Token,
        tokenizer::Tokenizer,
    },
    util::num::parse_literal,
};

impl Context {
    /// Evaluates an `=` operator.
    ///
    /// The value on top of the stack is popped and dropped. The token right
    /// after `=` must be a number or an identifier; its text is converted to
    /// a number, stored under the identifier referenced most recently on the
    /// line, pushed back on the stack, and becomes the line's target.
    ///
    /// So `x = 5` stores `5.0` into `x` and also into a variable named `5`
    /// once the line completes. An identifier after `=` (`x = y`) is
    /// converted as text and fails as a fatal invalid number; its value is
    /// never looked up.
    pub(super) fn apply_assign<R: BufRead, W: Write>(&mut self,
                                                      line: &mut LineState,
                                                      tokens: &mut Tokenizer<R, W>,
                                                      column: usize)
                                                      -> EvalResult<()> {
        if line.stack.pop().is_none() {
            return Err(EvalError::NoValueToAssign { column }.into());
        }

        let token = tokens.next_token()?;
        let column = tokens.column();
        let (Token::Number(text) | Token::Identifier(text)) = token else {
            return Err(EvalError::ExpectedVariableAfterAssign { column }.into());
        };

        let value = parse_literal(&text, column)?;
        debug!("{:?} <- {value}, target {text:?}", line.real_var);
        self.symbols.insert(line.real_var.clone(), value);
        line.stack.push(value);
        line.target = text;
        Ok(())
    }
}
