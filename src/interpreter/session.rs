use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{
    error::{EvalError, Halt, Interrupt, SessionError},
    interpreter::{evaluator::core::Context, tokenizer::Tokenizer},
};

/// Printed in place of a value when a line fails.
pub const NO_VALUE: &str = "no value";
/// Printed when the session ends.
pub const FAREWELL: &str = "Bye";

/// A read-eval-print session.
///
/// Owns the tokenizer (and through it the input and output streams) and the
/// evaluation context whose symbol table persists from line to line.
pub struct Session<R, W> {
    tokenizer: Tokenizer<R, W>,
    context:   Context,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty symbol table.
    pub fn new(tokenizer: Tokenizer<R, W>) -> Self {
        Self { tokenizer,
               context: Context::new() }
    }

    /// Returns the evaluation context.
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Runs lines until `exit` or end of input.
    ///
    /// # Errors
    /// Returns a [`SessionError`] if an I/O operation fails or a numeric
    /// literal cannot be converted.
    pub fn run(&mut self) -> Result<Halt, SessionError> {
        loop {
            if let Some(halt) = self.step()? {
                info!("session ended: {halt:?}");
                return Ok(halt);
            }
        }
    }

    /// Evaluates one line and prints its value or diagnostic.
    ///
    /// Returns `Some` when the session has ended, after printing the
    /// farewell.
    ///
    /// # Errors
    /// Returns a [`SessionError`] if an I/O operation fails or a numeric
    /// literal cannot be converted.
    pub fn step(&mut self) -> Result<Option<Halt>, SessionError> {
        match self.context.evaluate_line(&mut self.tokenizer) {
            Ok(value) => {
                writeln!(self.tokenizer.writer(), "{value:?}")?;
                Ok(None)
            },
            Err(Interrupt::Failed(e)) => {
                self.report(&e)?;
                writeln!(self.tokenizer.writer(), "{NO_VALUE}")?;
                Ok(None)
            },
            Err(Interrupt::Halt(halt)) => {
                self.farewell(halt)?;
                Ok(Some(halt))
            },
            Err(Interrupt::Fatal(e)) => Err(e),
        }
    }

    /// Prints the error message, the offending line and a caret under the
    /// failing column, then discards the rest of the line.
    fn report(&mut self, error: &EvalError) -> io::Result<()> {
        debug!("line failed: {error:?}");
        let line = self.tokenizer.current_line().to_string();
        let padding = " ".repeat(error.column().saturating_sub(1));

        let out = self.tokenizer.writer();
        writeln!(out, "{error}")?;
        writeln!(out, "{line}")?;
        writeln!(out, "{padding}^")?;

        self.tokenizer.flush();
        Ok(())
    }

    fn farewell(&mut self, halt: Halt) -> io::Result<()> {
        let out = self.tokenizer.writer();
        match halt {
            Halt::Exit => writeln!(out, "{FAREWELL}")?,
            // The prompt for the missing line is still pending.
            Halt::EndOfInput => writeln!(out, "\n{FAREWELL}")?,
        }
        out.flush()
    }
}
