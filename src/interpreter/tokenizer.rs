use std::io::{BufRead, Write};

use log::{debug, trace};
use logos::Logos;

use crate::{
    error::{Halt, Interrupt},
    interpreter::lexer::{Lexeme, Token},
};

/// Prompt written before every physical read.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Pulls tokens out of an input stream one line at a time.
///
/// The tokenizer keeps the current line in a buffer together with a byte
/// cursor. A new line is read (after writing the prompt) only when the
/// previous one has been fully consumed, i.e. after [`Token::EndOfLine`] was
/// returned or after [`Tokenizer::flush`].
///
/// # Example
/// ```
/// use tally::interpreter::{
///     lexer::{BinaryOperator, Operator, Token},
///     tokenizer::Tokenizer,
/// };
///
/// let mut out = Vec::new();
/// let mut tokens = Tokenizer::new("x1 + 2.5\n".as_bytes(), &mut out);
///
/// assert_eq!(tokens.next_token().unwrap(), Token::Identifier("x1".to_string()));
/// assert_eq!(tokens.next_token().unwrap(),
///            Token::Operator(Operator::Binary(BinaryOperator::Add)));
/// assert_eq!(tokens.next_token().unwrap(), Token::Number("2.5".to_string()));
/// assert_eq!(tokens.column(), 6);
/// assert_eq!(tokens.next_token().unwrap(), Token::EndOfLine);
/// ```
pub struct Tokenizer<R, W> {
    input:      R,
    output:     W,
    prompt:     String,
    line:       String,
    cursor:     usize,
    start:      usize,
    needs_line: bool,
    can_unread: bool,
}

impl<R: BufRead, W: Write> Tokenizer<R, W> {
    /// Creates a tokenizer reading from `input` and writing prompts to
    /// `output`. No line is read until the first token is requested.
    pub fn new(input: R, output: W) -> Self {
        Self { input,
               output,
               prompt: DEFAULT_PROMPT.to_string(),
               line: String::new(),
               cursor: 0,
               start: 0,
               needs_line: true,
               can_unread: false }
    }

    /// Replaces the prompt written before each read.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the next token on the current line, reading a new line first
    /// if the current one is exhausted.
    ///
    /// # Errors
    /// - [`Halt::EndOfInput`] when the input stream has no more lines.
    /// - A fatal I/O error if reading or writing the prompt fails.
    pub fn next_token(&mut self) -> Result<Token, Interrupt> {
        if self.needs_line {
            self.read_line()?;
        }

        let mut lexer = Lexeme::lexer(&self.line[self.cursor..]);
        let token = match lexer.next() {
            None => {
                self.start = self.line.len();
                self.cursor = self.line.len();
                self.needs_line = true;
                Token::EndOfLine
            },
            Some(Ok(lexeme)) => {
                let span = lexer.span();
                self.start = self.cursor + span.start;
                self.cursor += span.end;
                lexeme.into()
            },
            Some(Err(())) => {
                let offset = self.cursor + lexer.span().start;
                let ch = self.line[offset..].chars()
                                            .next()
                                            .unwrap_or(char::REPLACEMENT_CHARACTER);
                self.start = offset;
                self.cursor = (offset + ch.len_utf8()).min(self.line.len());
                Token::Invalid(ch)
            },
        };

        self.can_unread = true;
        trace!("token {token:?} at column {}", self.column());
        Ok(token)
    }

    /// Pushes the last token back so the next call returns it again.
    ///
    /// Only one token can be pushed back, and only on the line it was read
    /// from; further calls have no effect.
    pub fn unread(&mut self) {
        if self.can_unread {
            self.cursor = self.start;
            self.needs_line = false;
            self.can_unread = false;
        }
    }

    /// Returns the 1-based column where the last token starts.
    ///
    /// For [`Token::EndOfLine`] this is one past the last character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.line[..self.start].chars().count() + 1
    }

    /// Returns the line currently being tokenized, without its terminator.
    #[must_use]
    pub fn current_line(&self) -> &str {
        &self.line
    }

    /// Discards the rest of the current line.
    pub fn flush(&mut self) {
        self.cursor = self.line.len();
        self.needs_line = true;
        self.can_unread = false;
    }

    /// Returns the output stream prompts are written to.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_line(&mut self) -> Result<(), Interrupt> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            debug!("input exhausted");
            return Err(Halt::EndOfInput.into());
        }
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        // Malformed UTF-8 becomes U+FFFD and is reported as a bad token.
        let line = String::from_utf8_lossy(&bytes).into_owned();
        debug!("read line {line:?}");

        self.line = line;
        self.cursor = 0;
        self.start = 0;
        self.needs_line = false;
        self.can_unread = false;
        Ok(())
    }
}
