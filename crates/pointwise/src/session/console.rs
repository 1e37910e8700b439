//! Line-oriented prompts over a reader/writer pair.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::PointsError;

/// Why a state could not finish its work.
#[derive(Debug)]
pub enum InputError {
    /// Input closed while a value was expected.
    Eof,
    /// A token that does not parse as the requested value.
    Parse { what: &'static str, value: String },
    /// The operation rejected its input.
    Points(PointsError),
    Io(io::Error),
}

impl InputError {
    pub(crate) fn parse(what: &'static str, value: &str) -> Self {
        Self::Parse {
            what,
            value: value.trim().to_string(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "input ended"),
            Self::Parse { what, value } => write!(f, "'{value}' is not a valid {what}"),
            Self::Points(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "console error: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Points(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PointsError> for InputError {
    fn from(err: PointsError) -> Self {
        Self::Points(err)
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Prompts written to `output`, answers read line by line from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `prompt`, then read one line without its terminator.
    /// `None` once the input is exhausted. Invalid UTF-8 is replaced with
    /// U+FFFD and left for the caller's parser to reject.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like `ask`, but a closed input is an error and the answer is trimmed.
    pub fn ask_token(&mut self, prompt: &str) -> Result<String, InputError> {
        let line = self.ask(prompt)?.ok_or(InputError::Eof)?;
        Ok(line.trim().to_string())
    }

    /// Ask for a value of type `T`, described as `what` in errors.
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, what: &'static str) -> Result<T, InputError> {
        let token = self.ask_token(prompt)?;
        token.parse().map_err(|_| InputError::parse(what, &token))
    }
}
