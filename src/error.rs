use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("error reading file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReadError::NotFound(_))
    }
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}

impl From<ParseError> for PuzzleFromFileError {
    fn from(e: ParseError) -> Self {
        PuzzleFromFileError::Parse(e.into())
    }
}

impl From<InvalidPuzzle> for PuzzleFromFileError {
    fn from(e: InvalidPuzzle) -> Self {
        PuzzleFromFileError::Parse(e.into())
    }
}

pub const UNEXPECTED_END: ParseError = ParseError::from_type(ParseErrorType::UnexpectedEnd);

#[derive(Debug, Error)]
pub enum ParsePuzzleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseErrorType,
    token: Option<String>,
    line: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParseErrorType, token: impl Display, line: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            line: Some(line),
        }
    }

    pub(crate) const fn from_type(error_type: ParseErrorType) -> Self {
        Self {
            error_type,
            token: None,
            line: None,
        }
    }

    pub(crate) fn at_line(error_type: ParseErrorType, line: usize) -> Self {
        Self {
            error_type,
            token: None,
            line: Some(line),
        }
    }

    pub fn error_type(&self) -> ParseErrorType {
        self.error_type
    }

    /// The 1-based line of the input where the error was found
    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseErrorType {
    InvalidCageId,
    InvalidCageTarget,
    InvalidCategory,
    InvalidCell,
    InvalidOperator,
    InvalidPattern,
    InvalidSize,
    InvalidToken,
    InvalidWord,
    RaggedGrid,
    SizeTooBig,
    UnexpectedEnd,
    UnexpectedToken,
    WrongWordCount,
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorType::InvalidCageId => "Invalid cage ID",
            ParseErrorType::InvalidCageTarget => "Invalid cage target",
            ParseErrorType::InvalidCategory => "Invalid category",
            ParseErrorType::InvalidCell => "Invalid cell",
            ParseErrorType::InvalidOperator => "Invalid operator",
            ParseErrorType::InvalidPattern => "Invalid feedback pattern",
            ParseErrorType::InvalidSize => "Invalid puzzle size",
            ParseErrorType::InvalidToken => "Invalid token",
            ParseErrorType::InvalidWord => "Invalid word",
            ParseErrorType::RaggedGrid => "Grid rows have different lengths",
            ParseErrorType::SizeTooBig => "Puzzle size too big",
            ParseErrorType::UnexpectedEnd => "Unexpected end",
            ParseErrorType::UnexpectedToken => "Unexpected token",
            ParseErrorType::WrongWordCount => "Wrong number of words",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(line) = &self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ParseError, ParseErrorType};

    #[test]
    fn display_parse_error() {
        let error = ParseError::new(ParseErrorType::InvalidCageId, 'a', 3);
        assert_eq!("Invalid cage ID: \"a\" at line 3", error.to_string());
        assert_eq!("Unexpected end", ParseError::from_type(ParseErrorType::UnexpectedEnd).to_string());
    }
}
