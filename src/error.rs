//! Isolation engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

use crate::notation::ParseNotationError;

/// Isolation engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the isolation engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A move was applied to a board where it is not legal.
    IllegalMove,
    /// Board dimensions exceed the supported cell count.
    BoardTooLarge,
    /// Board dimensions contain a zero width or height.
    BoardEmpty,

    /// Coord parse string malformed.
    ParseCoordMalformed,
    /// Player parse string malformed.
    ParsePlayerMalformed,
    /// Board notation error kinds.
    Notation,

    /// A move in a game's move history could not be applied to its position.
    GameIllegalMove,
    /// The engine can only play games with a finite static number of moves.
    /// That limit has been exceeded.
    MoveHistoryExceeded,

    /// Engine is currently searching, so another search cannot be started.
    EngineAlreadySearching,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::IllegalMove => "illegal move",
            ErrorKind::BoardTooLarge => "board too large",
            ErrorKind::BoardEmpty => "board has zero dimension",

            ErrorKind::ParseCoordMalformed => "parse coord malformed",
            ErrorKind::ParsePlayerMalformed => "parse player malformed",
            ErrorKind::Notation => "notation",

            ErrorKind::GameIllegalMove => "game history illegal move",
            ErrorKind::MoveHistoryExceeded => "move history exceeded",

            ErrorKind::EngineAlreadySearching => "engine already searching",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the isolation engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl From<ParseNotationError> for Error {
    fn from(error: ParseNotationError) -> Self {
        Self::Custom(ErrorKind::Notation, error.into())
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
