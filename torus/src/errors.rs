use crate::{Position, Token};

/// The error type for every engine operation, i.e. for a move that the rules forbid.
///
/// The game state is left untouched whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleViolation {
    TokenOutOfRange { id: u32, number_of_tokens: u8 },
    TokenAlreadyPlaced { token: Token },
    TokenAlreadySelected { token: Token },
    SelectionPending { pending: Token },
    NoTokenSelected,
    CellOccupied { row: i32, col: i32, existing: Token },
    OutOfBounds { position: Position },
    LineOutOfBounds { index: i32 },
    GameNotStarted,
    GameOver,
}

impl std::error::Error for RuleViolation {}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleViolation::TokenOutOfRange {
                id,
                number_of_tokens,
            } => write!(
                f,
                "token {} does not exist, tokens are numbered 0 to {}",
                id,
                number_of_tokens.saturating_sub(1)
            ),
            RuleViolation::TokenAlreadyPlaced { token } => {
                write!(f, "token {} has already been placed", token)
            }
            RuleViolation::TokenAlreadySelected { token } => {
                write!(f, "token {} is already selected", token)
            }
            RuleViolation::SelectionPending { pending } => write!(
                f,
                "token {} was selected but has not been placed yet",
                pending
            ),
            RuleViolation::NoTokenSelected => write!(f, "no token has been selected"),
            RuleViolation::CellOccupied { row, col, existing } => write!(
                f,
                "field {};{} is already occupied by token {}",
                row, col, existing
            ),
            RuleViolation::OutOfBounds { position } => {
                write!(f, "position {} is outside of the board", position)
            }
            RuleViolation::LineOutOfBounds { index } => {
                write!(f, "there is no line with index {}", index)
            }
            RuleViolation::GameNotStarted => write!(f, "no game has been started"),
            RuleViolation::GameOver => write!(f, "the game is over, start a new one"),
        }
    }
}

/// The error type for turning a line of text into a [`Request`](crate::Request).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand { name: String },
    MissingArgument { command: &'static str },
    UnexpectedArgument { command: &'static str },
    InvalidNumber { argument: String },
    InvalidToken { argument: String },
    InvalidCoordinates { argument: String },
    UnknownBoardType { argument: String },
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnknownCommand { name } => write!(f, "no command named '{}'", name),
            ParseError::MissingArgument { command } => {
                write!(f, "command '{}' expects an argument", command)
            }
            ParseError::UnexpectedArgument { command } => {
                write!(f, "command '{}' takes no argument", command)
            }
            ParseError::InvalidNumber { argument } => {
                write!(f, "could not parse '{}' as a number", argument)
            }
            ParseError::InvalidToken { argument } => {
                write!(f, "'{}' does not describe a token", argument)
            }
            ParseError::InvalidCoordinates { argument } => write!(
                f,
                "expected coordinates of the form <row>;<column>, got '{}'",
                argument
            ),
            ParseError::UnknownBoardType { argument } => write!(
                f,
                "unknown board type '{}', expected 'standard' or 'torus'",
                argument
            ),
        }
    }
}

/// The error type for executing one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    Parse(ParseError),
    Rule(RuleViolation),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Parse(err) => Some(err),
            CommandError::Rule(err) => Some(err),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Parse(err) => write!(f, "invalid input: {}", err),
            CommandError::Rule(err) => write!(f, "move not allowed: {}", err),
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(err: ParseError) -> Self {
        CommandError::Parse(err)
    }
}

impl From<RuleViolation> for CommandError {
    fn from(err: RuleViolation) -> Self {
        CommandError::Rule(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn command_error_exposes_source() {
        let err = CommandError::from(RuleViolation::NoTokenSelected);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("no token has been selected"));
        assert!(matches!(
            CommandError::from(ParseError::MissingArgument { command: "select" }),
            CommandError::Parse(_)
        ));
    }

    #[test]
    fn token_range_message() {
        let err = RuleViolation::TokenOutOfRange {
            id: 300,
            number_of_tokens: 16,
        };
        assert_eq!(
            err.to_string(),
            "token 300 does not exist, tokens are numbered 0 to 15"
        );
    }
}
