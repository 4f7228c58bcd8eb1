use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    token_listing, BoardType, CommandError, Game, ParseError, PlaceOutcome, Player, Position,
    RuleViolation, Token,
};

/// Separates the command name from its argument.
const ARGUMENT_SEPARATOR: char = ' ';

/// The closed set of commands understood by the text interface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Select,
    Place,
    Bag,
    RowPrint,
    ColPrint,
    Board,
    Quit,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Start,
        Command::Select,
        Command::Place,
        Command::Bag,
        Command::RowPrint,
        Command::ColPrint,
        Command::Board,
        Command::Quit,
    ];

    /// The name under which the command is entered.
    pub fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Select => "select",
            Command::Place => "place",
            Command::Bag => "bag",
            Command::RowPrint => "rowprint",
            Command::ColPrint => "colprint",
            Command::Board => "board",
            Command::Quit => "quit",
        }
    }

    pub fn takes_argument(self) -> bool {
        match self {
            Command::Start
            | Command::Select
            | Command::Place
            | Command::RowPrint
            | Command::ColPrint => true,
            Command::Bag | Command::Board | Command::Quit => false,
        }
    }

    /// Turns the (already split off) argument into a typed request.
    pub fn parse_request(self, argument: Option<&str>) -> Result<Request, ParseError> {
        let argument = match (self.takes_argument(), argument) {
            (true, Some(argument)) => argument,
            (true, None) => return Err(ParseError::MissingArgument { command: self.name() }),
            (false, Some(_)) => return Err(ParseError::UnexpectedArgument { command: self.name() }),
            (false, None) => "",
        };
        let request = match self {
            Command::Start => Request::Start {
                board_type: argument.parse()?,
            },
            Command::Select => Request::Select {
                id: argument.parse().map_err(|_| ParseError::InvalidToken {
                    argument: String::from(argument),
                })?,
            },
            Command::Place => Request::Place {
                position: argument.parse()?,
            },
            Command::RowPrint => Request::RowPrint {
                index: parse_index(argument)?,
            },
            Command::ColPrint => Request::ColPrint {
                index: parse_index(argument)?,
            },
            Command::Bag => Request::Bag,
            Command::Board => Request::Board,
            Command::Quit => Request::Quit,
        };
        Ok(request)
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| ParseError::UnknownCommand {
                name: String::from(s),
            })
    }
}

fn parse_index(argument: &str) -> Result<i32, ParseError> {
    argument.parse().map_err(|_| ParseError::InvalidNumber {
        argument: String::from(argument),
    })
}

/// One parsed line of input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Start a new game. Responds with [`Response::Okay`].
    Start { board_type: BoardType },
    /// Select the token to place next, by its number. Whether the number
    /// belongs to a token of the game is checked on execution. Responds with
    /// [`Response::Okay`].
    Select { id: u32 },
    /// Place the selected token. Responds with [`Response::Okay`],
    /// [`Response::Win`] or [`Response::Draw`].
    Place { position: Position },
    /// List the tokens that have not been placed. Responds with [`Response::Tokens`].
    Bag,
    /// Responds with [`Response::Line`].
    RowPrint { index: i32 },
    /// Responds with [`Response::Line`].
    ColPrint { index: i32 },
    /// Draw the whole board. Responds with [`Response::Board`].
    Board,
    /// End the session. Responds with [`Response::Bye`].
    Quit,
}

impl FromStr for Request {
    type Err = ParseError;

    /// Parses `<command>` or `<command> <argument>`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match line.split_once(ARGUMENT_SEPARATOR) {
            Some((name, argument)) => (name, Some(argument)),
            None => (line, None),
        };
        name.parse::<Command>()?.parse_request(argument)
    }
}

impl Request {
    /// Runs the request against the game.
    pub fn execute(self, game: &mut Game) -> Result<Response, RuleViolation> {
        let response = match self {
            Request::Start { board_type } => {
                game.reset(board_type);
                Response::Okay
            }
            Request::Select { id } => {
                game.select_id(id)?;
                Response::Okay
            }
            Request::Place { position } => match game.place(position)? {
                PlaceOutcome::Continue => Response::Okay,
                PlaceOutcome::Win { winner, moves } => Response::Win { winner, moves },
                PlaceOutcome::Draw => Response::Draw,
            },
            Request::Bag => Response::Tokens {
                tokens: game.available_tokens().into_iter().collect(),
            },
            Request::RowPrint { index } => Response::Line {
                text: game.row_as_text(index)?,
            },
            Request::ColPrint { index } => Response::Line {
                text: game.column_as_text(index)?,
            },
            Request::Board => Response::Board {
                text: game.board().to_string(),
            },
            Request::Quit => Response::Bye,
        };
        Ok(response)
    }
}

/// The answer to a [`Request`].
///
/// The [`Display`](std::fmt::Display) instance gives the text that is shown
/// to players, the serde instances are meant for programs driving the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Okay,
    Win { winner: Player, moves: u32 },
    Draw,
    Tokens { tokens: Vec<Token> },
    Line { text: String },
    Board { text: String },
    Bye,
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Okay => write!(f, "OK"),
            Response::Win { winner, moves } => write!(f, "P{} wins\n{}", winner, moves),
            Response::Draw => write!(f, "draw"),
            Response::Tokens { tokens } => write!(f, "{}", token_listing(tokens.iter().copied())),
            Response::Line { text } | Response::Board { text } => write!(f, "{}", text),
            Response::Bye => Ok(()),
        }
    }
}

/// Parses and executes a single line of input.
///
/// ```
/// # use torus::{execute_line, Game};
/// let mut game = Game::default();
/// assert_eq!(execute_line("start torus", &mut game).unwrap().to_string(), "OK");
/// assert!(execute_line("select 99", &mut game).is_err());
/// ```
pub fn execute_line(line: &str, game: &mut Game) -> Result<Response, CommandError> {
    let request: Request = line.parse()?;
    Ok(request.execute(game)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(game: &mut Game, line: &str) -> String {
        match execute_line(line, game) {
            Ok(response) => response.to_string(),
            Err(err) => format!("Error, {}", err),
        }
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            "start standard".parse::<Request>(),
            Ok(Request::Start {
                board_type: BoardType::Standard
            })
        );
        assert_eq!("select 15".parse::<Request>(), Ok(Request::Select { id: 15 }));
        assert_eq!("select 256".parse::<Request>(), Ok(Request::Select { id: 256 }));
        assert_eq!(
            "place -1;7".parse::<Request>(),
            Ok(Request::Place {
                position: Position::new(-1, 7)
            })
        );
        assert_eq!("bag".parse::<Request>(), Ok(Request::Bag));
        assert_eq!("rowprint 3".parse::<Request>(), Ok(Request::RowPrint { index: 3 }));
        assert_eq!("colprint -2".parse::<Request>(), Ok(Request::ColPrint { index: -2 }));
        assert_eq!("quit".parse::<Request>(), Ok(Request::Quit));
    }

    #[test]
    fn parse_errors() {
        let cases = [
            ("", ParseError::UnknownCommand { name: String::from("") }),
            ("Start torus", ParseError::UnknownCommand { name: String::from("Start") }),
            ("start", ParseError::MissingArgument { command: "start" }),
            ("start cube", ParseError::UnknownBoardType { argument: String::from("cube") }),
            ("bag 1", ParseError::UnexpectedArgument { command: "bag" }),
            ("bag ", ParseError::UnexpectedArgument { command: "bag" }),
            ("select -1", ParseError::InvalidToken { argument: String::from("-1") }),
            ("select one", ParseError::InvalidToken { argument: String::from("one") }),
            ("select  1", ParseError::InvalidToken { argument: String::from(" 1") }),
            ("select +", ParseError::InvalidToken { argument: String::from("+") }),
            ("place 1", ParseError::InvalidCoordinates { argument: String::from("1") }),
            ("rowprint x", ParseError::InvalidNumber { argument: String::from("x") }),
        ];
        for (line, expected) in cases {
            assert_eq!(line.parse::<Request>(), Err(expected), "parsing {:?}", line);
        }
    }

    #[test]
    fn parse_errors_leave_the_game_alone() {
        let mut game = Game::default();
        run(&mut game, "start standard");
        run(&mut game, "select 2");
        assert!(matches!(
            execute_line("place 1;", &mut game),
            Err(CommandError::Parse(_))
        ));
        assert_eq!(game.bag().selected(), Some(Token::new(2)));
        assert!(matches!(
            execute_line("select 3", &mut game),
            Err(CommandError::Rule(RuleViolation::SelectionPending { .. }))
        ));
    }

    #[test]
    fn token_numbers_outside_the_universe_are_rule_violations() {
        let mut game = Game::default();
        run(&mut game, "start standard");
        for (line, id) in [("select 16", 16), ("select 255", 255), ("select 256", 256)] {
            assert_eq!(
                execute_line(line, &mut game),
                Err(CommandError::Rule(RuleViolation::TokenOutOfRange {
                    id,
                    number_of_tokens: 16
                })),
                "executing {:?}",
                line
            );
        }
        assert_eq!(
            run(&mut game, "select 256"),
            "Error, move not allowed: token 256 does not exist, tokens are numbered 0 to 15"
        );
        assert!(matches!(
            execute_line("select -16", &mut game),
            Err(CommandError::Parse(ParseError::InvalidToken { .. }))
        ));
        assert_eq!(game.bag().selected(), None);
    }

    #[test]
    fn winning_session() {
        let mut game = Game::default();
        let transcript = [
            ("start standard", "OK"),
            ("select 0", "OK"),
            ("place 0;0", "OK"),
            ("select 2", "OK"),
            ("place 0;1", "OK"),
            ("rowprint 0", "0 2 # # # #"),
            ("select 4", "OK"),
            ("place 0;2", "OK"),
            ("bag", "1 3 5 6 7 8 9 10 11 12 13 14 15"),
            ("select 6", "OK"),
            ("place 0;3", "P2 wins\n4"),
            ("select 7", "Error, move not allowed: the game is over, start a new one"),
            ("rowprint 0", "0 2 4 6 # #"),
            ("start torus", "OK"),
            ("bag", "0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15"),
        ];
        for (line, expected) in transcript {
            assert_eq!(run(&mut game, line), expected, "after {:?}", line);
        }
    }

    #[test]
    fn torus_column_wraps() {
        let mut game = Game::default();
        let transcript = [
            ("start torus", "OK"),
            ("colprint 0", "# # # # # #"),
            ("select 5", "OK"),
            ("place 1;6", "OK"),
            ("colprint 0", "# 5 # # # #"),
            ("colprint 6", "# 5 # # # #"),
            ("rowprint -5", "5 # # # # #"),
            ("select 6", "OK"),
            ("place 7;0", "Error, move not allowed: field 1;0 is already occupied by token 5"),
        ];
        for (line, expected) in transcript {
            assert_eq!(run(&mut game, line), expected, "after {:?}", line);
        }
    }

    #[test]
    fn standard_rejects_outside() {
        let mut game = Game::default();
        run(&mut game, "start standard");
        run(&mut game, "select 1");
        assert_eq!(
            run(&mut game, "place 0;6"),
            "Error, move not allowed: position 0;6 is outside of the board"
        );
        assert_eq!(
            run(&mut game, "colprint 6"),
            "Error, move not allowed: there is no line with index 6"
        );
        assert_eq!(run(&mut game, "place 0;5"), "OK");
    }

    #[test]
    fn json_shapes() {
        let win = Response::Win {
            winner: Player::One,
            moves: 7,
        };
        assert_eq!(
            serde_json::to_string(&win).unwrap(),
            r#"{"type":"Win","winner":"P1","moves":7}"#
        );
        assert_eq!(
            serde_json::to_string(&Response::Tokens {
                tokens: vec![Token::new(1), Token::new(4)]
            })
            .unwrap(),
            r#"{"type":"Tokens","tokens":[1,4]}"#
        );
        let request: Request =
            serde_json::from_str(r#"{"type":"Place","position":{"row":2,"col":-1}}"#).unwrap();
        assert_eq!(
            request,
            Request::Place {
                position: Position::new(2, -1)
            }
        );
        let request: Request =
            serde_json::from_str(r#"{"type":"Start","board_type":"torus"}"#).unwrap();
        assert_eq!(
            request,
            Request::Start {
                board_type: BoardType::Torus
            }
        );
    }
}
