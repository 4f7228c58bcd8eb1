use tracing::{debug, info, trace};

use crate::{
    is_winning_move, line_to_text, Board, BoardType, Player, Position, RuleViolation, Token,
    TokenBag, TokensSet, WinRule, DEFAULT_NUMBER_OF_TOKENS,
};

/// Settings that stay fixed for the lifetime of a [`Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// The size of the token universe, between 1 and [`MAX_TOKENS`](crate::MAX_TOKENS).
    pub number_of_tokens: u8,
    pub win_rule: WinRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_tokens: DEFAULT_NUMBER_OF_TOKENS,
            win_rule: WinRule::default(),
        }
    }
}

/// Where a [`Game`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No game has been started yet.
    Unstarted,
    InProgress,
    Won { winner: Player },
    Drawn,
}

impl Phase {
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won { .. } | Phase::Drawn)
    }
}

/// Summarizes the outcome of a successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The game goes on with the other player.
    Continue,
    /// The placing player completed a winning line with the `moves`th placement.
    Win { winner: Player, moves: u32 },
    /// The last token was placed without anyone winning.
    Draw,
}

/// A single game, from `start` to its end, and any number of restarts.
///
/// The player whose turn it is selects a token with [`Self::select_token()`]
/// and then puts it on the board with [`Self::place()`]. Failed calls never
/// change the state.
#[derive(Clone, Debug)]
pub struct Game {
    config: Config,
    board: Board,
    bag: TokenBag,
    current_player: Player,
    /// The number of successful placements since the last reset.
    moves: u32,
    phase: Phase,
}

impl Game {
    /// Creates a game that still has to be started with [`Self::reset()`].
    ///
    /// Panics if the configured number of tokens is zero or exceeds
    /// [`MAX_TOKENS`](crate::MAX_TOKENS).
    pub fn new(config: Config) -> Self {
        Self {
            config,
            board: Board::default(),
            bag: TokenBag::new(config.number_of_tokens),
            current_player: Player::One,
            moves: 0,
            phase: Phase::Unstarted,
        }
    }

    /// Starts a fresh game on an empty board of the given topology.
    ///
    /// Allowed in every phase, including in the middle of a game.
    pub fn reset(&mut self, board_type: BoardType) {
        self.board.initialize(board_type);
        self.bag = TokenBag::new(self.config.number_of_tokens);
        self.current_player = Player::One;
        self.moves = 0;
        self.phase = Phase::InProgress;
        info!(%board_type, "new game started");
    }

    /// Selects the token that the current player will place next.
    pub fn select_token(&mut self, token: Token) -> Result<(), RuleViolation> {
        self.select_id(u32::from(token))
    }

    /// Like [`Self::select_token()`], for a token number as entered by a
    /// player, which may lie outside of the token universe.
    pub fn select_id(&mut self, id: u32) -> Result<(), RuleViolation> {
        self.ensure_in_progress()?;
        let token = self.bag.token(id)?;
        self.bag.take(token)?;
        debug!(player = %self.current_player, %token, "token selected");
        Ok(())
    }

    /// Places the selected token.
    ///
    /// The board and the bag are only touched once every check has passed.
    pub fn place(&mut self, position: Position) -> Result<PlaceOutcome, RuleViolation> {
        self.ensure_in_progress()?;
        let token = self.bag.selected().ok_or(RuleViolation::NoTokenSelected)?;
        let index = self.board.place(position, token, self.current_player)?;
        self.bag.mark_placed()?;
        self.moves += 1;
        debug!(
            player = %self.current_player,
            %token,
            %position,
            index,
            moves = self.moves,
            "token placed"
        );
        trace!(available = %self.bag.available_listing(), "bag after placement");

        if is_winning_move(&self.board, index, &self.config.win_rule) {
            let winner = self.current_player;
            self.phase = Phase::Won { winner };
            info!(%winner, moves = self.moves, "game won");
            Ok(PlaceOutcome::Win {
                winner,
                moves: self.moves,
            })
        } else if self.bag.is_exhausted() {
            self.phase = Phase::Drawn;
            info!(moves = self.moves, "game drawn");
            Ok(PlaceOutcome::Draw)
        } else {
            self.current_player = self.current_player.other();
            Ok(PlaceOutcome::Continue)
        }
    }

    /// All tokens that have not been placed, whether selected or not.
    pub fn available_tokens(&self) -> TokensSet {
        self.bag.available()
    }

    /// The row with the given index, see [`line_to_text`].
    pub fn row_as_text(&self, index: i32) -> Result<String, RuleViolation> {
        self.board.row_line(index).map(|line| line_to_text(&line))
    }

    /// The column with the given index, see [`line_to_text`].
    pub fn column_as_text(&self, index: i32) -> Result<String, RuleViolation> {
        self.board.column_line(index).map(|line| line_to_text(&line))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player who places the next token.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_type(&self) -> BoardType {
        self.board.board_type()
    }

    pub fn bag(&self) -> &TokenBag {
        &self.bag
    }

    fn ensure_in_progress(&self) -> Result<(), RuleViolation> {
        match self.phase {
            Phase::InProgress => Ok(()),
            Phase::Unstarted => Err(RuleViolation::GameNotStarted),
            Phase::Won { .. } | Phase::Drawn => Err(RuleViolation::GameOver),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
