use tracing::trace;

use crate::{token_listing, RuleViolation, Token, TokensSet, MAX_TOKENS};

/// The shared supply of tokens.
///
/// Every token of the universe is in exactly one of three states: available,
/// selected (at most one token at a time), or placed. Placed tokens never
/// become available again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBag {
    number_of_tokens: u8,
    placed: TokensSet,
    selected: Option<Token>,
}

impl TokenBag {
    /// Creates a bag holding the tokens `0..number_of_tokens`.
    ///
    /// Panics if `number_of_tokens` is zero or exceeds [`MAX_TOKENS`].
    pub fn new(number_of_tokens: u8) -> Self {
        assert!(
            (1..=MAX_TOKENS).contains(&number_of_tokens),
            "the number of tokens must be between 1 and {}",
            MAX_TOKENS
        );
        Self {
            number_of_tokens,
            placed: TokensSet::new(),
            selected: None,
        }
    }

    pub fn number_of_tokens(&self) -> u8 {
        self.number_of_tokens
    }

    /// Looks up the token numbered `id` in the universe of this bag.
    pub fn token(&self, id: u32) -> Result<Token, RuleViolation> {
        u8::try_from(id)
            .ok()
            .filter(|&id| id < self.number_of_tokens)
            .map(Token::new)
            .ok_or(RuleViolation::TokenOutOfRange {
                id,
                number_of_tokens: self.number_of_tokens,
            })
    }

    /// Selects `token` for the next placement.
    ///
    /// A second selection while one is pending is rejected, it never replaces
    /// the pending token.
    pub fn take(&mut self, token: Token) -> Result<(), RuleViolation> {
        self.token(u32::from(token))?;
        if self.placed.contains(token) {
            return Err(RuleViolation::TokenAlreadyPlaced { token });
        }
        match self.selected {
            Some(pending) if pending == token => Err(RuleViolation::TokenAlreadySelected { token }),
            Some(pending) => Err(RuleViolation::SelectionPending { pending }),
            None => {
                trace!(%token, "token selected");
                self.selected = Some(token);
                Ok(())
            }
        }
    }

    /// The token waiting to be placed, if any.
    pub fn selected(&self) -> Option<Token> {
        self.selected
    }

    /// Moves the selected token to the placed ones and returns it.
    pub fn mark_placed(&mut self) -> Result<Token, RuleViolation> {
        let token = self.selected.take().ok_or(RuleViolation::NoTokenSelected)?;
        self.placed = self.placed.insert(token);
        Ok(token)
    }

    /// All tokens that have not been placed yet, including a selected one.
    pub fn available(&self) -> TokensSet {
        TokensSet::first_n(self.number_of_tokens).difference(self.placed)
    }

    pub fn placed(&self) -> TokensSet {
        self.placed
    }

    /// The numbers of all available tokens, ascending and separated by spaces.
    pub fn available_listing(&self) -> String {
        token_listing(self.available())
    }

    pub fn is_exhausted(&self) -> bool {
        self.available().is_empty()
    }
}
