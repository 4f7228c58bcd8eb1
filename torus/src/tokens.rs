use serde::{Deserialize, Serialize};

/// The largest supported token universe, one token for every combination of
/// the four [attributes](Attribute).
pub const MAX_TOKENS: u8 = 16;

/// The token universe used unless configured otherwise.
pub const DEFAULT_NUMBER_OF_TOKENS: u8 = MAX_TOKENS;

/// A game token, identified by its number.
///
/// Every bit of the number stands for one [`Attribute`], so token `0b0101` is
/// dark, round, tall and solid. Whether a token actually belongs to the
/// universe of a game is decided by the [`TokenBag`](crate::TokenBag), not by
/// the token itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(u8);

/// One of the four binary properties of a [`Token`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Attribute {
    /// Light (bit unset) or dark (bit set).
    Color = 0b0001,
    /// Round or angular.
    Shape = 0b0010,
    /// Short or tall.
    Height = 0b0100,
    /// Solid or hollow.
    Fill = 0b1000,
}

/// All attributes, in bit order.
pub const ATTRIBUTES: [Attribute; 4] = [
    Attribute::Color,
    Attribute::Shape,
    Attribute::Height,
    Attribute::Fill,
];

impl Attribute {
    pub fn mask(self) -> u8 {
        self as u8
    }
}

impl Token {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn id(self) -> u8 {
        self.0
    }

    /// Whether the bit for `attribute` is set on this token.
    pub fn has(self, attribute: Attribute) -> bool {
        self.0 & attribute.mask() != 0
    }

    /// Iterates over all tokens of a universe with `number_of_tokens` entries.
    pub fn universe(number_of_tokens: u8) -> impl Iterator<Item = Token> {
        (0..number_of_tokens).map(Token)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> u32 {
        u32::from(token.0)
    }
}
