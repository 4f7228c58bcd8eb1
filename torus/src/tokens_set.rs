use std::iter::FusedIterator;

use crate::{Token, MAX_TOKENS};

/// A compact set of [`Token`]s.
///
/// Implements [`IntoIterator`], which yields the tokens by ascending number.
///
/// ```
/// use torus::{Token, TokensSet};
/// let mut set = TokensSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `TokensSet`.
/// set = set.insert(Token::new(7));
/// set = set.insert(Token::new(7)); // Inserting a second time has no effect
/// set = set.insert(Token::new(2));
/// assert_eq!(Vec::from_iter(set), vec![Token::new(2), Token::new(7)]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokensSet {
    // Bit n is set iff token n is contained.
    bits: u16,
}

impl TokensSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// The set of the tokens numbered `0..n`.
    pub fn first_n(n: u8) -> Self {
        debug_assert!(n <= MAX_TOKENS);
        let bits = if n >= MAX_TOKENS {
            u16::MAX
        } else {
            (1u16 << n) - 1
        };
        Self { bits }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, token: Token) -> bool {
        token.id() < MAX_TOKENS && self.bits & (1u16 << token.id()) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, token: Token) -> Self {
        debug_assert!(token.id() < MAX_TOKENS);
        Self {
            bits: self.bits | (1u16 << token.id()),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, token: Token) -> Self {
        if token.id() >= MAX_TOKENS {
            return self;
        }
        Self {
            bits: self.bits & !(1u16 << token.id()),
        }
    }

    /// The tokens in `self` that are not in `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }
}

impl FromIterator<Token> for TokensSet {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl IntoIterator for TokensSet {
    type Item = Token;

    type IntoIter = TokensSetIter;

    fn into_iter(self) -> Self::IntoIter {
        TokensSetIter { bits: self.bits }
    }
}

/// Iterator for a [`TokensSet`] that returns tokens by ascending number.
#[derive(Clone, Copy, Debug)]
pub struct TokensSetIter {
    bits: u16,
}

impl Iterator for TokensSetIter {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // The number of trailing zeros is the token number
            let id = self.bits.trailing_zeros() as u8;
            self.bits ^= 1u16 << id;
            Some(Token::new(id))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for TokensSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for TokensSetIter {}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn first_n() {
        assert!(TokensSet::first_n(0).is_empty());
        assert_eq!(TokensSet::first_n(3).len(), 3);
        assert_eq!(TokensSet::first_n(MAX_TOKENS).len(), 16);
        assert_eq!(
            TokensSet::first_n(MAX_TOKENS),
            TokensSet::from_iter(Token::universe(MAX_TOKENS))
        );
    }

    #[test]
    fn foreign_tokens_are_never_contained() {
        let full = TokensSet::first_n(MAX_TOKENS);
        assert!(!full.contains(Token::new(16)));
        assert_eq!(full.remove(Token::new(200)), full);
    }

    quickcheck! {
        fn iteration_is_sorted_and_complete(ids: Vec<u8>) -> bool {
            let tokens: Vec<Token> = ids.iter().map(|id| Token::new(id % MAX_TOKENS)).collect();
            let set = TokensSet::from_iter(tokens.iter().copied());
            let listed: Vec<Token> = set.into_iter().collect();
            listed.windows(2).all(|w| w[0] < w[1])
                && tokens.iter().all(|&t| set.contains(t))
                && listed.len() == set.len() as usize
        }
    }
}
