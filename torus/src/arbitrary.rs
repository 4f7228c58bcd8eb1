use quickcheck::{Arbitrary, Gen};

use crate::{BoardType, Position, Token, MAX_TOKENS};

/// A position anywhere in the `i16` range, far outside of the board.
#[derive(Clone, Copy, Debug)]
pub struct AnyPosition(pub Position);

impl Arbitrary for AnyPosition {
    fn arbitrary(g: &mut Gen) -> Self {
        let row = i32::from(i16::arbitrary(g));
        let col = i32::from(i16::arbitrary(g));
        AnyPosition(Position::new(row, col))
    }
}

/// One select + place pair, with coordinates close to the board so that both
/// legal and out-of-bounds placements come up.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub token: Token,
    pub position: Position,
}

impl Arbitrary for Move {
    fn arbitrary(g: &mut Gen) -> Self {
        let row = (u8::arbitrary(g) % 10) as i32 - 2;
        let col = (u8::arbitrary(g) % 10) as i32 - 2;
        Move {
            token: Token::arbitrary(g),
            position: Position::new(row, col),
        }
    }
}

impl Arbitrary for Token {
    fn arbitrary(g: &mut Gen) -> Self {
        // Sometimes outside of the universe on purpose
        Token::new(u8::arbitrary(g) % (MAX_TOKENS + 2))
    }
}

impl Arbitrary for BoardType {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[BoardType::Standard, BoardType::Torus]).unwrap()
    }
}
