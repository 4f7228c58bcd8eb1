//! The rules engine for Torus, a two-player game in which tokens from a
//! shared bag are placed on a 6x6 board until four tokens in a line share an
//! attribute, or the bag runs empty.
//!
//! [`Game`] is the entry point for playing. The [`Request`] and [`Response`] types
//! translate the line-based text commands into calls on a [`Game`].

pub use bag::*;
pub use board::*;
pub use errors::*;
pub use game::*;
pub use player::*;
pub use protocol::*;
pub use tokens::*;
pub use tokens_set::*;
pub use visualization::*;
pub use win::*;

#[cfg(test)]
mod arbitrary;
mod bag;
mod board;
mod errors;
mod game;
mod player;
mod protocol;
mod tokens;
mod tokens_set;
mod visualization;
mod win;
