//! Facelet-level model of the 3x3x3 twisty puzzle.
//!
//! [`Cube`] holds the 54 sticker colors, six faces of nine facelets each.
//! Quarter turns are applied through [`Cube::turn`]; move notation and
//! scramble generation live in [`notation`] and [`scramble`].

#![warn(clippy::pedantic)]

use std::fmt;

pub mod cube;
pub mod notation;
mod rotation;
pub mod scramble;

pub use cube::Cube;
pub use notation::{Direction, Move, NotationError, format_moves, parse_move, parse_move_sequence};
pub use scramble::{DEFAULT_SCRAMBLE_LEN, random_move, scramble};

/// One of the six sides of the cube, in standard face-turn notation.
///
/// The discriminant doubles as the face's index into the cube's storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// The notation letter of the face.
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sticker color. Carries no meaning beyond identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
    Blue,
    Yellow,
    Orange,
    Green,
}

impl Color {
    /// The color a face is uniformly filled with in the solved state.
    pub fn of(face: Face) -> Color {
        match face {
            Face::U => Color::White,
            Face::R => Color::Red,
            Face::F => Color::Blue,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::B => Color::Green,
        }
    }
}
