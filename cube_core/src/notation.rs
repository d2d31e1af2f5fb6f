//! Face-turn notation: a face letter, optionally suffixed with `'` for a
//! counter-clockwise turn. Parsing is the only place a move is validated;
//! the rotation engine takes already-typed moves and never fails.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::{Cube, Face};

/// The sense of a quarter turn, viewed looking at the turning face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// One quarter turn, fully validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// The move that undoes this one.
    pub fn inverse(self) -> Move {
        Move {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.direction == Direction::CounterClockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move token")]
    EmptyToken,
    #[error("unknown face letter: {0:?}")]
    UnknownFace(char),
    #[error("trailing characters in move token: {0:?}")]
    TrailingCharacters(String),
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let face = match chars.next() {
            None => return Err(NotationError::EmptyToken),
            Some('U') => Face::U,
            Some('R') => Face::R,
            Some('F') => Face::F,
            Some('D') => Face::D,
            Some('L') => Face::L,
            Some('B') => Face::B,
            Some(other) => return Err(NotationError::UnknownFace(other)),
        };

        let direction = match chars.next() {
            None => Direction::Clockwise,
            Some('\'') => Direction::CounterClockwise,
            Some(_) => return Err(NotationError::TrailingCharacters(s.to_owned())),
        };

        if chars.next().is_some() {
            return Err(NotationError::TrailingCharacters(s.to_owned()));
        }

        Ok(Move { face, direction })
    }
}

/// Parse a single move token.
pub fn parse_move(token: &str) -> Result<Move, NotationError> {
    token.parse()
}

/// Parse a whitespace-separated move sequence. Fails on the first invalid
/// token; a sequence is applied all-or-nothing.
pub fn parse_move_sequence(sequence: &str) -> Result<Vec<Move>, NotationError> {
    sequence.split_whitespace().map(parse_move).collect()
}

/// Render a move sequence back to notation, space separated.
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

impl Cube {
    /// Apply one parsed move.
    pub fn apply(&mut self, mv: Move) {
        self.turn(mv.face, mv.direction);
    }

    /// Apply a parsed sequence in order.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_twelve_tokens_round_trip() {
        for face in Face::ALL {
            for direction in [Direction::Clockwise, Direction::CounterClockwise] {
                let mv = Move { face, direction };
                let token = mv.to_string();
                assert_eq!(parse_move(&token), Ok(mv));
            }
        }
    }

    #[test]
    fn prime_suffix_means_counter_clockwise() {
        assert_eq!(
            parse_move("R"),
            Ok(Move {
                face: Face::R,
                direction: Direction::Clockwise,
            })
        );
        assert_eq!(
            parse_move("R'"),
            Ok(Move {
                face: Face::R,
                direction: Direction::CounterClockwise,
            })
        );
    }

    #[test]
    fn invalid_tokens_are_classified() {
        assert_eq!(parse_move(""), Err(NotationError::EmptyToken));
        assert_eq!(parse_move("X"), Err(NotationError::UnknownFace('X')));
        assert_eq!(parse_move("u"), Err(NotationError::UnknownFace('u')));
        assert_eq!(
            parse_move("U2"),
            Err(NotationError::TrailingCharacters("U2".to_owned()))
        );
        assert_eq!(
            parse_move("U''"),
            Err(NotationError::TrailingCharacters("U''".to_owned()))
        );
        assert_eq!(
            parse_move("UR"),
            Err(NotationError::TrailingCharacters("UR".to_owned()))
        );
    }

    #[test]
    fn sequences_tolerate_irregular_whitespace() {
        let moves = parse_move_sequence("  R   U'\tF  ").unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(format_moves(&moves), "R U' F");
    }

    #[test]
    fn sequence_parsing_is_all_or_nothing() {
        assert_eq!(
            parse_move_sequence("R U X F"),
            Err(NotationError::UnknownFace('X'))
        );
    }

    #[test]
    fn inverse_move_undoes_the_original() {
        let mut cube = Cube::solved();
        let mv = parse_move("F'").unwrap();

        cube.apply(mv);
        cube.apply(mv.inverse());

        assert_eq!(cube, Cube::solved());
    }

    #[test]
    fn apply_all_matches_individual_application() {
        let moves = parse_move_sequence("R U R' U'").unwrap();

        let mut batched = Cube::solved();
        batched.apply_all(&moves);

        let mut stepped = Cube::solved();
        for &mv in &moves {
            stepped.apply(mv);
        }

        assert_eq!(batched, stepped);
    }
}
