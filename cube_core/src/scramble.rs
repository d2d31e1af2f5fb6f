//! Random move and scramble generation, a thin layer over the rotation
//! engine. Moves are drawn uniformly from the twelve quarter turns with no
//! anti-cancellation, so consecutive opposite moves can and do occur.

use log::debug;

use crate::{Cube, Face, notation::{Direction, Move}};

/// Scramble length used by the front end when none is given.
pub const DEFAULT_SCRAMBLE_LEN: usize = 25;

const QUARTER_TURNS: [Move; 12] = {
    const fn cw(face: Face) -> Move {
        Move {
            face,
            direction: Direction::Clockwise,
        }
    }
    const fn ccw(face: Face) -> Move {
        Move {
            face,
            direction: Direction::CounterClockwise,
        }
    }

    [
        cw(Face::U),
        ccw(Face::U),
        cw(Face::R),
        ccw(Face::R),
        cw(Face::F),
        ccw(Face::F),
        cw(Face::D),
        ccw(Face::D),
        cw(Face::L),
        ccw(Face::L),
        cw(Face::B),
        ccw(Face::B),
    ]
};

/// Apply one uniformly random quarter turn and return it.
pub fn random_move(cube: &mut Cube) -> Move {
    let mv = *fastrand::choice(QUARTER_TURNS.iter()).unwrap();
    cube.apply(mv);
    debug!(target: "scramble", "Applied random move {mv}");
    mv
}

/// Apply `n` independent random quarter turns and return them in order.
pub fn scramble(cube: &mut Cube, n: usize) -> Vec<Move> {
    (0..n).map(|_| random_move(cube)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_move;

    #[test_log::test]
    fn replaying_a_scramble_reproduces_the_state() {
        let mut scrambled = Cube::solved();
        let sequence = scramble(&mut scrambled, DEFAULT_SCRAMBLE_LEN);
        assert_eq!(sequence.len(), DEFAULT_SCRAMBLE_LEN);

        let mut replayed = Cube::solved();
        replayed.apply_all(&sequence);

        assert_eq!(replayed, scrambled);
    }

    #[test_log::test]
    fn random_move_returns_the_move_it_applied() {
        for _ in 0..100 {
            let mut cube = Cube::solved();
            let mv = random_move(&mut cube);

            let mut check = Cube::solved();
            check.apply(mv);

            assert_eq!(cube, check);
        }
    }

    #[test]
    fn every_generated_token_parses_back() {
        let mut cube = Cube::solved();
        for mv in scramble(&mut cube, 200) {
            assert_eq!(parse_move(&mv.to_string()), Ok(mv));
        }
    }

    #[test]
    fn zero_length_scramble_is_a_no_op() {
        let mut cube = Cube::solved();
        assert!(scramble(&mut cube, 0).is_empty());
        assert_eq!(cube, Cube::solved());
    }
}
