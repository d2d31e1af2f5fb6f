use crate::{Color, Face};

/// The full sticker state of the puzzle.
///
/// Each face stores its nine facelets in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// The 6x9 shape is part of the type, so every reachable value has exactly
/// six faces of exactly nine facelets. A `Cube` is a plain value owned by the
/// caller; the only mutating operations are [`Cube::turn`](crate::Cube::turn)
/// (and the move/scramble helpers built on it) and [`Cube::reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cube {
    faces: [[Color; 9]; 6],
}

impl Cube {
    /// The canonical solved state: every face uniformly filled with its own
    /// color. Constructed fresh on every call, so no caller can alias the
    /// template.
    pub fn solved() -> Cube {
        Cube {
            faces: Face::ALL.map(|face| [Color::of(face); 9]),
        }
    }

    /// Restore the solved state in place.
    pub fn reset(&mut self) {
        *self = Cube::solved();
    }

    /// The nine facelets of `face`, row-major.
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face.index()]
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut [Color; 9] {
        &mut self.faces[face.index()]
    }

    /// Whether every face is uniformly one color.
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.face(face).iter().all(|&c| c == self.face(face)[4]))
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn solved_faces_are_uniform() {
        let cube = Cube::solved();

        for face in Face::ALL {
            assert!(cube.face(face).iter().all(|&c| c == Color::of(face)));
        }

        assert!(cube.is_solved());
        assert_eq!(cube, Cube::default());
    }

    #[test]
    fn reset_restores_solved_state() {
        let mut cube = Cube::solved();
        crate::scramble(&mut cube, 30);

        cube.reset();
        assert_eq!(cube, Cube::solved());

        // A second reset is a no-op.
        cube.reset();
        assert_eq!(cube, Cube::solved());
    }

    #[test]
    fn copies_share_no_state() {
        let original = Cube::solved();
        let mut copy = original;

        copy.turn(Face::F, Direction::Clockwise);

        assert_ne!(copy, original);
        assert_eq!(original, Cube::solved());
    }

    #[test]
    fn turned_cube_is_not_solved() {
        let mut cube = Cube::solved();
        cube.turn(Face::R, Direction::CounterClockwise);
        assert!(!cube.is_solved());
    }
}
