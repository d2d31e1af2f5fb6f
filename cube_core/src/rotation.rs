//! The rotation engine: quarter turns at the facelet level.
//!
//! A turn has two parts. The turning face's own nine stickers are permuted by
//! a fixed 3x3 rotation, and the twelve stickers lying along the turning
//! face's edge on the four neighboring faces cycle around it. Both parts read
//! a snapshot of the original values before writing anything.

use std::array;

use crate::{Color, Cube, Face, notation::Direction};

/// Self-rotation of a face, as `new[i] = old[MAP[i]]`. Clockwise sends the
/// bottom-left corner (index 6) to the top-left corner (index 0).
const ROTATE_CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
const ROTATE_CCW: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// A neighbor face and the three indices on it that run along the shared
/// edge, in edge order.
type Strip = (Face, [usize; 3]);

/// The four strips surrounding `face`, listed in the rotational order of the
/// physical adjacency cycle. The index order within each strip determines the
/// orientation of the stickers after cycling; a reordered entry still yields
/// plausible-looking but geometrically impossible states.
fn adjacent_strips(face: Face) -> [Strip; 4] {
    use Face::{B, D, F, L, R, U};

    match face {
        U => [(B, [2, 1, 0]), (R, [2, 1, 0]), (F, [2, 1, 0]), (L, [2, 1, 0])],
        D => [(F, [6, 7, 8]), (R, [6, 7, 8]), (B, [6, 7, 8]), (L, [6, 7, 8])],
        F => [(U, [6, 7, 8]), (R, [0, 3, 6]), (D, [2, 1, 0]), (L, [8, 5, 2])],
        B => [(U, [2, 1, 0]), (L, [0, 3, 6]), (D, [6, 7, 8]), (R, [8, 5, 2])],
        R => [(U, [8, 5, 2]), (B, [0, 3, 6]), (D, [8, 5, 2]), (F, [8, 5, 2])],
        L => [(U, [0, 3, 6]), (F, [0, 3, 6]), (D, [0, 3, 6]), (B, [8, 5, 2])],
    }
}

impl Cube {
    /// Apply one quarter turn of `face` in `direction`.
    ///
    /// Exactly 21 facelets are written: the turned face's nine and three on
    /// each of its four neighbors. Total for every input; a 180 degree turn
    /// is two calls.
    pub fn turn(&mut self, face: Face, direction: Direction) {
        self.rotate_face(face, direction);
        self.cycle_strips(face, direction);
    }

    fn rotate_face(&mut self, face: Face, direction: Direction) {
        let old = *self.face(face);
        let map = match direction {
            Direction::Clockwise => ROTATE_CW,
            Direction::CounterClockwise => ROTATE_CCW,
        };

        *self.face_mut(face) = array::from_fn(|i| old[map[i]]);
    }

    fn cycle_strips(&mut self, face: Face, direction: Direction) {
        let strips = adjacent_strips(face);

        // Read all four strips before the first write so no strip is cycled
        // out of an already-overwritten value.
        let extracted: [[Color; 3]; 4] = array::from_fn(|i| {
            let (neighbor, indices) = strips[i];
            indices.map(|idx| self.face(neighbor)[idx])
        });

        // Strip i receives the strip one position behind it in the cycle for
        // a clockwise turn, one position ahead for counter-clockwise.
        let offset = match direction {
            Direction::Clockwise => 3,
            Direction::CounterClockwise => 1,
        };

        for (i, &(neighbor, indices)) in strips.iter().enumerate() {
            let source = extracted[(i + offset) % 4];
            for (j, &idx) in indices.iter().enumerate() {
                self.face_mut(neighbor)[idx] = source[j];
            }
        }
    }
}
