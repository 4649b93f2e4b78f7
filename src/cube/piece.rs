use std::fmt;

use crate::{
    error::StructureError,
    geometry::{Axis, Vec3},
};

use super::face::{Color, Face};

/// A single cubie.
///
/// Facelet colors are stored by the direction the facelet pointed to when the
/// cube was built (right, up, front, left, down, back). The three orientation
/// vectors track where the original right, up and front directions point now,
/// which is enough to find the color visible in any direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    home: Vec3,
    pos: Vec3,
    right: Vec3,
    up: Vec3,
    front: Vec3,
    colors: [Option<Color>; 6],
}

impl Piece {
    /// A piece sitting at `pos` in its home orientation, with no colors yet.
    pub fn new(pos: Vec3) -> Self {
        Self {
            home: pos,
            pos,
            right: Face::R.dir(),
            up: Face::U.dir(),
            front: Face::F.dir(),
            colors: [None; 6],
        }
    }

    /// The position this piece was created at, which identifies it.
    pub fn home(&self) -> Vec3 {
        self.home
    }

    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    /// Current (right, up, front) orientation vectors.
    pub fn orientation(&self) -> (Vec3, Vec3, Vec3) {
        (self.right, self.up, self.front)
    }

    /// Colors indexed by original direction, in [`Face::ALL`] order.
    pub fn colors(&self) -> &[Option<Color>; 6] {
        &self.colors
    }

    pub(crate) fn set_color(&mut self, face: Face, color: Option<Color>) {
        self.colors[face.index()] = color;
    }

    /// `true` if the piece has not moved or twisted since construction.
    pub fn is_home(&self) -> bool {
        self.pos == self.home
            && self.right == Face::R.dir()
            && self.up == Face::U.dir()
            && self.front == Face::F.dir()
    }

    pub fn rotate_around_axis(&mut self, axis: Axis, quarters: i32) {
        self.pos.rotate_around_axis(axis, quarters);
        self.right.rotate_around_axis(axis, quarters);
        self.up.rotate_around_axis(axis, quarters);
        self.front.rotate_around_axis(axis, quarters);
    }

    /// The color this piece shows in direction `dir`.
    ///
    /// `Ok(None)` means the facelet pointing that way is internal.
    pub fn facelet(&self, dir: Vec3) -> Result<Option<Color>, StructureError> {
        let candidates = [
            self.right,
            self.up,
            self.front,
            -self.right,
            -self.up,
            -self.front,
        ];

        candidates
            .iter()
            .position(|v| *v == dir)
            .map(|i| self.colors[i])
            .ok_or(StructureError::NoMatchingOrientation { pos: self.pos, dir })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[pos: {}, dir_R: {}, dir_U: {}, colors: ",
            self.pos, self.right, self.up
        )?;
        for color in self.colors {
            match color {
                Some(c) => write!(f, "{c}")?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}

#[test]
fn facelet_follows_rotation() {
    let mut piece = Piece::new(Vec3::new(2, 2, 2));
    piece.set_color(Face::R, Some(Color::Red));
    piece.set_color(Face::U, Some(Color::White));
    piece.set_color(Face::F, Some(Color::Green));

    assert_eq!(piece.facelet(Face::U.dir()), Ok(Some(Color::White)));
    assert_eq!(piece.facelet(Face::D.dir()), Ok(None));

    // An R turn sends the up facelet to the back.
    piece.rotate_around_axis(Axis::X, 1);

    assert_eq!(piece.pos(), Vec3::new(2, 2, -2));
    assert_eq!(piece.facelet(Face::B.dir()), Ok(Some(Color::White)));
    assert_eq!(piece.facelet(Face::U.dir()), Ok(Some(Color::Green)));
    assert_eq!(piece.facelet(Face::R.dir()), Ok(Some(Color::Red)));
    assert!(!piece.is_home());

    piece.rotate_around_axis(Axis::X, 3);
    assert!(piece.is_home());
}

#[test]
fn facelet_rejects_non_axis_direction() {
    let piece = Piece::new(Vec3::ZERO);

    assert_eq!(
        piece.facelet(Vec3::new(1, 1, 0)),
        Err(StructureError::NoMatchingOrientation {
            pos: Vec3::ZERO,
            dir: Vec3::new(1, 1, 0)
        })
    );
}
