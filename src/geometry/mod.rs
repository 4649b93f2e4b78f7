pub mod rotate;

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

pub use rotate::Axis;

/// Integer 3D vector used both for slot positions and for unit directions.
///
/// Positions are measured in half-cubie units, so the centres of an even sized
/// cube (which sit at half offsets from the middle) stay integral. A 2x2x2
/// uses the coordinates {-1, 1} and a 3x3x3 uses {-2, 0, 2}. Directions are
/// plain unit vectors, so the neighbour of a position `p` in direction `d` is
/// `p + d * 2`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default, PartialOrd, Ord)]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0, 0, 0);
    pub const X: Vec3 = Vec3::new(1, 0, 0);
    pub const Y: Vec3 = Vec3::new(0, 1, 0);
    pub const Z: Vec3 = Vec3::new(0, 0, 1);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Get the component along principal axis `index` (0 = x, 1 = y, 2 = z).
    pub(crate) fn component(&self, index: usize) -> i32 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("component index {index} out of range"),
        }
    }

    pub fn dot(&self, other: Vec3) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Rotate this vector in place by `quarters` quarter turns around `axis`.
    pub fn rotate_around_axis(&mut self, axis: Axis, quarters: i32) {
        let (a, b) = match axis {
            Axis::X => (&mut self.y, &mut self.z),
            Axis::Y => (&mut self.z, &mut self.x),
            Axis::Z => (&mut self.x, &mut self.y),
            Axis::NegX => (&mut self.z, &mut self.y),
            Axis::NegY => (&mut self.x, &mut self.z),
            Axis::NegZ => (&mut self.y, &mut self.x),
        };

        (*a, *b) = rotate::rotate(*a, *b, quarters);
    }

    /// Copying variant of [`Vec3::rotate_around_axis`].
    pub fn rotated_around_axis(mut self, axis: Axis, quarters: i32) -> Vec3 {
        self.rotate_around_axis(axis, quarters);
        self
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: i32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<(i32, i32, i32)> for Vec3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Vec3::new(x, y, z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[x: {}, y: {}, z: {}]", self.x, self.y, self.z)
    }
}

#[test]
fn arithmetic() {
    let a = Vec3::new(1, -2, 3);
    let b = Vec3::new(-1, 0, 2);

    assert_eq!(a + b, Vec3::new(0, -2, 5));
    assert_eq!(a - b, Vec3::new(2, -2, 1));
    assert_eq!(-a, Vec3::new(-1, 2, -3));
    assert_eq!(a * 2, Vec3::new(2, -4, 6));
    assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    assert_eq!(a.dot(b), 5);
}

#[test]
fn quarter_turn_around_x_moves_up_to_back() {
    assert_eq!(Vec3::Y.rotated_around_axis(Axis::X, 1), -Vec3::Z);
    assert_eq!(Vec3::Z.rotated_around_axis(Axis::X, 1), Vec3::Y);
    assert_eq!(Vec3::X.rotated_around_axis(Axis::X, 1), Vec3::X);
}

#[test]
fn negated_axis_turns_the_other_way() {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let p = Vec3::new(2, -1, 1);
        assert_eq!(
            p.rotated_around_axis(axis, 1),
            p.rotated_around_axis(axis.negated(), 3)
        );
    }
}

#[test]
fn four_quarters_is_identity() {
    let p = Vec3::new(1, 2, -2);
    for axis in Axis::ALL {
        assert_eq!(p.rotated_around_axis(axis, 4), p);
        assert_eq!(p.rotated_around_axis(axis, -1), p.rotated_around_axis(axis, 3));
    }
}
