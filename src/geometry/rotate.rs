use super::Vec3;

/// One of the six signed principal axes a layer can turn around.
///
/// The negated axes turn the same plane as their positive counterpart, with
/// the opposite sense.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
    NegX,
    NegY,
    NegZ,
}

impl Axis {
    pub const ALL: [Axis; 6] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::NegX,
        Axis::NegY,
        Axis::NegZ,
    ];

    /// The principal axis index (0 = x, 1 = y, 2 = z), ignoring sign.
    pub fn index(&self) -> usize {
        match self {
            Axis::X | Axis::NegX => 0,
            Axis::Y | Axis::NegY => 1,
            Axis::Z | Axis::NegZ => 2,
        }
    }

    pub fn negated(&self) -> Axis {
        match self {
            Axis::X => Axis::NegX,
            Axis::Y => Axis::NegY,
            Axis::Z => Axis::NegZ,
            Axis::NegX => Axis::X,
            Axis::NegY => Axis::Y,
            Axis::NegZ => Axis::Z,
        }
    }

    /// Unit vector pointing along this axis.
    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
            Axis::NegX => -Vec3::X,
            Axis::NegY => -Vec3::Y,
            Axis::NegZ => -Vec3::Z,
        }
    }
}

/// `(cos, sin)` of `n` quarter turns.
const QUARTER_TURNS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Rotate the pair `(a, b)` by `quarters` quarter turns within its plane.
///
/// `quarters` may be any integer, it is reduced modulo 4.
#[inline]
pub fn rotate(a: i32, b: i32, quarters: i32) -> (i32, i32) {
    let (cos, sin) = QUARTER_TURNS[quarters.rem_euclid(4) as usize];
    (cos * a + sin * b, -sin * a + cos * b)
}

#[test]
fn rotate_table() {
    assert_eq!(rotate(1, 0, 0), (1, 0));
    assert_eq!(rotate(1, 0, 1), (0, -1));
    assert_eq!(rotate(1, 0, 2), (-1, 0));
    assert_eq!(rotate(1, 0, 3), (0, 1));
    assert_eq!(rotate(2, -1, -1), rotate(2, -1, 3));
    assert_eq!(rotate(2, -1, 6), rotate(2, -1, 2));
}
