//! The six fixed faces of the cube and their colors.

use std::fmt;

use crate::geometry::Vec3;

/// Sticker color.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub enum Color {
    Red,
    White,
    Green,
    Orange,
    Yellow,
    Blue,
}

impl Color {
    /// Integer code of this color, 1 through 6 in face order.
    pub fn code(&self) -> u8 {
        match self {
            Color::Red => 1,
            Color::White => 2,
            Color::Green => 3,
            Color::Orange => 4,
            Color::Yellow => 5,
            Color::Blue => 6,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::White => 'W',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
        }
    }
}

/// Code of an optional facelet color, `0` for facelets that are not visible.
pub fn color_code(color: Option<Color>) -> u8 {
    color.map(|c| c.code()).unwrap_or(0)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An outward facing side of the cube.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Face {
    name: char,
    color: Color,
    dir: Vec3,
}

impl Face {
    pub const R: Face = Face::new('R', Color::Red, Vec3::new(1, 0, 0));
    pub const U: Face = Face::new('U', Color::White, Vec3::new(0, 1, 0));
    pub const F: Face = Face::new('F', Color::Green, Vec3::new(0, 0, 1));
    pub const L: Face = Face::new('L', Color::Orange, Vec3::new(-1, 0, 0));
    pub const D: Face = Face::new('D', Color::Yellow, Vec3::new(0, -1, 0));
    pub const B: Face = Face::new('B', Color::Blue, Vec3::new(0, 0, -1));

    /// All faces in canonical order.
    ///
    /// The order matches the facelet order of a piece: right, up, front,
    /// then their opposites.
    pub const ALL: [Face; 6] = [Face::R, Face::U, Face::F, Face::L, Face::D, Face::B];

    const fn new(name: char, color: Color, dir: Vec3) -> Self {
        Self { name, color, dir }
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Outward unit direction.
    pub fn dir(&self) -> Vec3 {
        self.dir
    }

    pub fn by_name(name: char) -> Option<Face> {
        Self::ALL.into_iter().find(|f| f.name == name)
    }

    pub fn by_dir(dir: Vec3) -> Option<Face> {
        Self::ALL.into_iter().find(|f| f.dir == dir)
    }

    /// Position of this face in [`Face::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_else(|| unreachable!("every face is part of Face::ALL"))
    }
}

#[test]
fn lookups() {
    assert_eq!(Face::by_name('U'), Some(Face::U));
    assert_eq!(Face::by_name('M'), None);
    assert_eq!(Face::by_dir(Vec3::new(0, 0, -1)), Some(Face::B));
    assert_eq!(Face::by_dir(Vec3::new(1, 1, 0)), None);
    assert_eq!(Face::D.index(), 4);
}

#[test]
fn codes_follow_face_order() {
    for (i, face) in Face::ALL.iter().enumerate() {
        assert_eq!(face.color().code() as usize, i + 1);
        assert_eq!(Face::ALL[i].dir(), -Face::ALL[(i + 3) % 6].dir());
    }
    assert_eq!(color_code(None), 0);
}
