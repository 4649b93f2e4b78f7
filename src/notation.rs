//! Move notation: `R`, `U2`, `F'` and whitespace separated sequences of them.

use std::{fmt, str::FromStr};

use crate::error::ParseError;

/// Modifier suffixes and the quarter turns they stand for.
const MODIFIERS: [(&str, u8); 3] = [("", 1), ("2", 2), ("'", 3)];

/// A single layer turn of 1, 2 or 3 quarter turns.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Move {
    layer: char,
    quarters: u8,
}

impl Move {
    /// A turn of `layer` by `quarters` quarter turns, taken modulo 4.
    /// Returns `None` when that is a whole number of revolutions.
    pub fn new(layer: char, quarters: i32) -> Option<Self> {
        match quarters.rem_euclid(4) {
            0 => None,
            q => Some(Self {
                layer,
                quarters: q as u8,
            }),
        }
    }

    pub fn layer(&self) -> char {
        self.layer
    }

    /// Always 1, 2 or 3.
    pub fn quarters(&self) -> u8 {
        self.quarters
    }

    /// The move that undoes this one.
    pub fn inverse(&self) -> Move {
        Self {
            layer: self.layer,
            quarters: 4 - self.quarters,
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let layer = chars.next().ok_or(ParseError::Empty)?;
        let modifier = chars.as_str();

        MODIFIERS
            .iter()
            .find(|(m, _)| *m == modifier)
            .map(|&(_, quarters)| Self { layer, quarters })
            .ok_or_else(|| ParseError::UnknownModifier {
                token: token.to_string(),
            })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layer)?;

        for (modifier, quarters) in MODIFIERS {
            if quarters == self.quarters {
                write!(f, "{modifier}")?;
            }
        }

        Ok(())
    }
}

/// An ordered list of moves.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Default)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    pub fn new(moves: Vec<Move>) -> Self {
        Self(moves)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> + ExactSizeIterator + '_ {
        self.0.iter()
    }

    /// The sequence that undoes this one.
    pub fn inverse(&self) -> MoveSequence {
        Self(self.0.iter().rev().map(Move::inverse).collect())
    }
}

impl FromStr for MoveSequence {
    type Err = ParseError;

    fn from_str(moves: &str) -> Result<Self, Self::Err> {
        moves
            .split_whitespace()
            .map(Move::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for m in &self.0 {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(value: Vec<Move>) -> Self {
        Self(value)
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[test]
fn parse_modifiers() {
    assert_eq!("R".parse::<Move>().ok(), Move::new('R', 1));
    assert_eq!("U2".parse::<Move>().ok(), Move::new('U', 2));
    assert_eq!("F'".parse::<Move>().ok(), Move::new('F', 3));
    assert_eq!(
        "R3".parse::<Move>(),
        Err(ParseError::UnknownModifier {
            token: "R3".to_string()
        })
    );
    assert_eq!("".parse::<Move>(), Err(ParseError::Empty));
}

#[test]
fn sequence_display_and_inverse() {
    let seq: MoveSequence = "  R U2  F' ".parse().unwrap();

    assert_eq!(seq.len(), 3);
    assert_eq!(seq.to_string(), "R U2 F'");
    assert_eq!(seq.inverse().to_string(), "F U2 R'");
    assert!("".parse::<MoveSequence>().unwrap().is_empty());
}

#[test]
fn new_normalises_quarters() {
    assert_eq!(Move::new('R', 5), Move::new('R', 1));
    assert_eq!(Move::new('R', -1), Move::new('R', 3));
    assert_eq!(Move::new('R', 0), None);
    assert_eq!(Move::new('R', 8), None);

    for q in 1..4 {
        let m = Move::new('U', q).unwrap();
        assert_eq!(m.quarters() as i32, q);
        assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        assert_eq!(m.inverse().to_string().parse::<Move>(), Ok(m.inverse()));
        assert_eq!(m.inverse().inverse(), m);
    }
}
