//! A geometric model of 2x2x2 and 3x3x3 twisty cubes.
//!
//! Every cubie is a [`Piece`] with a position and three orientation vectors,
//! held by a fixed [`Slot`]. A [`Layer`] turn rotates the pieces of its slots
//! and files them back by their new position.

#[cfg(test)]
mod test;

pub mod cube;
pub mod error;
pub mod geometry;
pub mod notation;
pub mod period;
pub mod shared;

pub use cube::{
    face::{Color, Face},
    layer::{Layer, Slot, Slots},
    piece::Piece,
    table::{CubeSize, LayerSpec, LayerTable},
    Cube, CubeState,
};
pub use error::{ConstructionError, CubeError, ParseError, Result, StructureError};
pub use geometry::{Axis, Vec3};
pub use notation::{Move, MoveSequence};
pub use shared::SharedCube;
