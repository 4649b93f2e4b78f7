//! Error types for cube construction, move parsing and turn execution.

use thiserror::Error;

use crate::geometry::Vec3;

/// A cube could not be built from the requested size or layer table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Unknown cube size {0:?}, expected \"2x2x2\" or \"3x3x3\"")]
    UnknownSize(String),
    #[error("The layer table has no layers along axis {0}")]
    EmptyAxis(usize),
    #[error("Layer {name} does not turn around principal axis {axis}")]
    MismatchedAxis { name: char, axis: usize },
    #[error("Every axis needs the same amount of layers, expected {expected} but got {got}")]
    UnevenAxes { expected: usize, got: usize },
    #[error("Two layers along axis {axis} share coordinate {coord}")]
    DuplicateCoordinate { axis: usize, coord: i32 },
    #[error("Layer coordinates along axis {0} are not centered on zero with a step of 2")]
    AsymmetricCoordinates(usize),
    #[error("Layer name {0} is used more than once")]
    DuplicateLayer(char),
    #[error("No outer layer is named after face {0}")]
    MissingFaceLayer(char),
}

/// A move string could not be turned into moves for this cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty move token")]
    Empty,
    #[error("Unknown modifier in move {token:?}, expected nothing, \"2\" or \"'\"")]
    UnknownModifier { token: String },
    #[error("No layer named {0}")]
    UnknownLayer(char),
}

/// The slot/piece structure stopped being consistent.
///
/// These only happen if construction or the rotation math is broken, so they
/// are always propagated to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("Slot at {0} holds no piece")]
    EmptySlot(Vec3),
    #[error("Rotated piece landed on {0}, where no slot exists")]
    NoSlotAtPosition(Vec3),
    #[error("Turning layer {layer} moved a piece out of the layer to {pos}")]
    LeftLayer { layer: char, pos: Vec3 },
    #[error("Slot at {0} is already occupied")]
    SlotOccupied(Vec3),
    #[error("No orientation vector of the piece at {pos} points along {dir}")]
    NoMatchingOrientation { pos: Vec3, dir: Vec3 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

pub type Result<T> = std::result::Result<T, CubeError>;
