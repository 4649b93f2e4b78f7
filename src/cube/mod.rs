//! The cube itself: slots, layers, and everything that turns or queries them.

use std::{fmt, ops::Index, str::FromStr};

use crate::{
    error::{CubeError, ParseError, Result, StructureError},
    geometry::Vec3,
    notation::{Move, MoveSequence},
};

pub mod face;
pub mod layer;
pub mod piece;
pub mod table;

use face::{color_code, Color, Face};
use layer::{Layer, Slot, Slots};
use piece::Piece;
use table::{CubeSize, LayerTable};

/// An NxNxN cube.
///
/// Built once from a [`LayerTable`]; afterwards only turns change it. No
/// piece or slot is created or destroyed after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    n: usize,
    slots: Slots,
    layers: Vec<Layer>,
}

impl Cube {
    /// A solved cube of one of the built-in sizes.
    pub fn new(size: CubeSize) -> Result<Self> {
        Self::from_table(&size.layer_table())
    }

    /// A solved cube built from a custom layer table.
    pub fn from_table(table: &LayerTable) -> Result<Self> {
        table.validate()?;

        let mut cube = Self {
            n: table.n(),
            slots: Slots::new(),
            layers: Vec::new(),
        };

        cube.generate(table);
        cube.link();

        log::debug!(
            "Built {n}x{n}x{n} cube with {} slots and {} layers",
            cube.slots.len(),
            cube.layers.len(),
            n = cube.n,
        );

        Ok(cube)
    }

    fn generate(&mut self, table: &LayerTable) {
        self.layers = table
            .iter()
            .map(|spec| Layer::new(spec.name, spec.axis))
            .collect();

        let layer_index = |name: char| -> usize {
            table
                .iter()
                .position(|spec| spec.name == name)
                .unwrap_or_else(|| unreachable!("{name} comes from the same table"))
        };

        let [xs, ys, zs] = &table.axes;

        for x in xs {
            for y in ys {
                for z in zs {
                    let piece = Piece::new(Vec3::new(x.coord, y.coord, z.coord));
                    let slot = self.slots.push(Slot::new(piece));

                    for spec in [x, y, z] {
                        self.layers[layer_index(spec.name)].add_slot(slot);
                    }
                }
            }
        }
    }

    /// Hand out colors by adjacency. A facelet with a neighbouring slot in its
    /// direction is internal and stays colorless.
    fn link(&mut self) {
        let colors: Vec<[Option<Color>; 6]> = self
            .slots
            .iter()
            .map(|slot| {
                Face::ALL.map(|face| {
                    let neighbour = slot.pos() + face.dir() * 2;
                    match self.slots.at(neighbour) {
                        Some(_) => None,
                        None => Some(face.color()),
                    }
                })
            })
            .collect();

        for (slot, colors) in self.slots.iter_mut().zip(colors) {
            if let Some(piece) = slot.piece_mut() {
                for (face, color) in Face::ALL.into_iter().zip(colors) {
                    piece.set_color(face, color);
                }
            }
        }
    }

    /// Edge length of the cube.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn layer(&self, name: char) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    pub fn layer_names(&self) -> impl Iterator<Item = char> + '_ {
        self.layers.iter().map(Layer::name)
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn slot_at(&self, pos: Vec3) -> Option<&Slot> {
        self.slots.at(pos)
    }

    /// Every piece currently held by a slot.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots.iter().filter_map(Slot::piece)
    }

    fn face_layer(&self, face_name: char) -> Result<(Face, &Layer)> {
        let face = Face::by_name(face_name).ok_or(ParseError::UnknownLayer(face_name))?;
        let layer = self
            .layer(face_name)
            .ok_or(ParseError::UnknownLayer(face_name))?;
        Ok((face, layer))
    }

    /// Turn layer `name` by `turns` quarter turns. Any integer is accepted.
    pub fn turn(&mut self, name: char, turns: i32) -> Result<()> {
        let layer = self
            .layers
            .iter()
            .find(|l| l.name() == name)
            .ok_or(ParseError::UnknownLayer(name))?;

        layer.turn(&mut self.slots, turns)?;
        log::trace!("Turned {name} by {turns}");

        Ok(())
    }

    pub fn apply_move(&mut self, m: Move) -> Result<()> {
        self.turn(m.layer(), i32::from(m.quarters()))
    }

    /// Apply every move of `moves`. Unknown layers are rejected before the
    /// first move is made.
    pub fn apply(&mut self, moves: &MoveSequence) -> Result<()> {
        if let Some(m) = moves.iter().find(|m| self.layer(m.layer()).is_none()) {
            return Err(ParseError::UnknownLayer(m.layer()).into());
        }

        for m in moves {
            self.apply_move(*m)?;
        }

        Ok(())
    }

    /// Parse and apply a space separated move string such as `"R U R' U'"`.
    pub fn execute(&mut self, moves: &str) -> Result<()> {
        let moves: MoveSequence = moves.parse()?;
        self.apply(&moves)
    }

    /// `true` if every face shows only its own color.
    pub fn solved(&self) -> Result<bool> {
        for face in Face::ALL {
            let (_, layer) = self.face_layer(face.name())?;

            for &index in layer.slots() {
                let piece = self.held(index)?;
                if piece.facelet(face.dir())? != Some(face.color()) {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    fn held(&self, index: usize) -> Result<&Piece> {
        Ok(self.slots.held(index)?)
    }

    /// Colors visible on face `face_name`, in the order of the face layer's
    /// slots.
    pub fn face_colors(&self, face_name: char) -> Result<Vec<Option<Color>>> {
        let (face, layer) = self.face_layer(face_name)?;

        layer
            .slots()
            .iter()
            .map(|&index| -> Result<Option<Color>> {
                Ok(self.held(index)?.facelet(face.dir())?)
            })
            .collect()
    }

    /// Color codes (see [`Color::code`]) visible on face `face_name`.
    pub fn face_to_array(&self, face_name: char) -> Result<Vec<u8>> {
        Ok(self
            .face_colors(face_name)?
            .into_iter()
            .map(color_code)
            .collect())
    }

    /// All six faces' color codes, concatenated in [`Face::ALL`] order.
    pub fn cube_to_array(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(6 * self.n * self.n);
        for face in Face::ALL {
            out.extend(self.face_to_array(face.name())?);
        }
        Ok(out)
    }

    /// Snapshot of the color every grid cell shows toward each face direction.
    pub fn get_state(&self) -> Result<CubeState> {
        let n = self.n;
        let offset = n as i32 - 1;
        let coord = |i: usize| 2 * i as i32 - offset;

        let mut data = Vec::with_capacity(n * n * n * 6);

        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let pos = Vec3::new(coord(x), coord(y), coord(z));
                    let piece = self
                        .slots
                        .at(pos)
                        .ok_or(StructureError::NoSlotAtPosition(pos))?
                        .held()?;

                    for face in Face::ALL {
                        data.push(color_code(piece.facelet(face.dir())?));
                    }
                }
            }
        }

        Ok(CubeState { n, data })
    }
}

impl FromStr for Cube {
    type Err = CubeError;

    /// Build a solved cube from a size name like `"3x3x3"`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.parse()?)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::ALL {
            let colors = self.face_colors(face.name()).map_err(|_| fmt::Error)?;

            write!(f, "{}: ", face.name())?;
            for color in colors {
                match color {
                    Some(c) => write!(f, "{c}")?,
                    None => write!(f, "-")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// An `n * n * n * 6` tensor of color codes, indexed `[x][y][z][face]`.
///
/// Grid index `i` corresponds to the slot coordinate `2 * i - (n - 1)`, and
/// face indices follow [`Face::ALL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    n: usize,
    data: Vec<u8>,
}

impl CubeState {
    pub fn size(&self) -> usize {
        self.n
    }

    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        ((x * self.n + y) * self.n + z) * 6
    }

    pub fn get(&self, x: usize, y: usize, z: usize, face: usize) -> u8 {
        self.data[self.offset(x, y, z) + face]
    }

    /// The six codes of one cell.
    pub fn cell(&self, x: usize, y: usize, z: usize) -> &[u8] {
        let start = self.offset(x, y, z);
        &self.data[start..start + 6]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Index<[usize; 4]> for CubeState {
    type Output = u8;

    fn index(&self, [x, y, z, face]: [usize; 4]) -> &u8 {
        &self.data[self.offset(x, y, z) + face]
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.n {
            for y in 0..self.n {
                for z in 0..self.n {
                    writeln!(f, "[{x}][{y}][{z}] {:?}", self.cell(x, y, z))?;
                }
            }
        }
        Ok(())
    }
}
