//! Slots and the layers that turn them.

use hashbrown::{HashMap, HashSet};

use crate::{
    error::StructureError,
    geometry::{Axis, Vec3},
};

use super::piece::Piece;

/// A fixed place in space that holds one piece.
///
/// Slots never move. Pieces move between them when a layer turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pos: Vec3,
    piece: Option<Piece>,
}

impl Slot {
    pub fn new(piece: Piece) -> Self {
        Self {
            pos: piece.pos(),
            piece: Some(piece),
        }
    }

    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub(crate) fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    /// The held piece, or an error naming this slot if it is empty.
    pub fn held(&self) -> Result<&Piece, StructureError> {
        self.piece
            .as_ref()
            .ok_or(StructureError::EmptySlot(self.pos))
    }
}

/// All slots of a cube plus a lookup from position to slot index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slots {
    slots: Vec<Slot>,
    by_pos: HashMap<Vec3, usize>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slot, returning its index. The position must be new.
    pub(crate) fn push(&mut self, slot: Slot) -> usize {
        let index = self.slots.len();
        debug_assert!(!self.by_pos.contains_key(&slot.pos));
        self.by_pos.insert(slot.pos, index);
        self.slots.push(slot);
        index
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// The piece held by slot `index`, which must be in range.
    pub(crate) fn held(&self, index: usize) -> Result<&Piece, StructureError> {
        self.slots[index].held()
    }

    pub fn index_of(&self, pos: Vec3) -> Option<usize> {
        self.by_pos.get(&pos).copied()
    }

    pub fn at(&self, pos: Vec3) -> Option<&Slot> {
        self.index_of(pos).map(|i| &self.slots[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> + ExactSizeIterator + '_ {
        self.slots.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slot> + '_ {
        self.slots.iter_mut()
    }
}

/// A named group of slots that turn together around one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    name: char,
    axis: Axis,
    /// Quarter turns performed by a single turn of this layer.
    turn_angle: i32,
    slots: Vec<usize>,
}

impl Layer {
    pub fn new(name: char, axis: Axis) -> Self {
        Self {
            name,
            axis,
            turn_angle: 1,
            slots: Vec::new(),
        }
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Indices of the member slots, in the order they were added.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub(crate) fn add_slot(&mut self, index: usize) {
        self.slots.push(index);
    }

    /// Turn this layer `turns` times.
    ///
    /// Every rotated piece is first staged against its destination, so if
    /// anything is inconsistent the error is returned before `slots` is
    /// touched. The pieces are then all detached before any is reattached,
    /// since destination slots overlap with source slots.
    pub fn turn(&self, slots: &mut Slots, turns: i32) -> Result<(), StructureError> {
        let quarters = (self.turn_angle * turns.rem_euclid(4)).rem_euclid(4);
        if quarters == 0 {
            return Ok(());
        }

        let members: HashSet<usize> = self.slots.iter().copied().collect();
        let mut destinations = HashSet::with_capacity(self.slots.len());
        let mut staged = Vec::with_capacity(self.slots.len());

        for &index in &self.slots {
            let mut piece = slots.held(index)?.clone();
            piece.rotate_around_axis(self.axis, quarters);

            let dest = slots
                .index_of(piece.pos())
                .ok_or(StructureError::NoSlotAtPosition(piece.pos()))?;

            if !members.contains(&dest) {
                return Err(StructureError::LeftLayer {
                    layer: self.name,
                    pos: piece.pos(),
                });
            }

            if !destinations.insert(dest) {
                return Err(StructureError::SlotOccupied(piece.pos()));
            }

            staged.push((dest, piece));
        }

        for &index in &self.slots {
            slots.slots[index].piece = None;
        }

        for (dest, piece) in staged {
            let slot = &mut slots.slots[dest];
            if slot.piece.is_some() {
                return Err(StructureError::SlotOccupied(slot.pos));
            }
            slot.piece = Some(piece);
        }

        Ok(())
    }
}

#[cfg(test)]
fn single_layer() -> (Layer, Slots) {
    let mut slots = Slots::new();
    let mut layer = Layer::new('R', Axis::X);

    for y in [-2, 0, 2] {
        for z in [-2, 0, 2] {
            let index = slots.push(Slot::new(Piece::new(Vec3::new(2, y, z))));
            layer.add_slot(index);
        }
    }

    (layer, slots)
}

#[test]
fn turn_keeps_every_slot_filled() {
    let (layer, mut slots) = single_layer();

    layer.turn(&mut slots, 1).unwrap();

    for slot in slots.iter() {
        let piece = slot.held().unwrap();
        assert_eq!(piece.pos(), slot.pos());
    }

    let corner = slots.at(Vec3::new(2, 2, -2)).unwrap().held().unwrap();
    assert_eq!(corner.home(), Vec3::new(2, 2, 2));
}

#[test]
fn turn_round_trip() {
    let (layer, mut slots) = single_layer();
    let before = slots.slots.clone();

    for t in 0..4 {
        layer.turn(&mut slots, t).unwrap();
        layer.turn(&mut slots, 4 - t).unwrap();
        assert_eq!(slots.slots, before);
    }
}

#[test]
fn failed_turn_leaves_slots_alone() {
    let mut slots = Slots::new();
    let mut layer = Layer::new('X', Axis::X);

    // An off-centre layer: rotating it lands pieces on missing positions.
    for y in [0, 2] {
        let index = slots.push(Slot::new(Piece::new(Vec3::new(2, y, 0))));
        layer.add_slot(index);
    }
    let before = slots.slots.clone();

    assert_eq!(
        layer.turn(&mut slots, 1),
        Err(StructureError::NoSlotAtPosition(Vec3::new(2, 0, -2)))
    );
    assert_eq!(slots.slots, before);
}

#[test]
fn turn_out_of_layer_leaves_slots_alone() {
    let mut slots = Slots::new();
    let mut layer = Layer::new('X', Axis::X);

    let index = slots.push(Slot::new(Piece::new(Vec3::new(2, 2, 0))));
    layer.add_slot(index);
    // Where the member lands, but not part of the layer.
    slots.push(Slot::new(Piece::new(Vec3::new(2, 0, -2))));
    let before = slots.slots.clone();

    assert_eq!(
        layer.turn(&mut slots, 1),
        Err(StructureError::LeftLayer {
            layer: 'X',
            pos: Vec3::new(2, 0, -2)
        })
    );
    assert_eq!(slots.slots, before);
}

#[test]
fn repeated_member_leaves_slots_alone() {
    let mut slots = Slots::new();
    let mut layer = Layer::new('X', Axis::X);

    // The centre of an x layer stays put, so both copies land on one slot.
    let index = slots.push(Slot::new(Piece::new(Vec3::new(2, 0, 0))));
    layer.add_slot(index);
    layer.add_slot(index);
    let before = slots.slots.clone();

    assert_eq!(
        layer.turn(&mut slots, 1),
        Err(StructureError::SlotOccupied(Vec3::new(2, 0, 0)))
    );
    assert_eq!(slots.slots, before);
}
