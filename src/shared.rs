//! A cube that can be handed to several threads.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    cube::{Cube, CubeState},
    error::Result,
    notation::MoveSequence,
};

/// Cloneable handle to one cube behind a lock.
///
/// Turns hold the write lock for the whole call, so a batch of moves passed to
/// [`SharedCube::execute`] is never observed half applied.
#[derive(Clone, Debug)]
pub struct SharedCube {
    inner: Arc<RwLock<Cube>>,
}

impl SharedCube {
    pub fn new(cube: Cube) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cube)),
        }
    }

    pub fn turn(&self, name: char, turns: i32) -> Result<()> {
        self.inner.write().turn(name, turns)
    }

    pub fn execute(&self, moves: &str) -> Result<()> {
        self.inner.write().execute(moves)
    }

    pub fn apply(&self, moves: &MoveSequence) -> Result<()> {
        self.inner.write().apply(moves)
    }

    pub fn solved(&self) -> Result<bool> {
        self.inner.read().solved()
    }

    pub fn cube_to_array(&self) -> Result<Vec<u8>> {
        self.inner.read().cube_to_array()
    }

    pub fn get_state(&self) -> Result<CubeState> {
        self.inner.read().get_state()
    }

    /// Run `f` with shared access to the cube.
    pub fn with<T>(&self, f: impl FnOnce(&Cube) -> T) -> T {
        f(&self.inner.read())
    }

    /// A copy of the current cube.
    pub fn snapshot(&self) -> Cube {
        self.inner.read().clone()
    }
}

impl From<Cube> for SharedCube {
    fn from(value: Cube) -> Self {
        Self::new(value)
    }
}
