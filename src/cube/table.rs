//! Per-size layer tables describing which layers a cube has.

use std::{fmt, str::FromStr};

use hashbrown::HashSet;

use crate::{error::ConstructionError, geometry::Axis};

use super::face::Face;

/// The cube sizes that have a built-in layer table.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum CubeSize {
    Two,
    Three,
}

impl CubeSize {
    pub fn n(&self) -> usize {
        match self {
            CubeSize::Two => 2,
            CubeSize::Three => 3,
        }
    }

    pub fn layer_table(&self) -> LayerTable {
        let spec = LayerSpec::new;

        #[rustfmt::skip]
        let axes = match self {
            CubeSize::Two => [
                vec![spec('R', Axis::X, 1), spec('L', Axis::NegX, -1)],
                vec![spec('U', Axis::Y, 1), spec('D', Axis::NegY, -1)],
                vec![spec('F', Axis::Z, 1), spec('B', Axis::NegZ, -1)],
            ],
            CubeSize::Three => [
                vec![spec('R', Axis::X, 2), spec('M', Axis::NegX, 0), spec('L', Axis::NegX, -2)],
                vec![spec('U', Axis::Y, 2), spec('E', Axis::NegY, 0), spec('D', Axis::NegY, -2)],
                vec![spec('F', Axis::Z, 2), spec('S', Axis::Z, 0), spec('B', Axis::NegZ, -2)],
            ],
        };

        LayerTable { axes }
    }
}

impl FromStr for CubeSize {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2x2x2" => Ok(CubeSize::Two),
            "3x3x3" => Ok(CubeSize::Three),
            other => Err(ConstructionError::UnknownSize(other.to_string())),
        }
    }
}

impl fmt::Display for CubeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n();
        write!(f, "{n}x{n}x{n}")
    }
}

/// One layer: its name, the axis it turns around, and its coordinate along
/// that axis in half-cubie units.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct LayerSpec {
    pub name: char,
    pub axis: Axis,
    pub coord: i32,
}

impl LayerSpec {
    pub fn new(name: char, axis: Axis, coord: i32) -> Self {
        Self { name, axis, coord }
    }
}

/// Layers grouped by principal axis: `axes[0]` are the layers stacked along
/// x, then y, then z.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LayerTable {
    pub axes: [Vec<LayerSpec>; 3],
}

impl LayerTable {
    /// The edge length of the cube this table describes.
    pub fn n(&self) -> usize {
        self.axes[0].len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerSpec> + '_ {
        self.axes.iter().flatten()
    }

    /// Check that the table describes a well formed NxNxN cube.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        let n = self.n();

        for (index, group) in self.axes.iter().enumerate() {
            if group.is_empty() {
                return Err(ConstructionError::EmptyAxis(index));
            }

            if group.len() != n {
                return Err(ConstructionError::UnevenAxes {
                    expected: n,
                    got: group.len(),
                });
            }

            let mut coords = Vec::with_capacity(n);
            for layer in group {
                if layer.axis.index() != index {
                    return Err(ConstructionError::MismatchedAxis {
                        name: layer.name,
                        axis: index,
                    });
                }

                if coords.contains(&layer.coord) {
                    return Err(ConstructionError::DuplicateCoordinate {
                        axis: index,
                        coord: layer.coord,
                    });
                }
                coords.push(layer.coord);
            }

            coords.sort_unstable();
            let expected = (0..n as i32).map(|i| 2 * i - (n as i32 - 1));
            if !coords.iter().copied().eq(expected) {
                return Err(ConstructionError::AsymmetricCoordinates(index));
            }
        }

        let mut names = HashSet::new();
        for layer in self.iter() {
            if !names.insert(layer.name) {
                return Err(ConstructionError::DuplicateLayer(layer.name));
            }
        }

        // Every face needs the outermost layer on its side to share its name.
        let outer = n as i32 - 1;
        for face in Face::ALL {
            let dir = face.dir();
            let is_outer = |layer: &LayerSpec| {
                layer.name == face.name()
                    && layer.coord * dir.component(layer.axis.index()) == outer
            };

            if !self.iter().any(is_outer) {
                return Err(ConstructionError::MissingFaceLayer(face.name()));
            }
        }

        Ok(())
    }
}

#[test]
fn built_in_tables_are_valid() {
    for size in [CubeSize::Two, CubeSize::Three] {
        let table = size.layer_table();
        assert_eq!(table.n(), size.n());
        assert_eq!(table.validate(), Ok(()));
        assert_eq!(size.to_string().parse::<CubeSize>(), Ok(size));
    }
}

#[test]
fn unknown_size() {
    assert_eq!(
        "4x4x4".parse::<CubeSize>(),
        Err(ConstructionError::UnknownSize("4x4x4".to_string()))
    );
}

#[test]
fn malformed_tables() {
    let mut table = CubeSize::Three.layer_table();
    table.axes[1][1].coord = 2;
    assert_eq!(
        table.validate(),
        Err(ConstructionError::DuplicateCoordinate { axis: 1, coord: 2 })
    );

    let mut table = CubeSize::Three.layer_table();
    table.axes[2].pop();
    assert_eq!(
        table.validate(),
        Err(ConstructionError::UnevenAxes {
            expected: 3,
            got: 2
        })
    );

    let mut table = CubeSize::Two.layer_table();
    table.axes[0][0].axis = Axis::Y;
    assert_eq!(
        table.validate(),
        Err(ConstructionError::MismatchedAxis { name: 'R', axis: 0 })
    );

    let mut table = CubeSize::Two.layer_table();
    table.axes[0][0].coord = 3;
    assert_eq!(
        table.validate(),
        Err(ConstructionError::AsymmetricCoordinates(0))
    );

    let mut table = CubeSize::Three.layer_table();
    table.axes[0][1].name = 'U';
    assert_eq!(table.validate(), Err(ConstructionError::DuplicateLayer('U')));

    let mut table = CubeSize::Two.layer_table();
    table.axes[2][1].name = 'Q';
    assert_eq!(table.validate(), Err(ConstructionError::MissingFaceLayer('B')));
}
