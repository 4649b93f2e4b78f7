use std::collections::HashSet;

use crate::{
    Color, ConstructionError, Cube, CubeError, CubeSize, Face, MoveSequence, ParseError,
    SharedCube, Vec3,
};

const SIZES: [CubeSize; 2] = [CubeSize::Two, CubeSize::Three];

const SCRAMBLE: &str = "L' U' F L2 F2 D F R2 B2 L' B2 L' U2 F2 B2 D2 B2 R";

fn cube(size: CubeSize) -> Cube {
    Cube::new(size).unwrap()
}

/// Every slot holds a piece sitting at the slot's position, no piece is there
/// twice, and every orientation is still a right handed orthonormal frame.
fn assert_consistent(cube: &Cube) {
    let n = cube.size();
    let mut homes = HashSet::new();

    for slot in cube.slots().iter() {
        let piece = slot.held().unwrap();
        assert_eq!(piece.pos(), slot.pos());
        assert!(homes.insert(piece.home()), "{} is held twice", piece.home());

        let (right, up, front) = piece.orientation();
        for v in [right, up, front] {
            assert_eq!(v.dot(v), 1);
        }
        assert_eq!(right.dot(up), 0);
        assert_eq!(right.cross(up), front);
    }

    assert_eq!(homes.len(), n * n * n);
}

#[test]
fn new_cubes_are_solved() {
    for size in SIZES {
        let cube = cube(size);
        assert!(cube.solved().unwrap());
        assert_consistent(&cube);
    }
}

#[test]
fn from_size_name() {
    let cube: Cube = "2x2x2".parse().unwrap();
    assert_eq!(cube.size(), 2);

    assert_eq!(
        "5x5x5".parse::<Cube>(),
        Err(CubeError::Construction(ConstructionError::UnknownSize(
            "5x5x5".to_string()
        )))
    );
}

#[test]
fn layer_membership() {
    for size in SIZES {
        let cube = cube(size);
        let n = size.n();

        assert_eq!(cube.slots().len(), n * n * n);
        assert_eq!(cube.layer_names().count(), 3 * n);

        let mut memberships = vec![0; cube.slots().len()];
        for name in cube.layer_names() {
            let layer = cube.layer(name).unwrap();
            assert_eq!(layer.slots().len(), n * n);
            for &slot in layer.slots() {
                memberships[slot] += 1;
            }
        }

        assert!(memberships.iter().all(|&m| m == 3));
    }
}

#[test]
fn turns_leave_other_slots_alone() {
    for size in SIZES {
        let original = cube(size);
        let names: Vec<char> = original.layer_names().collect();

        for name in names {
            let mut cube = original.clone();
            cube.turn(name, 1).unwrap();

            let layer = cube.layer(name).unwrap();
            for index in 0..cube.slots().len() {
                if !layer.slots().contains(&index) {
                    assert_eq!(
                        cube.slots().get(index),
                        original.slots().get(index),
                        "layer {name}, slot {index}"
                    );
                }
            }
        }
    }
}

#[test]
fn turn_then_inverse_restores_everything() {
    for size in SIZES {
        let original = cube(size);
        let names: Vec<char> = original.layer_names().collect();

        for name in names {
            for t in 0..4 {
                let mut cube = original.clone();
                cube.turn(name, t).unwrap();
                assert_consistent(&cube);
                cube.turn(name, (4 - t) % 4).unwrap();
                assert_eq!(cube, original, "layer {name}, {t} turns");
            }

            let mut cube = original.clone();
            cube.turn(name, -1).unwrap();
            cube.turn(name, 5).unwrap();
            assert_eq!(cube, original);
        }
    }
}

#[test]
fn four_quarter_turns_are_identity() {
    let mut cube = cube(CubeSize::Three);
    cube.execute("R R R R").unwrap();
    assert!(cube.solved().unwrap());
    assert_eq!(cube, self::cube(CubeSize::Three));
}

#[test]
fn sexy_move_six_times() {
    let mut cube = cube(CubeSize::Three);

    for i in 1..=6 {
        cube.execute("R U R' U'").unwrap();
        assert_consistent(&cube);
        assert_eq!(cube.solved().unwrap(), i == 6);
    }
}

#[test]
fn r_turn_moves_front_onto_up() {
    let mut cube = cube(CubeSize::Three);
    cube.execute("R").unwrap();

    // The first three slots of U and F are the ones with x = 1.
    let up = cube.face_to_array('U').unwrap();
    assert_eq!(up, vec![3, 3, 3, 2, 2, 2, 2, 2, 2]);

    let front = cube.face_to_array('F').unwrap();
    assert_eq!(front, vec![5, 5, 5, 3, 3, 3, 3, 3, 3]);

    let right = cube.face_to_array('R').unwrap();
    assert!(right.iter().all(|&c| c == 1));
}

#[test]
fn scramble_and_undo() {
    for size in SIZES {
        let mut cube = cube(size);
        let moves: MoveSequence = SCRAMBLE.parse().unwrap();

        for m in &moves {
            cube.apply_move(*m).unwrap();
            assert_consistent(&cube);
        }
        assert!(!cube.solved().unwrap());

        cube.apply(&moves.inverse()).unwrap();
        assert!(cube.solved().unwrap());
        assert!(cube.pieces().all(|p| p.is_home()));
    }
}

#[test]
fn solved_cube_array() {
    let cube = cube(CubeSize::Three);
    let array = cube.cube_to_array().unwrap();

    assert_eq!(array.len(), 54);
    for code in 1..=6 {
        assert_eq!(array.iter().filter(|&&c| c == code).count(), 9);
    }
    assert!(!array.contains(&0));
}

#[test]
fn scrambled_cube_array_keeps_color_counts() {
    let mut cube = cube(CubeSize::Two);
    cube.execute(SCRAMBLE).unwrap();
    let array = cube.cube_to_array().unwrap();

    assert_eq!(array.len(), 24);
    for code in 1..=6 {
        assert_eq!(array.iter().filter(|&&c| c == code).count(), 4);
    }
}

#[test]
fn state_counts_visible_facelets() {
    for size in SIZES {
        let mut cube = cube(size);
        let n = size.n();

        let check = |cube: &Cube| {
            let state = cube.get_state().unwrap();
            assert_eq!(state.size(), n);
            assert_eq!(state.as_slice().len(), n * n * n * 6);

            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        let exterior = [x, y, z].iter().filter(|&&i| i == 0 || i == n - 1).count();
                        let visible = state.cell(x, y, z).iter().filter(|&&c| c != 0).count();
                        assert_eq!(visible, exterior, "cell {x} {y} {z}");
                    }
                }
            }
        };

        check(&cube);
        cube.execute(SCRAMBLE).unwrap();
        check(&cube);
    }
}

#[test]
fn state_of_solved_cube_faces_outward() {
    let cube = cube(CubeSize::Three);
    let state = cube.get_state().unwrap();

    // Cell (2, 2, 2) is the up-right-front corner.
    assert_eq!(state.cell(2, 2, 2), &[1, 2, 3, 0, 0, 0]);
    assert_eq!(state[[0, 1, 1, Face::L.index()]], Color::Orange.code());
    assert_eq!(state.get(1, 1, 1, 0), 0);
}

#[test]
fn bad_moves_leave_cube_untouched() {
    let mut cube = cube(CubeSize::Three);
    cube.execute("R U").unwrap();
    let before = cube.clone();

    assert_eq!(
        cube.execute("F X"),
        Err(CubeError::Parse(ParseError::UnknownLayer('X')))
    );
    assert_eq!(
        cube.execute("F U3"),
        Err(CubeError::Parse(ParseError::UnknownModifier {
            token: "U3".to_string()
        }))
    );
    assert_eq!(cube, before);

    let mut small = self::cube(CubeSize::Two);
    assert_eq!(
        small.execute("R M"),
        Err(CubeError::Parse(ParseError::UnknownLayer('M')))
    );
    assert!(small.solved().unwrap());

    assert!(cube.face_to_array('M').is_err());
    assert!(cube.face_to_array('Q').is_err());
}

#[test]
fn empty_sequence_is_identity() {
    let mut cube = cube(CubeSize::Three);
    cube.execute("").unwrap();
    cube.execute("   ").unwrap();
    assert!(cube.solved().unwrap());
}

#[test]
fn slice_moves() {
    let mut cube = cube(CubeSize::Three);
    cube.execute("M2 E2 S2").unwrap();
    assert!(!cube.solved().unwrap());
    assert_consistent(&cube);

    // Edges swap with their opposites, centres end up back home.
    let edge = cube.slot_at(Vec3::new(0, -2, -2)).unwrap().held().unwrap();
    assert_eq!(edge.home(), Vec3::new(0, 2, 2));

    let centre = cube.slot_at(Vec3::new(0, 2, 0)).unwrap().held().unwrap();
    assert_eq!(centre.home(), Vec3::new(0, 2, 0));
    assert_eq!(centre.facelet(Face::U.dir()), Ok(Some(Color::White)));

    cube.execute("M2 E2 S2").unwrap();
    assert!(cube.solved().unwrap());
}

#[test]
fn display_lists_faces() {
    let cube = cube(CubeSize::Two);
    let text = cube.to_string();

    assert_eq!(text.lines().count(), 6);
    assert_eq!(text.lines().next(), Some("R: RRRR"));
    assert_eq!(text.lines().nth(1), Some("U: WWWW"));
}

#[test]
fn shared_cube_batches_are_atomic() {
    let shared = SharedCube::new(cube(CubeSize::Three));

    std::thread::scope(|s| {
        for _ in 0..4 {
            let shared = shared.clone();
            s.spawn(move || {
                for _ in 0..3 {
                    shared.execute("R U R' U'").unwrap();
                }
            });
        }
    });

    // 12 applications of a period six sequence.
    assert!(shared.solved().unwrap());
    assert_eq!(shared.snapshot(), cube(CubeSize::Three));
    assert_eq!(shared.with(|c| c.size()), 3);
}
