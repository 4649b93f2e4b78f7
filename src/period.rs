//! How many times a move sequence has to be repeated to get back to solved.

use indicatif::ProgressBar;
use parking_lot::Mutex;

use crate::{
    cube::{table::CubeSize, Cube},
    error::Result,
    notation::MoveSequence,
};

/// Repeat `moves` on a solved cube until it is solved again.
///
/// Returns the number of repetitions, or `None` if the cube is still unsolved
/// after `limit` of them.
pub fn period(size: CubeSize, moves: &MoveSequence, limit: usize) -> Result<Option<usize>> {
    let mut cube = Cube::new(size)?;

    for i in 1..=limit {
        cube.apply(moves)?;
        if cube.solved()? {
            return Ok(Some(i));
        }
    }

    log::warn!("No period found for {moves} within {limit} repetitions");

    Ok(None)
}

/// [`period`] for many sequences at once, spread over all cores.
///
/// Results are in the same order as `sequences`. `bar` is advanced once per
/// finished sequence.
pub fn periods_rayon(
    size: CubeSize,
    sequences: &[MoveSequence],
    limit: usize,
    bar: &ProgressBar,
) -> Result<Vec<Option<usize>>> {
    use rayon::prelude::*;

    if sequences.is_empty() {
        return Ok(Vec::new());
    }

    let available_parallelism = num_cpus::get();
    let chunk_size = (sequences.len() / available_parallelism) + 1;

    let results = Mutex::new(vec![None; sequences.len()]);

    sequences
        .par_chunks(chunk_size)
        .enumerate()
        .try_for_each(|(chunk, seqs)| -> Result<()> {
            for (i, seq) in seqs.iter().enumerate() {
                let found = period(size, seq, limit)?;
                results.lock()[chunk * chunk_size + i] = found;
                bar.inc(1);
            }
            Ok(())
        })?;

    Ok(results.into_inner())
}

#[test]
fn sexy_move_has_period_six() {
    let moves = "R U R' U'".parse().unwrap();
    assert_eq!(period(CubeSize::Three, &moves, 100), Ok(Some(6)));
}

#[test]
fn limit_is_respected() {
    let moves = "R U".parse().unwrap();
    // R U has period 105 on a 3x3x3.
    assert_eq!(period(CubeSize::Three, &moves, 104), Ok(None));
    assert_eq!(period(CubeSize::Three, &moves, 105), Ok(Some(105)));
}

#[test]
fn parallel_matches_sequential() {
    let sequences: Vec<MoveSequence> = ["R", "R2", "R U R' U'", "F2 B2", "M2 E2 S2"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let bar = ProgressBar::hidden();
    let parallel = periods_rayon(CubeSize::Three, &sequences, 1000, &bar).unwrap();
    let sequential: Vec<_> = sequences
        .iter()
        .map(|s| period(CubeSize::Three, s, 1000).unwrap())
        .collect();

    assert_eq!(parallel, sequential);
    assert_eq!(parallel[0], Some(4));
    assert_eq!(parallel[1], Some(2));
    assert_eq!(bar.position(), sequences.len() as u64);
}
