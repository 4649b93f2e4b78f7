use std::time::Instant;

use cubestate::{period as periods, CubeSize, MoveSequence};

use crate::{finish_bar, make_bar, PeriodOpts};

pub fn period(opts: &PeriodOpts) -> cubestate::Result<()> {
    let size = CubeSize::from(opts.size);

    let sequences = opts
        .sequences
        .iter()
        .map(|s| s.parse::<MoveSequence>())
        .collect::<Result<Vec<_>, _>>()?;

    let start = Instant::now();

    let bar = make_bar(sequences.len() as u64);
    bar.set_message(format!("sequences checked on a {size} cube"));

    let found = if opts.no_parallelism {
        let mut found = Vec::with_capacity(sequences.len());
        for seq in &sequences {
            found.push(periods::period(size, seq, opts.limit)?);
            bar.inc(1);
        }
        found
    } else {
        periods::periods_rayon(size, &sequences, opts.limit, &bar)?
    };

    finish_bar(&bar, start.elapsed(), sequences.len());

    for (seq, period) in sequences.iter().zip(found) {
        match period {
            Some(p) => println!("{seq}: {p}"),
            None => println!("{seq}: more than {}", opts.limit),
        }
    }

    Ok(())
}
