use std::time::Duration;

use clap::{Args, Parser, ValueEnum};
use cubestate::{Cube, CubeSize, MoveSequence};
use indicatif::{ProgressBar, ProgressStyle};

mod period;
use period::period;

fn finish_bar(bar: &ProgressBar, duration: Duration, sequences: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    bar.finish_with_message(format!(
        "Done! Checked {sequences} sequence(s) in {secs}.{micros:06} s"
    ));
}

pub fn make_bar(len: u64) -> indicatif::ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}} remaining: [{{eta_precise}}]");

    match ProgressStyle::with_template(&template) {
        Ok(style) => bar.set_style(style.progress_chars("#>-")),
        Err(e) => log::warn!("Invalid progress bar template: {e}"),
    }

    bar
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Apply a move sequence to a solved cube and print its faces
    Execute(MovesOpts),
    /// Apply a move sequence and print the full [x][y][z][face] color state
    State(MovesOpts),
    /// Find how often each sequence must be repeated to return to solved
    Period(PeriodOpts),
}

#[derive(Clone, Args)]
pub struct MovesOpts {
    /// The cube to turn.
    #[clap(long, short, value_enum, default_value = "3x3x3")]
    pub size: Size,

    /// Space separated moves, e.g. "R U R' U'".
    #[clap(default_value = "")]
    pub moves: String,
}

#[derive(Clone, Args)]
pub struct PeriodOpts {
    /// The cube to turn.
    #[clap(long, short, value_enum, default_value = "3x3x3")]
    pub size: Size,

    /// Give up on a sequence after this many repetitions.
    #[clap(long, short, default_value_t = 10_000)]
    pub limit: usize,

    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,

    /// The sequences to check, each one quoted.
    #[clap(required = true)]
    pub sequences: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Size {
    #[value(name = "2x2x2")]
    Two,
    #[value(name = "3x3x3")]
    Three,
}

impl From<Size> for CubeSize {
    fn from(value: Size) -> Self {
        match value {
            Size::Two => CubeSize::Two,
            Size::Three => CubeSize::Three,
        }
    }
}

fn turned_cube(opts: &MovesOpts) -> cubestate::Result<Cube> {
    let mut cube = Cube::new(opts.size.into())?;
    let moves: MoveSequence = opts.moves.parse()?;
    cube.apply(&moves)?;
    log::info!("Applied {} move(s) to a {} cube", moves.len(), CubeSize::from(opts.size));
    Ok(cube)
}

fn execute(opts: &MovesOpts) -> cubestate::Result<()> {
    let cube = turned_cube(opts)?;

    println!("{:?}", cube.cube_to_array()?);
    println!("Solved: {}", if cube.solved()? { "yes" } else { "no" });
    println!();
    print!("{cube}");

    Ok(())
}

fn state(opts: &MovesOpts) -> cubestate::Result<()> {
    let cube = turned_cube(opts)?;
    print!("{}", cube.get_state()?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();

    let result = match opts {
        Opts::Execute(m) => execute(&m),
        Opts::State(m) => state(&m),
        Opts::Period(p) => period(&p),
    };

    if let Err(e) = result {
        log::error!("{e}");
        println!("Error: {e}");
        std::process::exit(1);
    }
}
