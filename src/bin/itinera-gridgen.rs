use std::{fmt::Write as _, fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates a synthetic grid-graph input file for the search driver:
/// row-major vertex ids starting at 1, `cell = 10 * row + col`,
/// 4-neighbour edges, start at the top-left and goal at the bottom-right.
#[derive(Parser)]
#[command(name = "itinera-gridgen", version)]
struct Args {
    /// Output file path.
    #[arg(long, default_value = "astar_medium.txt")]
    output: PathBuf,

    /// Number of grid rows.
    #[arg(long, default_value_t = 5)]
    rows: u32,

    /// Number of grid columns (at most 10, so cell ids stay decodable).
    #[arg(long, default_value_t = 6)]
    cols: u32,

    /// Seed for random integer edge weights in 1..=9. Without a seed
    /// every edge has weight 1.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.rows < 1 || !(1..=10).contains(&args.cols) {
        eprintln!("rows must be >= 1 and cols in 1..=10");
        return ExitCode::FAILURE;
    }

    let mut rng = args.seed.map(ChaCha8Rng::seed_from_u64);
    let mut weight = move || match rng.as_mut() {
        Some(rng) => rng.gen_range(1..=9),
        None => 1u32,
    };

    let (rows, cols) = (args.rows, args.cols);
    let mut out = String::from("# generated grid graph\n");
    for x in 0..rows {
        for y in 0..cols {
            let id = x * cols + y + 1;
            let cell = 10 * x + y;
            let _ = writeln!(out, "{id},{cell}");
        }
    }
    for x in 0..rows {
        for y in 0..cols {
            let id = x * cols + y + 1;
            if y + 1 < cols {
                let _ = writeln!(out, "{id},{},{}", id + 1, weight());
            }
            if x + 1 < rows {
                let _ = writeln!(out, "{id},{},{}", id + cols, weight());
            }
        }
    }
    let _ = writeln!(out, "S,1");
    let _ = writeln!(out, "D,{}", rows * cols);

    if let Err(error) = fs::write(&args.output, out) {
        eprintln!("failed to write {}: {error}", args.output.display());
        return ExitCode::FAILURE;
    }
    println!(
        "{} generated (rows={rows}, cols={cols})",
        args.output.display()
    );
    ExitCode::SUCCESS
}
