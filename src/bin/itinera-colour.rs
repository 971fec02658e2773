use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use itinera::{colouring::search::Colouring, input, report};

/// Solves a graph-colouring instance and prints exactly one line:
/// `SOLUTION: {v1: c1, ...}` or `failure`.
#[derive(Parser)]
#[command(name = "itinera-colour", version)]
struct Args {
    /// Input file declaring the colour count (`colors=K`) and adjacency
    /// constraints (`u,v`).
    input: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let problem = match input::read_colouring_problem(&args.input) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    // K < 1 (or no colors= line at all) is unsatisfiable by definition;
    // reject it before building a solver.
    let Some(colours @ 1..) = problem.colours else {
        println!("failure");
        return ExitCode::SUCCESS;
    };

    let (assignment, stats) = Colouring::new(problem.graph, colours).solve();
    debug!(?stats, "solve finished");
    println!("{}", report::render_solution(assignment.as_ref()));
    ExitCode::SUCCESS
}
