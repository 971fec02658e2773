use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use itinera::{
    input, report,
    search::{
        engine::{SearchEngine, SearchResult},
        heuristic::{
            check_admissibility, AdmissibilityReport, EuclideanHeuristic, Heuristic,
            ManhattanHeuristic, ZeroHeuristic,
        },
    },
};

/// Runs uniform-cost search plus Euclidean- and Manhattan-guided A* over
/// one input graph and reports costs, paths and counters per mode.
#[derive(Parser)]
#[command(name = "itinera-search", version)]
struct Args {
    /// Input file declaring vertices (`id,cell`), edges (`u,v,weight`)
    /// and the endpoints (`S,id` / `D,id`).
    input: PathBuf,

    /// Emit the results as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct JsonMode<'a> {
    mode: &'a str,
    #[serde(flatten)]
    result: &'a SearchResult,
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    admissibility: &'a AdmissibilityReport,
    modes: Vec<JsonMode<'a>>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let problem = match input::read_search_problem(&args.input) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    let (Some(start), Some(goal)) = (problem.start, problem.goal) else {
        eprintln!("Missing S or D in input file.");
        return ExitCode::FAILURE;
    };

    let admissibility = check_admissibility(&problem.graph);
    let engine = SearchEngine::new();
    let modes: [(&str, &dyn Heuristic); 3] = [
        ("UCS", &ZeroHeuristic),
        ("A* Euclidean", &EuclideanHeuristic),
        ("A* Manhattan", &ManhattanHeuristic),
    ];
    let results: Vec<(&str, SearchResult)> = modes
        .iter()
        .map(|(mode, heuristic)| (*mode, engine.search(&problem.graph, start, goal, *heuristic)))
        .collect();

    if args.json {
        let json = JsonReport {
            admissibility: &admissibility,
            modes: results
                .iter()
                .map(|(mode, result)| JsonMode { mode: *mode, result })
                .collect(),
        };
        match serde_json::to_string_pretty(&json) {
            Ok(rendered) => println!("{rendered}"),
            Err(error) => {
                eprintln!("failed to serialise results: {error}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Parsed graph: {} vertices.", problem.graph.vertex_count());
    println!();
    print!("{}", report::render_admissibility(&admissibility));
    for (mode, result) in &results {
        println!();
        print!("{}", report::render_mode(mode, result));
    }
    println!();
    println!("Comparison:");
    let borrowed: Vec<(&str, &SearchResult)> = results
        .iter()
        .map(|(mode, result)| (*mode, result))
        .collect();
    print!("{}", report::render_comparison(&borrowed));

    ExitCode::SUCCESS
}
