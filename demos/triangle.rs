//! The three search modes over the weight-5 shortcut triangle: the
//! detour through vertex 2 wins in every mode.

use itinera::report;
use itinera::search::engine::{SearchEngine, SearchResult};
use itinera::search::graph::Graph;
use itinera::search::heuristic::{
    check_admissibility, EuclideanHeuristic, Heuristic, ManhattanHeuristic, ZeroHeuristic,
};

fn main() {
    tracing_subscriber::fmt::init();

    let mut graph = Graph::new();
    graph.add_vertex(1, 0);
    graph.add_vertex(2, 1);
    graph.add_vertex(3, 11);
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 3, 1.0);
    graph.add_edge(1, 3, 5.0);

    print!(
        "{}",
        report::render_admissibility(&check_admissibility(&graph))
    );

    let engine = SearchEngine::new();
    let modes: [(&str, &dyn Heuristic); 3] = [
        ("UCS", &ZeroHeuristic),
        ("A* Euclidean", &EuclideanHeuristic),
        ("A* Manhattan", &ManhattanHeuristic),
    ];
    let results: Vec<(&str, SearchResult)> = modes
        .iter()
        .map(|(mode, heuristic)| (*mode, engine.search(&graph, 1, 3, *heuristic)))
        .collect();

    for (mode, result) in &results {
        println!();
        print!("{}", report::render_mode(mode, result));
    }

    println!();
    let borrowed: Vec<(&str, &SearchResult)> = results
        .iter()
        .map(|(mode, result)| (*mode, result))
        .collect();
    print!("{}", report::render_comparison(&borrowed));
}
