//! Colours the Petersen graph. It is 3-chromatic: two colours fail,
//! three succeed.

use itinera::colouring::graph::ConstraintGraph;
use itinera::colouring::search::Colouring;
use itinera::report;

fn petersen() -> ConstraintGraph {
    // Outer 5-cycle 1..=5, inner pentagram 6..=10, spokes between.
    let mut graph = ConstraintGraph::new();
    for i in 0..5u32 {
        graph.add_edge(1 + i, 1 + (i + 1) % 5);
        graph.add_edge(6 + i, 6 + (i + 2) % 5);
        graph.add_edge(1 + i, 6 + i);
    }
    graph
}

fn main() {
    tracing_subscriber::fmt::init();

    for colours in [2, 3] {
        let (assignment, stats) = Colouring::new(petersen(), colours).solve();
        println!("colors={colours}");
        println!("{}", report::render_solution(assignment.as_ref()));
        println!(
            "nodes: {}, backtracks: {}, revisions: {}, prunings: {}",
            stats.nodes_visited, stats.backtracks, stats.revisions, stats.prunings
        );
        println!();
    }
}
