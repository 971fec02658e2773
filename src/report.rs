//! Console rendering of search results and colouring assignments.

use prettytable::{Cell, Row, Table};

use crate::{
    colouring::search::Assignment,
    search::{engine::SearchResult, heuristic::AdmissibilityReport},
};

fn cost_label(cost: Option<f64>) -> String {
    match cost {
        Some(cost) => format!("{cost:.6}"),
        None => "NO PATH".to_owned(),
    }
}

/// One block per search mode: cost (or `NO PATH`), path, counters,
/// runtime.
pub fn render_mode(mode: &str, result: &SearchResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("MODE: {mode}\n"));
    out.push_str(&format!("Optimal cost: {}\n", cost_label(result.cost)));
    if let Some(path) = &result.path {
        let joined: Vec<String> = path.iter().map(ToString::to_string).collect();
        out.push_str(&format!("Path: {}\n", joined.join(" -> ")));
    }
    out.push_str(&format!("Expanded: {}\n", result.expanded));
    out.push_str(&format!("Pushes: {}\n", result.pushes));
    out.push_str(&format!("Max frontier: {}\n", result.max_frontier));
    out.push_str(&format!(
        "Runtime (s): {:.6}\n",
        result.runtime.as_secs_f64()
    ));
    out
}

pub fn render_admissibility(report: &AdmissibilityReport) -> String {
    let yes_no = |ok| if ok { "YES" } else { "NO" };
    format!(
        "Heuristic validity checks for this graph:\n\
         Euclidean admissible (w >= Euclidean for every edge)? {}\n\
         Manhattan admissible (w >= Manhattan for every edge)? {}\n",
        yes_no(report.euclidean),
        yes_no(report.manhattan)
    )
}

/// The cross-mode comparison table.
pub fn render_comparison(results: &[(&str, &SearchResult)]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Mode"),
        Cell::new("Cost"),
        Cell::new("Expanded"),
        Cell::new("Pushes"),
        Cell::new("Max frontier"),
    ]));
    for (mode, result) in results {
        table.add_row(Row::new(vec![
            Cell::new(mode),
            Cell::new(&cost_label(result.cost)),
            Cell::new(&result.expanded.to_string()),
            Cell::new(&result.pushes.to_string()),
            Cell::new(&result.max_frontier.to_string()),
        ]));
    }
    table.to_string()
}

/// The single output line of the colouring driver: either
/// `SOLUTION: {v1: c1, v2: c2, ...}` with variables ascending, or the
/// literal `failure`.
pub fn render_solution(assignment: Option<&Assignment>) -> String {
    match assignment {
        Some(assignment) => {
            let pairs: Vec<String> = assignment
                .iter()
                .map(|(var, colour)| format!("{var}: {colour}"))
                .collect();
            format!("SOLUTION: {{{}}}", pairs.join(", "))
        }
        None => "failure".to_owned(),
    }
}
