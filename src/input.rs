//! Line-oriented input parsing for both problem kinds.
//!
//! The shared discipline: lines are trimmed, blank lines and `#` comments
//! are skipped, fields are comma-separated and individually trimmed, and
//! any line matching no rule is dropped without complaint. Only reading
//! the file itself can fail.

use std::{fs, path::Path};

use tracing::debug;

use crate::{
    colouring::graph::ConstraintGraph,
    error::{InputError, Result},
    search::graph::{Graph, VertexId},
};

/// A parsed search input: the graph plus whichever of start/goal the
/// file declared. The driver refuses to search unless both are present.
#[derive(Debug, Default)]
pub struct SearchProblem {
    pub graph: Graph,
    pub start: Option<VertexId>,
    pub goal: Option<VertexId>,
}

/// A parsed colouring input. `colours` stays `None` (reported as
/// `failure` downstream) when no valid `colors=` line appeared.
#[derive(Debug, Default)]
pub struct ColouringProblem {
    pub graph: ConstraintGraph,
    pub colours: Option<u32>,
}

/// Parses a search input:
/// `id,cell` declares a vertex, `u,v,weight` an undirected edge, and
/// `S,id` / `D,id` (key case-insensitive) the start and goal.
pub fn parse_search(input: &str) -> SearchProblem {
    let mut problem = SearchProblem::default();
    for line in input.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match fields.as_slice() {
            [key, id] if key.eq_ignore_ascii_case("s") => {
                if let Ok(id) = id.parse() {
                    problem.start = Some(id);
                }
            }
            [key, id] if key.eq_ignore_ascii_case("d") => {
                if let Ok(id) = id.parse() {
                    problem.goal = Some(id);
                }
            }
            [id, cell] => {
                if let (Ok(id), Ok(cell)) = (id.parse(), cell.parse()) {
                    problem.graph.add_vertex(id, cell);
                }
            }
            [u, v, weight] => {
                if let (Ok(u), Ok(v), Ok(weight)) = (u.parse(), v.parse(), weight.parse()) {
                    problem.graph.add_edge(u, v, weight);
                }
            }
            _ => debug!(line, "ignoring unrecognised input line"),
        }
    }
    problem
}

/// Parses a colouring input: `colors=K` sets the colour count, `u,v`
/// declares an undirected adjacency constraint.
pub fn parse_colouring(input: &str) -> ColouringProblem {
    let mut problem = ColouringProblem::default();
    for line in input.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(count) = line.strip_prefix("colors=") {
            if let Ok(count) = count.trim().parse() {
                problem.colours = Some(count);
            }
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if let [u, v, ..] = fields.as_slice() {
            if let (Ok(u), Ok(v)) = (u.parse(), v.parse()) {
                problem.graph.add_edge(u, v);
                continue;
            }
        }
        debug!(line, "ignoring unrecognised input line");
    }
    problem
}

pub fn read_search_problem(path: &Path) -> Result<SearchProblem> {
    Ok(parse_search(&read(path)?))
}

pub fn read_colouring_problem(path: &Path) -> Result<ColouringProblem> {
    Ok(parse_colouring(&read(path)?))
}

fn read(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?)
}
