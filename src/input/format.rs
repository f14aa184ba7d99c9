use crate::{DenseGraph, Result};
use std::io::BufRead;

struct ParsedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

/// Parses a graph from the line-oriented directive format
///
/// Recognized directives, one per line:
///
/// ```text
/// size <n>
/// directed <true|false>
/// edge <from> <to> <weight>
/// ```
///
/// Vertex indices are 0-based. Blank lines and lines starting with `#` are
/// skipped. Malformed lines are reported with their line number through the
/// `log` facade and skipped rather than aborting the parse. Edges are
/// collected and applied only after the whole input is read, so directives
/// may appear in any order; with `directed false` each edge is mirrored.
/// Edges that reference vertices outside the declared size, or that carry a
/// negative weight, are reported and dropped.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<DenseGraph<f64>> {
    let mut size = 0usize;
    let mut directed = false;
    let mut edges: Vec<ParsedEdge> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields[0] {
            "size" => {
                if fields.len() != 2 {
                    log::warn!("line {}: invalid input", line_num);
                    continue;
                }
                match fields[1].parse::<usize>() {
                    Ok(n) => size = n,
                    Err(_) => {
                        log::warn!("line {}: failed to parse string {}", line_num, fields[1])
                    }
                }
            }
            "directed" => {
                if fields.len() != 2 {
                    log::warn!("line {}: invalid input", line_num);
                    continue;
                }
                match fields[1] {
                    "true" => directed = true,
                    "false" => directed = false,
                    _ => log::warn!(
                        "line {}: operand to 'directed' must be true or false",
                        line_num
                    ),
                }
            }
            "edge" => {
                if fields.len() != 4 {
                    log::warn!("line {}: invalid input", line_num);
                    continue;
                }
                match (
                    fields[1].parse::<usize>(),
                    fields[2].parse::<usize>(),
                    fields[3].parse::<f64>(),
                ) {
                    (Ok(from), Ok(to), Ok(weight)) => edges.push(ParsedEdge { from, to, weight }),
                    _ => log::warn!("line {}: failed to parse line", line_num),
                }
            }
            other => log::warn!("line {}: unknown directive '{}'", line_num, other),
        }
    }

    let mut graph = DenseGraph::new(size);
    for edge in edges {
        let stored = if directed {
            graph.set_edge(edge.from, edge.to, edge.weight)
        } else {
            graph.set_edge_symmetric(edge.from, edge.to, edge.weight)
        };
        if let Err(err) = stored {
            log::warn!("dropping edge {} -> {}: {}", edge.from, edge.to, err);
        }
    }

    Ok(graph)
}
