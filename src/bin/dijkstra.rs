use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use dense_dijkstra::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use dense_dijkstra::input::{parse_graph, InteractiveBuilder};
use dense_dijkstra::{DenseDijkstra, DenseGraph};

/// Prints one line per vertex: `vertex(distance) <- ... <- start`
///
/// Vertices are displayed 1-indexed over the 0-indexed storage.
fn print_summary(result: &ShortestPathResult<f64>) {
    println!("result:");
    for vertex in 0..result.distances.len() {
        match result.distance(vertex) {
            Some(distance) => {
                print!("{}({})", vertex + 1, distance);
                if let Some(path) = result.path_to(vertex) {
                    for hop in path.iter().rev().skip(1) {
                        print!(" <- {}", hop + 1);
                    }
                }
                println!();
            }
            None => println!("{} unreachable", vertex + 1),
        }
    }
}

fn run() -> dense_dijkstra::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!(
            "usage: {} [graphfile]",
            args.first().map(String::as_str).unwrap_or("dijkstra")
        );
        process::exit(1);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = InteractiveBuilder::new(stdin.lock(), stdout.lock());

    let graph: DenseGraph<f64> = match args.get(1) {
        Some(path) => parse_graph(BufReader::new(File::open(path)?))?,
        None => prompter.build()?,
    };
    print!("{}", graph);

    let start = prompter.read_start(graph.size())?;
    let result = DenseDijkstra::new().compute_shortest_paths(&graph, start)?;
    print_summary(&result);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
