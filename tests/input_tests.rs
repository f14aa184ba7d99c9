use dense_dijkstra::graph::generators::{generate_random_directed, generate_random_undirected};
use dense_dijkstra::graph::Graph;
use dense_dijkstra::input::{parse_graph, InteractiveBuilder};
use std::io::Cursor;

#[test]
fn test_parse_directed_graph() {
    let text = "\
# three vertices, one-way ring
size 3
directed true
edge 0 1 1
edge 1 2 2.5
edge 2 0 3
";
    let graph = parse_graph(Cursor::new(text)).unwrap();
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.weight_at(0, 1).unwrap(), Some(1.0));
    assert_eq!(graph.weight_at(1, 2).unwrap(), Some(2.5));
    assert_eq!(graph.weight_at(1, 0).unwrap(), None);
}

#[test]
fn test_parse_undirected_graph_mirrors_edges() {
    let text = "size 2\ndirected false\nedge 0 1 4\n";
    let graph = parse_graph(Cursor::new(text)).unwrap();
    assert_eq!(graph.weight_at(0, 1).unwrap(), Some(4.0));
    assert_eq!(graph.weight_at(1, 0).unwrap(), Some(4.0));
}

#[test]
fn test_parse_accepts_directives_in_any_order() {
    // Edges are applied after the full read, so they may precede `size`
    let text = "edge 0 1 7\ndirected true\nsize 2\n";
    let graph = parse_graph(Cursor::new(text)).unwrap();
    assert_eq!(graph.size(), 2);
    assert_eq!(graph.weight_at(0, 1).unwrap(), Some(7.0));
}

#[test]
fn test_parse_skips_malformed_lines() {
    let text = "\
size 4
directed maybe
bogus directive
edge 0 1
edge 0 one 2
edge 0 1 2
";
    let graph = parse_graph(Cursor::new(text)).unwrap();
    // Only the final, well-formed edge survives (mirrored: directed defaults
    // to false and the bad `directed maybe` line is dropped)
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.weight_at(0, 1).unwrap(), Some(2.0));
    assert_eq!(graph.weight_at(1, 0).unwrap(), Some(2.0));
}

#[test]
fn test_parse_drops_out_of_range_and_negative_edges() {
    let text = "\
size 2
directed true
edge 0 5 1
edge 0 1 -3
edge 0 1 6
";
    let graph = parse_graph(Cursor::new(text)).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight_at(0, 1).unwrap(), Some(6.0));
}

#[test]
fn test_parse_empty_input_yields_empty_graph() {
    let graph = parse_graph(Cursor::new("")).unwrap();
    assert_eq!(graph.size(), 0);
}

#[test]
fn test_interactive_build_reads_edges_until_blank_line() {
    let input = Cursor::new("3\n0\n1\n2.5\n1\n2\n4\n\n");
    let mut output = Vec::new();
    let graph = InteractiveBuilder::new(input, &mut output).build().unwrap();

    assert_eq!(graph.size(), 3);
    assert_eq!(graph.weight_at(0, 1).unwrap(), Some(2.5));
    assert_eq!(graph.weight_at(1, 2).unwrap(), Some(4.0));
    assert_eq!(graph.edge_count(), 2);

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("size: "));
    assert!(transcript.contains("from: "));
    assert!(transcript.contains("weight: "));
}

#[test]
fn test_interactive_build_ends_at_eof() {
    // No trailing blank line; end of input finishes edge entry
    let input = Cursor::new("2\n0\n1\n4\n");
    let mut output = Vec::new();
    let graph = InteractiveBuilder::new(input, &mut output).build().unwrap();
    assert_eq!(graph.weight_at(0, 1).unwrap(), Some(4.0));
}

#[test]
fn test_interactive_build_reprompts_on_bad_entries() {
    let input = Cursor::new("2\nx\n9\n0\n1\n1\n\n");
    let mut output = Vec::new();
    let graph = InteractiveBuilder::new(input, &mut output).build().unwrap();
    assert_eq!(graph.weight_at(0, 1).unwrap(), Some(1.0));

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("invalid number"));
    assert!(transcript.contains("out of range"));
}

#[test]
fn test_interactive_size_reprompts_until_parse() {
    let input = Cursor::new("many\n2\n\n");
    let mut output = Vec::new();
    let graph = InteractiveBuilder::new(input, &mut output).build().unwrap();
    assert_eq!(graph.size(), 2);

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("invalid input"));
}

#[test]
fn test_interactive_read_start_bounds() {
    let input = Cursor::new("5\n1\n");
    let mut output = Vec::new();
    let start = InteractiveBuilder::new(input, &mut output)
        .read_start(3)
        .unwrap();
    assert_eq!(start, 1);

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("out of range"));
}

#[test]
fn test_generator_probability_bounds() {
    let empty = generate_random_undirected(6, 0.0, 5).unwrap();
    assert_eq!(empty.edge_count(), 0);

    let full = generate_random_undirected(6, 1.0, 5).unwrap();
    // Every off-diagonal pair present, mirrored, weights in 1..=5
    assert_eq!(full.edge_count(), 6 * 5);
    for a in 0..6 {
        for b in 0..6 {
            if a == b {
                continue;
            }
            let weight = full.weight_at(a, b).unwrap().unwrap();
            assert_eq!(full.weight_at(b, a).unwrap(), Some(weight));
            assert!((1.0..=5.0).contains(&weight));
            assert_eq!(weight.fract(), 0.0, "weights are whole numbers");
        }
    }
}

#[test]
#[should_panic(expected = "edge_probability must be within [0, 1]")]
fn test_undirected_generator_rejects_bad_probability() {
    let _ = generate_random_undirected(4, 1.5, 5);
}

#[test]
#[should_panic(expected = "edge_probability must be within [0, 1]")]
fn test_directed_generator_rejects_bad_probability() {
    let _ = generate_random_directed(4, -0.1, 5);
}

#[test]
fn test_directed_generator_stays_in_bounds() {
    let graph = generate_random_directed(5, 0.5, 9).unwrap();
    assert_eq!(graph.vertex_count(), 5);
    for v in 0..5 {
        assert_eq!(graph.weight_at(v, v).unwrap(), None, "no self-loops");
    }
}
