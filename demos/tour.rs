//! A short tour through the library: runs every algorithm on small example graphs.
//!
//! Run with `RUST_LOG=debug cargo run --example tour` to see the events emitted by the algorithms.

use itertools::Itertools;
use tracing_subscriber::EnvFilter;
use wgraphs::{algo::*, prelude::*};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    println!("=== Undirected Graph ===");
    let g: Graph<&str> = Graph::from_edges(
        false,
        [
            ("A", "B", 1),
            ("A", "C", 2),
            ("B", "D", 3),
            ("C", "D", 1),
            ("D", "E", 2),
        ],
    );

    println!("Graph:\n{g}");

    println!("\nBFS from A: {:?}", g.bfs("A").collect_vec());
    println!("DFS from A: {:?}", g.dfs("A").collect_vec());

    println!("\nShortest path A to E: {:?}", g.shortest_path_bfs("A", "E"));

    let (path, distance) = g.dijkstra_to("A", "E");
    println!("Dijkstra A to E: {path:?} (distance: {distance})");

    println!("\nHas cycle: {}", g.has_cycle());
    println!("Is bipartite: {}", g.is_bipartite());
    println!(
        "Connected components: {:?}",
        g.connected_components().collect_vec()
    );

    println!("\n=== Directed Graph ===");
    let mut dg: Graph<&str> = Graph::new_directed();
    dg.add_edges(
        [
            ("A", "C"),
            ("B", "C"),
            ("B", "D"),
            ("C", "E"),
            ("D", "F"),
            ("E", "F"),
        ]
        .map(|(u, v)| (u, v, 1u64)),
    );

    println!("Directed Graph:\n{dg}");

    match dg.topological_sort() {
        Ok(order) => println!("\nTopological Sort: {order:?}"),
        Err(e) => println!("\nTopological Sort failed: {e}"),
    }
    println!("Has cycle: {}", dg.has_cycle());

    println!("\n=== Minimum Spanning Tree (Prim's) ===");
    let wg = WeightedGraph::from_edges(
        5,
        [
            (0, 1, 2u64),
            (0, 3, 6),
            (1, 2, 3),
            (1, 3, 8),
            (1, 4, 5),
            (2, 4, 7),
            (3, 4, 9),
        ],
    );

    println!("MST edges (u, v, weight):");
    for WeightedEdge(u, v, w) in wg.prim_mst() {
        println!("  {u} - {v}: {w}");
    }
    println!("Total MST weight: {}", wg.mst_weight());
}
