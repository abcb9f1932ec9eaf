//! Small road-network tour of the engine.
//!
//! Builds an undirected network, then runs a traversal, a shortest-path
//! query, and a spanning-tree computation over it. Run with
//! `RUST_LOG=debug` to watch the algorithms narrate their work.

use graphos_core::algorithm::mst::MinimumSpanningTree;
use graphos_core::algorithm::shortest_path::Dijkstra;
use graphos_core::algorithm::traversal::DepthFirstSearch;
use graphos_core::{Graph, GraphKind, NodeId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut network = Graph::with_capacity(GraphKind::Undirected, 6);
    let towns = network.add_nodes(6);
    let roads = [
        (0, 1, 7),
        (0, 2, 9),
        (0, 5, 14),
        (1, 2, 10),
        (1, 3, 15),
        (2, 3, 11),
        (2, 5, 2),
        (3, 4, 6),
        (4, 5, 9),
    ];
    for (u, v, km) in roads {
        network.add_edge(towns[u], towns[v], km)?;
    }

    let visit = DepthFirstSearch::run(&network, towns[0])?;
    println!("depth-first visit order: {:?}", visit.order);

    let shortest = Dijkstra::run(&network, towns[0])?;
    println!(
        "shortest route to town 4: {:?} ({} km)",
        shortest.path_to(NodeId(4)),
        shortest.distance(NodeId(4)).unwrap_or_default()
    );
    println!("distances: {}", serde_json::to_string_pretty(&shortest)?);

    let mst = MinimumSpanningTree::new();
    let backbone = mst.compute(&network)?;
    println!(
        "road backbone: {} edges, {} km total",
        backbone.edge_count(),
        backbone.total_weight
    );

    Ok(())
}
