//! All pairs shortest paths on a petgraph graph with f64 edge weights.
//!
//! The result is a dense (n,n) matrix indexed by vertex rank, f64::INFINITY for unreachable pairs
//! and 0 on the diagonal.
//! - Dijkstra runs petgraph's dijkstra from each vertex, cost O(n * (m + n log n)). Weights must be non negative.
//! - Floyd-Warshall runs on the dense matrix, cost O(n^3). Negative weights are accepted, negative cycles are not.
//! - Auto chooses Floyd-Warshall for dense graphs and Dijkstra otherwise.
//!

use ndarray::Array2;

use petgraph::algo::dijkstra;
use petgraph::graph::Graph;
use petgraph::EdgeType;

use crate::errors::KernelError;
use crate::spkernel::params::Algorithm;

/// entry (u,v) is the shortest path length from u to v, f64::INFINITY if v is not reachable from u
pub type PathLengthMatrix = Array2<f64>;


/// resolves Auto into Dijkstra or FloydWarshall, other algorithms are returned unchanged.  
/// Floyd-Warshall is chosen if the graph has at least half of the maximal number of edges.
pub fn resolve_algorithm(algorithm : Algorithm, nb_vertices : usize, nb_edges : usize, directed : bool) -> Algorithm {
    match algorithm {
        Algorithm::Auto => {
            let max_edges = if directed {
                nb_vertices * nb_vertices.saturating_sub(1)
            }
            else {
                nb_vertices * nb_vertices.saturating_sub(1) / 2
            };
            let chosen = if max_edges > 0 && 2 * nb_edges >= max_edges {
                Algorithm::FloydWarshall
            }
            else {
                Algorithm::Dijkstra
            };
            log::trace!("auto algorithm nb vertices {} nb edges {} , chosen {:?}", nb_vertices, nb_edges, chosen);
            chosen
        }
        _ => algorithm,
    }
} // end of resolve_algorithm



/// computes all pairs shortest path lengths with requested algorithm
pub fn all_pairs_shortest_paths<N, Ty>(graph : &Graph<N, f64, Ty>, algorithm : Algorithm) -> Result<PathLengthMatrix, KernelError>
    where Ty : EdgeType {
    //
    let algorithm = resolve_algorithm(algorithm, graph.node_count(), graph.edge_count(), graph.is_directed());
    match algorithm {
        Algorithm::FloydWarshall => floyd_warshall_all_pairs(graph),
        _                        => dijkstra_all_pairs(graph),
    }
} // end of all_pairs_shortest_paths



// graphs not built through SpGraph::add_edge can still carry NaN weights
fn check_nan_weights<N, Ty>(graph : &Graph<N, f64, Ty>) -> Result<(), KernelError>
    where Ty : EdgeType {
    if let Some(edge) = graph.raw_edges().iter().find(|e| e.weight.is_nan()) {
        log::error!("NaN weight on edge ({}, {})", edge.source().index(), edge.target().index());
        return Err(KernelError::InvalidWeight{from : edge.source().index(), to : edge.target().index(), weight : edge.weight});
    }
    Ok(())
} // end of check_nan_weights



/// one dijkstra by source vertex
pub fn dijkstra_all_pairs<N, Ty>(graph : &Graph<N, f64, Ty>) -> Result<PathLengthMatrix, KernelError>
    where Ty : EdgeType {
    //
    check_nan_weights(graph)?;
    if let Some(edge) = graph.raw_edges().iter().find(|e| !(e.weight >= 0.)) {
        log::error!("dijkstra_all_pairs negative weight {:.3e} on edge ({}, {})", edge.weight, edge.source().index(), edge.target().index());
        return Err(KernelError::NegativeWeight{from : edge.source().index(), to : edge.target().index(), weight : edge.weight});
    }
    let nb_vertices = graph.node_count();
    let mut lengths = PathLengthMatrix::from_elem((nb_vertices, nb_vertices), f64::INFINITY);
    for source in graph.node_indices() {
        // the map contains only reachable vertices, source included with length 0
        let reached = dijkstra(graph, source, None, |e| *e.weight());
        for (target, length) in reached {
            lengths[[source.index(), target.index()]] = length;
        }
    }
    Ok(lengths)
} // end of dijkstra_all_pairs



/// Floyd-Warshall on dense matrix
pub fn floyd_warshall_all_pairs<N, Ty>(graph : &Graph<N, f64, Ty>) -> Result<PathLengthMatrix, KernelError>
    where Ty : EdgeType {
    //
    check_nan_weights(graph)?;
    let nb_vertices = graph.node_count();
    let directed = graph.is_directed();
    let mut lengths = PathLengthMatrix::from_elem((nb_vertices, nb_vertices), f64::INFINITY);
    for i in 0..nb_vertices {
        lengths[[i,i]] = 0.;
    }
    // multiple edges : keep the lightest
    for edge in graph.raw_edges() {
        let (a, b) = (edge.source().index(), edge.target().index());
        if edge.weight < lengths[[a,b]] {
            lengths[[a,b]] = edge.weight;
        }
        if !directed && edge.weight < lengths[[b,a]] {
            lengths[[b,a]] = edge.weight;
        }
    }
    //
    for k in 0..nb_vertices {
        for i in 0..nb_vertices {
            let d_ik = lengths[[i,k]];
            if d_ik == f64::INFINITY {
                continue;
            }
            for j in 0..nb_vertices {
                let alt = d_ik + lengths[[k,j]];
                if alt < lengths[[i,j]] {
                    lengths[[i,j]] = alt;
                }
            }
        }
    }
    //
    if (0..nb_vertices).any(|i| lengths[[i,i]] < 0.) {
        log::error!("floyd_warshall_all_pairs found a negative cycle");
        return Err(KernelError::NegativeCycle);
    }
    Ok(lengths)
} // end of floyd_warshall_all_pairs



// end of mod tests
