//! PageRank via the iterative power method.
//!
//! Standard damped random-walk model on the undirected graph (each edge
//! walks both ways):
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / degree(u)   for each neighbor u
//! ```
//!
//! with damping `d = 0.85`. Dangling mass (degree-zero nodes cannot occur
//! here, since nodes derive from edges, but the redistribution is kept for
//! the standard contract) spreads uniformly. Scores sum to 1.

use tracing::instrument;

use super::{to_symbol_scores, CentralityError, CentralityKind, Scores};
use crate::build::InteractionGraph;

const DAMPING: f64 = 0.85;
const MAX_ITER: usize = 100;
const TOLERANCE: f64 = 1e-6;

/// Compute PageRank centrality for every protein.
#[instrument(skip(g))]
pub fn pagerank_centrality(g: &InteractionGraph) -> Result<Scores, CentralityError> {
    let graph = &g.graph;
    let n = graph.node_count();

    if n == 0 {
        return Ok(Scores::new());
    }

    let n_f64 = n as f64;
    let base = (1.0 - DAMPING) / n_f64;
    let tol = n_f64 * TOLERANCE;

    // Walk degree: self-loops contribute one outgoing step.
    let neighbors: Vec<Vec<usize>> = graph
        .node_indices()
        .map(|v| graph.neighbors(v).map(|w| w.index()).collect())
        .collect();

    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    for _ in 0..MAX_ITER {
        let dangling: f64 = neighbors
            .iter()
            .enumerate()
            .filter(|(_, nbrs)| nbrs.is_empty())
            .map(|(i, _)| ranks[i])
            .sum();

        for r in &mut new_ranks {
            *r = base + DAMPING * dangling / n_f64;
        }

        for (i, nbrs) in neighbors.iter().enumerate() {
            if !nbrs.is_empty() {
                let share = DAMPING * ranks[i] / nbrs.len() as f64;
                for &j in nbrs {
                    new_ranks[j] += share;
                }
            }
        }

        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < tol {
            return Ok(to_symbol_scores(g, &ranks));
        }
    }

    Err(CentralityError::NonConvergence {
        metric: CentralityKind::PageRank,
        iterations: MAX_ITER,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use interactome_sources::models::{InteractionRecord, InteractionTable};

    fn graph(pairs: &[(&str, &str)]) -> InteractionGraph {
        let table = InteractionTable::new(
            pairs
                .iter()
                .map(|(a, b)| InteractionRecord::new(*a, *b))
                .collect(),
        );
        InteractionGraph::from_table(&table)
    }

    #[test]
    fn scores_sum_to_one() {
        let g = graph(&[("A", "B"), ("B", "C"), ("A", "C"), ("C", "D")]);
        let pr = pagerank_centrality(&g).unwrap();
        let total: f64 = pr.values().sum();
        assert!((total - 1.0).abs() < 1e-6, "sum = {total}");
    }

    #[test]
    fn star_center_has_highest_rank() {
        let g = graph(&[("HUB", "A"), ("HUB", "B"), ("HUB", "C")]);
        let pr = pagerank_centrality(&g).unwrap();
        assert!(pr["HUB"] > pr["A"]);
        assert!((pr["A"] - pr["B"]).abs() < 1e-9);
        assert!((pr["B"] - pr["C"]).abs() < 1e-9);
    }

    #[test]
    fn symmetric_pair_splits_evenly() {
        let g = graph(&[("A", "B")]);
        let pr = pagerank_centrality(&g).unwrap();
        assert!((pr["A"] - 0.5).abs() < 1e-9);
        assert!((pr["B"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn disconnected_components_keep_total_mass() {
        let g = graph(&[("A", "B"), ("C", "D")]);
        let pr = pagerank_centrality(&g).unwrap();
        let total: f64 = pr.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
        for v in pr.values() {
            assert!((v - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn empty_graph_is_empty_scores() {
        let g = InteractionGraph::from_table(&InteractionTable::default());
        assert!(pagerank_centrality(&g).unwrap().is_empty());
    }
}
