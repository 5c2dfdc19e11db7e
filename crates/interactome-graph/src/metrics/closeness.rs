//! Closeness centrality via per-node BFS.
//!
//! Wasserman-Faust improved formula, which stays meaningful on disconnected
//! graphs: `C(u) = (r / (n-1)) * (r / Σd)` where `r` is the number of nodes
//! reachable from `u` (excluding `u`) and `Σd` the sum of their BFS
//! distances. The second factor is the inverse average distance within the
//! component; the first scales by the fraction of the graph reachable.

use std::collections::VecDeque;

use tracing::instrument;

use super::{to_symbol_scores, Scores};
use crate::build::InteractionGraph;

/// Compute closeness centrality for every protein.
#[must_use]
#[instrument(skip(g))]
pub fn closeness_centrality(g: &InteractionGraph) -> Scores {
    let graph = &g.graph;
    let n = graph.node_count();
    let mut scores = vec![0.0_f64; n];

    if n > 1 {
        for s in graph.node_indices() {
            let si = s.index();

            let mut dist: Vec<i64> = vec![-1; n];
            dist[si] = 0;

            let mut queue = VecDeque::with_capacity(n);
            queue.push_back(s);

            let mut sum_dist: i64 = 0;
            let mut reached: i64 = 0;

            while let Some(u) = queue.pop_front() {
                let ui = u.index();
                if ui != si {
                    sum_dist += dist[ui];
                    reached += 1;
                }
                for v in graph.neighbors(u) {
                    let vi = v.index();
                    if dist[vi] < 0 {
                        dist[vi] = dist[ui] + 1;
                        queue.push_back(v);
                    }
                }
            }

            if sum_dist > 0 {
                let r = reached as f64;
                scores[si] = (r / (n as f64 - 1.0)) * (r / sum_dist as f64);
            }
        }
    }

    to_symbol_scores(g, &scores)
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
    fn star_center_scores_one() {
        let g = graph(&[("HUB", "A"), ("HUB", "B"), ("HUB", "C")]);
        let cc = closeness_centrality(&g);
        assert!((cc["HUB"] - 1.0).abs() < 1e-12);
        // Leaves: distances 1, 2, 2 → sum 5, r = 3, n-1 = 3 → 3/5.
        for leaf in ["A", "B", "C"] {
            assert!((cc[leaf] - 0.6).abs() < 1e-12);
        }
    }

    #[test]
    fn chain_midpoint_beats_endpoints() {
        let g = graph(&[("A", "B"), ("B", "C")]);
        let cc = closeness_centrality(&g);
        assert!((cc["B"] - 1.0).abs() < 1e-12);
        assert!((cc["A"] - 2.0 / 3.0).abs() < 1e-12);
        assert!(cc["B"] > cc["A"]);
    }

    #[test]
    fn disconnected_components_scaled_by_reachable_fraction() {
        // A-B and C-D: each node reaches 1 of 3 others at distance 1.
        // WF: (1/3) * (1/1) = 1/3.
        let g = graph(&[("A", "B"), ("C", "D")]);
        let cc = closeness_centrality(&g);
        for v in cc.values() {
            assert!((v - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn isolated_self_loop_scores_zero() {
        let g = graph(&[("A", "A"), ("B", "C")]);
        let cc = closeness_centrality(&g);
        assert_eq!(cc["A"], 0.0);
    }
}
