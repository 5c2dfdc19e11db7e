//! Betweenness centrality via Brandes' algorithm.
//!
//! Unweighted, undirected variant: for each source node run a BFS to count
//! shortest paths, then accumulate dependency scores in reverse BFS order.
//! Complexity O(V * E).
//!
//! Scores are normalized by `1 / ((n-1)(n-2))`. The accumulation visits each
//! unordered pair from both endpoints, so this matches the usual normalized
//! undirected definition (a path midpoint in a 3-chain scores 1.0).

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::instrument;

use super::{to_symbol_scores, Scores};
use crate::build::InteractionGraph;

/// Compute normalized betweenness centrality for every protein.
#[must_use]
#[instrument(skip(g))]
pub fn betweenness_centrality(g: &InteractionGraph) -> Scores {
    let graph = &g.graph;
    let n = graph.node_count();

    let mut cb: Vec<f64> = vec![0.0; n];

    if n > 2 {
        for s in graph.node_indices() {
            let si = s.index();

            // Nodes in order of discovery; farthest popped first.
            let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);

            // predecessors[w] = nodes immediately preceding w on shortest
            // paths from s.
            let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

            // sigma[t]: number of shortest paths from s to t.
            let mut sigma: Vec<f64> = vec![0.0; n];
            sigma[si] = 1.0;

            // dist[t]: BFS distance from s (-1 = unvisited).
            let mut dist: Vec<i64> = vec![-1; n];
            dist[si] = 0;

            let mut queue: VecDeque<NodeIndex> = VecDeque::new();
            queue.push_back(s);

            while let Some(v) = queue.pop_front() {
                let vi = v.index();
                stack.push(v);

                for w in graph.neighbors(v) {
                    let wi = w.index();

                    if dist[wi] < 0 {
                        dist[wi] = dist[vi] + 1;
                        queue.push_back(w);
                    }

                    if dist[wi] == dist[vi] + 1 {
                        sigma[wi] += sigma[vi];
                        predecessors[wi].push(v);
                    }
                }
            }

            // Dependency accumulation in reverse BFS order.
            let mut delta: Vec<f64> = vec![0.0; n];

            while let Some(w) = stack.pop() {
                let wi = w.index();

                for &v in &predecessors[wi] {
                    let vi = v.index();
                    if sigma[wi] > 0.0 {
                        delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
                    }
                }

                if wi != si {
                    cb[wi] += delta[wi];
                }
            }
        }

        let scale = 1.0 / ((n as f64 - 1.0) * (n as f64 - 2.0));
        for c in &mut cb {
            *c *= scale;
        }
    }

    to_symbol_scores(g, &cb)
}
