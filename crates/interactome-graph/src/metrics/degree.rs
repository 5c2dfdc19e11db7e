//! Degree centrality: `degree(v) / (N - 1)`.

use tracing::instrument;

use super::{to_symbol_scores, Scores};
use crate::build::InteractionGraph;

/// Compute normalized degree centrality for every protein.
///
/// Self-loops contribute 2 to a node's degree, the usual undirected
/// convention. Graphs with one node or fewer score 0.0 (the `N - 1`
/// normalization is undefined there).
#[must_use]
#[instrument(skip(g))]
pub fn degree_centrality(g: &InteractionGraph) -> Scores {
    let n = g.node_count();
    let mut degrees = vec![0.0_f64; n];

    if n > 1 {
        for e in g.graph.edge_indices() {
            if let Some((a, b)) = g.graph.edge_endpoints(e) {
                degrees[a.index()] += 1.0;
                degrees[b.index()] += 1.0;
            }
        }
        let scale = 1.0 / (n as f64 - 1.0);
        for d in &mut degrees {
            *d *= scale;
        }
    }

    to_symbol_scores(g, &degrees)
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
        let dc = degree_centrality(&g);
        assert!((dc["HUB"] - 1.0).abs() < 1e-12);
        for leaf in ["A", "B", "C"] {
            assert!((dc[leaf] - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn values_equal_degree_over_n_minus_one() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
        let dc = degree_centrality(&g);
        for v in dc.values() {
            assert!((v - 2.0 / 3.0).abs() < 1e-12);
            assert!(*v >= 0.0 && *v <= 1.0);
        }
    }

    #[test]
    fn self_loop_counts_twice() {
        let g = graph(&[("A", "A"), ("A", "B")]);
        let dc = degree_centrality(&g);
        // A: loop (2) + edge (1) = 3, over n-1 = 1.
        assert!((dc["A"] - 3.0).abs() < 1e-12);
        assert!((dc["B"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_node_scores_zero() {
        let g = graph(&[("A", "A")]);
        let dc = degree_centrality(&g);
        assert_eq!(dc["A"], 0.0);
    }
}
