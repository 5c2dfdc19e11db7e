//! Centrality metrics over an [`InteractionGraph`](crate::build::InteractionGraph).
//!
//! One module per metric; conventions match the reference definitions
//! (normalized degree, Brandes betweenness, Wasserman-Faust closeness,
//! power-iteration eigenvector and PageRank).

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod eigenvector;
pub mod pagerank;

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::build::InteractionGraph;

pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use degree::degree_centrality;
pub use eigenvector::eigenvector_centrality;
pub use pagerank::pagerank_centrality;

/// The five fixed centrality metrics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CentralityKind {
    Degree,
    Betweenness,
    Closeness,
    Eigenvector,
    PageRank,
}

impl CentralityKind {
    pub const ALL: [CentralityKind; 5] = [
        CentralityKind::Degree,
        CentralityKind::Betweenness,
        CentralityKind::Closeness,
        CentralityKind::Eigenvector,
        CentralityKind::PageRank,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CentralityKind::Degree => "Degree Centrality",
            CentralityKind::Betweenness => "Betweenness Centrality",
            CentralityKind::Closeness => "Closeness Centrality",
            CentralityKind::Eigenvector => "Eigenvector Centrality",
            CentralityKind::PageRank => "PageRank Centrality",
        }
    }
}

impl fmt::Display for CentralityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CentralityError {
    /// The iterative solver did not settle within its iteration budget.
    /// Known to happen for eigenvector centrality on disconnected or
    /// degenerate graphs; the query fails rather than returning a wrong
    /// answer.
    #[error("{metric} failed to converge after {iterations} iterations")]
    NonConvergence {
        metric: CentralityKind,
        iterations: usize,
    },
}

/// Per-node scores for one metric, keyed by protein symbol.
pub type Scores = BTreeMap<String, f64>;

/// Compute all five centrality metrics.
///
/// A failure in any one metric fails the whole call; partial score sets are
/// never returned.
pub fn all_centralities(
    g: &InteractionGraph,
) -> Result<Vec<(CentralityKind, Scores)>, CentralityError> {
    Ok(vec![
        (CentralityKind::Degree, degree_centrality(g)),
        (CentralityKind::Betweenness, betweenness_centrality(g)),
        (CentralityKind::Closeness, closeness_centrality(g)),
        (CentralityKind::Eigenvector, eigenvector_centrality(g)?),
        (CentralityKind::PageRank, pagerank_centrality(g)?),
    ])
}

/// Map node-indexed scores back to protein symbols.
pub(crate) fn to_symbol_scores(g: &InteractionGraph, values: &[f64]) -> Scores {
    g.graph
        .node_indices()
        .map(|idx| (g.graph[idx].clone(), values[idx.index()]))
        .collect()
}
