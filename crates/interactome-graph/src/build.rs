//! Interaction graph construction from a normalized edge table.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use interactome_sources::models::InteractionTable;

/// Undirected simple graph over protein symbols.
///
/// Nodes are exactly the endpoints that appear in the table, so a non-empty
/// table never yields isolated nodes. Duplicate unordered pairs collapse to
/// one edge; a protein interacting with itself keeps a single self-loop.
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    pub graph: UnGraph<String, ()>,
    pub node_map: HashMap<String, NodeIndex>,
}

impl InteractionGraph {
    /// Build the graph from a table, one edge per `Protein_A`/`Protein_B`
    /// row. Callers must short-circuit on an empty table; building from one
    /// yields a degenerate zero-node graph.
    pub fn from_table(table: &InteractionTable) -> Self {
        let mut graph = UnGraph::<String, ()>::default();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
        let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();

        for record in table {
            let a = *node_map
                .entry(record.protein_a.clone())
                .or_insert_with(|| graph.add_node(record.protein_a.clone()));
            let b = *node_map
                .entry(record.protein_b.clone())
                .or_insert_with(|| graph.add_node(record.protein_b.clone()));

            // Unordered pair key: graph semantics, not multigraph.
            let key = if a <= b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                graph.add_edge(a, b, ());
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "interaction graph built"
        );

        Self { graph, node_map }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Protein symbols in node-index order.
    pub fn symbols(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Edge list as symbol pairs, for rendering.
    pub fn edge_symbols(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (self.graph[a].as_str(), self.graph[b].as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interactome_sources::models::{InteractionRecord, InteractionTable};

    fn table(pairs: &[(&str, &str)]) -> InteractionTable {
        InteractionTable::new(
            pairs
                .iter()
                .map(|(a, b)| InteractionRecord::new(*a, *b))
                .collect(),
        )
    }

    #[test]
    fn node_set_equals_distinct_endpoints() {
        let g = InteractionGraph::from_table(&table(&[
            ("TP53", "MDM2"),
            ("TP53", "EP300"),
            ("MDM2", "MDM4"),
        ]));

        let mut symbols = g.symbols();
        symbols.sort_unstable();
        assert_eq!(symbols, vec!["EP300", "MDM2", "MDM4", "TP53"]);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn duplicate_pairs_collapse_to_one_edge() {
        let g = InteractionGraph::from_table(&table(&[
            ("TP53", "MDM2"),
            ("TP53", "MDM2"),
            ("MDM2", "TP53"),
        ]));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn self_interaction_keeps_one_loop() {
        let g = InteractionGraph::from_table(&table(&[("TP53", "TP53"), ("TP53", "TP53")]));
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn empty_table_builds_degenerate_graph() {
        let g = InteractionGraph::from_table(&InteractionTable::default());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }
}
