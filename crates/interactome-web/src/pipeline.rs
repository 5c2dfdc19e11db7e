//! Request-scoped query pipeline: fetch → normalize → build → analyze.
//!
//! Each query is a pure function from (protein identifier, database
//! selection) to a full [`NetworkAnalysis`] or a typed error. Nothing is
//! cached or shared between queries, and no partial result ever escapes:
//! either every stage succeeds or the caller gets the error.

use serde_json::Value;
use tracing::{info, instrument};

use interactome_common::error::{InteractomeError, Result};
use interactome_graph::build::InteractionGraph;
use interactome_graph::metrics::{self, CentralityKind, Scores};
use interactome_sources::sources::SourceKind;

use crate::state::AppState;

/// Everything the rendering layer needs for one completed query.
pub struct NetworkAnalysis {
    pub protein: String,
    pub source: SourceKind,
    /// Column names of the raw interaction table, canonical pair first.
    pub columns: Vec<String>,
    /// Raw interaction rows as flat JSON objects.
    pub rows: Vec<Value>,
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub centralities: Vec<(CentralityKind, Scores)>,
}

/// Run the full pipeline for one query.
#[instrument(skip(state))]
pub async fn run_query(
    state: &AppState,
    protein: &str,
    source: SourceKind,
) -> Result<NetworkAnalysis> {
    let adapter = state.source(source)?;
    let table = adapter.fetch_interactions(protein).await?;

    // Short-circuit before the graph builder: an empty table is the
    // no-data path, never a degenerate graph.
    if table.is_empty() {
        return Err(InteractomeError::NoData {
            database: adapter.name(),
            protein: protein.to_string(),
        });
    }

    let graph = InteractionGraph::from_table(&table);
    let centralities = metrics::all_centralities(&graph)
        .map_err(|e| InteractomeError::Pipeline(e.to_string()))?;

    info!(
        protein,
        source = %source,
        rows = table.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "query analyzed"
    );

    Ok(NetworkAnalysis {
        protein: protein.to_string(),
        source,
        columns: table.columns(),
        rows: table.rows_json(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes: graph.symbols().into_iter().map(String::from).collect(),
        edges: graph
            .edge_symbols()
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
        centralities,
    })
}

impl NetworkAnalysis {
    /// JSON projection served by `/api/network` and embedded into the
    /// results page for the diagram script.
    pub fn to_json(&self) -> Value {
        let centralities: serde_json::Map<String, Value> = self
            .centralities
            .iter()
            .map(|(kind, scores)| {
                let table: serde_json::Map<String, Value> = scores
                    .iter()
                    .map(|(node, score)| (node.clone(), Value::from(*score)))
                    .collect();
                (kind.as_str().to_string(), Value::Object(table))
            })
            .collect();

        serde_json::json!({
            "protein": self.protein,
            "source": self.source.as_str(),
            "node_count": self.node_count,
            "edge_count": self.edge_count,
            "nodes": self.nodes,
            "edges": self.edges.iter().map(|(a, b)| vec![a, b]).collect::<Vec<_>>(),
            "interactions": self.rows,
            "centralities": centralities,
        })
    }
}
