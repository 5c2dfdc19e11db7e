//! PPI network analysis page and API.

use axum::{
    extract::{Query, State},
    response::Html,
    Form, Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use interactome_common::error::{ApiError, InteractomeError};
use interactome_sources::sources::SourceKind;

use crate::pipeline::{run_query, NetworkAnalysis};
use crate::state::SharedState;

/// Navigation HTML template shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Rows shown per table on the HTML page; the API always returns everything.
const MAX_DISPLAY_ROWS: usize = 100;

#[derive(Deserialize)]
pub struct NetworkForm {
    pub protein: String,
    pub source: String,
}

#[derive(Deserialize)]
pub struct NetworkQuery {
    pub protein: String,
    pub source: String,
}

// === Pages ===

pub async fn network_page(State(_state): State<SharedState>) -> Html<String> {
    Html(render_network_page("", SourceKind::BioGrid, None))
}

pub async fn network_submit(
    State(state): State<SharedState>,
    Form(form): Form<NetworkForm>,
) -> Html<String> {
    let protein = form.protein.trim().to_string();

    let source = match form.source.parse::<SourceKind>() {
        Ok(s) => s,
        Err(e) => {
            return Html(render_network_page(
                &protein,
                SourceKind::BioGrid,
                Some(Err(InteractomeError::Pipeline(e))),
            ))
        }
    };

    if protein.is_empty() {
        return Html(render_network_page(&protein, source, None));
    }

    let outcome = run_query(&state, &protein, source).await;
    if let Err(e) = &outcome {
        warn!(%protein, %source, error = %e, "query failed");
    }
    Html(render_network_page(&protein, source, Some(outcome)))
}

// === API Endpoints ===

/// GET /api/network?protein=..&source=.. — full pipeline result as JSON.
pub async fn api_network(
    State(state): State<SharedState>,
    Query(query): Query<NetworkQuery>,
) -> Result<Json<Value>, ApiError> {
    let source = query
        .source
        .parse::<SourceKind>()
        .map_err(|e| ApiError::new(axum::http::StatusCode::BAD_REQUEST, e))?;

    let protein = query.protein.trim();
    if protein.is_empty() {
        return Err(ApiError::new(
            axum::http::StatusCode::BAD_REQUEST,
            "protein identifier must not be empty",
        ));
    }

    let analysis = run_query(&state, protein, source).await?;
    Ok(Json(analysis.to_json()))
}

// === Rendering ===

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => escape(s),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => escape(&other.to_string()),
    }
}

fn render_network_page(
    protein: &str,
    source: SourceKind,
    outcome: Option<Result<NetworkAnalysis, InteractomeError>>,
) -> String {
    let results_html = match &outcome {
        None => String::new(),
        Some(Err(InteractomeError::NoData { database, protein })) => format!(
            r#"<div class="alert alert-warning mt-4">No interaction data found in {} for protein: <strong>{}</strong>. Please check the protein name and try again.</div>"#,
            database,
            escape(protein)
        ),
        Some(Err(err)) => format!(
            r#"<div class="alert alert-danger mt-4">{}</div>"#,
            escape(&err.to_string())
        ),
        Some(Ok(analysis)) => render_results(analysis),
    };

    let source_options: String = SourceKind::ALL
        .iter()
        .map(|kind| {
            let selected = if *kind == source { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                kind.as_str(),
                selected,
                kind.as_str()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-bs-theme="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Interactome — PPI Network Analysis</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">Protein-Protein Interaction Network Analysis</h1>
            <p class="text-muted">Retrieve PPI networks from BioGRID or STRING and calculate centralities</p>
        </div>
    </div>

    <div class="card">
        <div class="card-body">
            <form class="d-flex gap-2" method="POST" action="/">
                <input type="text" name="protein" class="form-control" style="max-width:320px"
                       placeholder="Enter target protein(s), e.g. TP53" value="{protein}" required>
                <select name="source" class="form-select" style="max-width:160px">{options}</select>
                <button type="submit" class="btn btn-primary">Analyze</button>
            </form>
        </div>
    </div>

    {results}
</main>
<script src="/static/js/network.js"></script>
</body>
</html>"#,
        nav = NAV_HTML,
        protein = escape(protein),
        options = source_options,
        results = results_html,
    )
}

fn render_results(analysis: &NetworkAnalysis) -> String {
    let header_cells: String = analysis
        .columns
        .iter()
        .map(|c| format!("<th>{}</th>", escape(c)))
        .collect();

    let body_rows: String = analysis
        .rows
        .iter()
        .take(MAX_DISPLAY_ROWS)
        .map(|row| {
            let cells: String = analysis
                .columns
                .iter()
                .map(|c| {
                    format!(
                        "<td>{}</td>",
                        row.get(c).map(cell).unwrap_or_default()
                    )
                })
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    let truncation_note = if analysis.rows.len() > MAX_DISPLAY_ROWS {
        format!(
            r#"<p class="small text-muted mt-2">Showing the first {} of {} interactions; the full table is available from <code>/api/network</code>.</p>"#,
            MAX_DISPLAY_ROWS,
            analysis.rows.len()
        )
    } else {
        String::new()
    };

    let centrality_cards: String = analysis
        .centralities
        .iter()
        .map(|(kind, scores)| {
            let mut ranked: Vec<(&String, &f64)> = scores.iter().collect();
            ranked.sort_by(|a, b| b.1.total_cmp(a.1));

            let rows: String = ranked
                .iter()
                .take(MAX_DISPLAY_ROWS)
                .map(|(node, score)| {
                    format!(
                        r#"<tr><td class="fw-bold">{}</td><td><code>{:.6}</code></td></tr>"#,
                        escape(node),
                        score
                    )
                })
                .collect();

            format!(
                r#"<div class="card mt-3">
        <div class="card-header"><h6 class="mb-0">{}</h6></div>
        <div class="card-body p-0">
            <table class="table table-dark table-hover mb-0">
                <thead><tr><th>Node</th><th>Score</th></tr></thead>
                <tbody>{}</tbody>
            </table>
        </div>
    </div>"#,
                kind.as_str(),
                rows
            )
        })
        .collect();

    // The diagram script reads this block; keep it valid inside <script>.
    let network_json = serde_json::json!({
        "nodes": analysis.nodes,
        "edges": analysis.edges.iter().map(|(a, b)| vec![a, b]).collect::<Vec<_>>(),
    })
    .to_string()
    .replace("</", "<\\/");

    format!(
        r#"<div class="grid-2 mt-4">
    <div>
        <div class="card">
            <div class="card-header">
                <h6 class="mb-0">PPI Data Information
                    <span class="badge bg-secondary ms-2">{rows} interactions</span>
                </h6>
            </div>
            <div class="card-body p-0">
                <div class="table-scroll">
                    <table class="table table-dark table-hover mb-0">
                        <thead><tr>{header}</tr></thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
            </div>
        </div>
        {note}
        <div class="card mt-3">
            <div class="card-header"><h6 class="mb-0">Network Graph Visualization</h6></div>
            <div class="card-body">
                <p class="text-muted mb-2">Number of Nodes: <strong>{nodes}</strong>
                    &nbsp;·&nbsp; Number of Edges: <strong>{edges}</strong></p>
                <canvas id="network-canvas" width="640" height="640"></canvas>
                <script id="network-data" type="application/json">{data}</script>
            </div>
        </div>
    </div>
    <div>
        <h5 class="section-title">Centrality Measures for {protein} ({source})</h5>
        {centralities}
    </div>
</div>"#,
        rows = analysis.rows.len(),
        header = header_cells,
        body = body_rows,
        note = truncation_note,
        nodes = analysis.node_count,
        edges = analysis.edge_count,
        data = network_json,
        protein = escape(&analysis.protein),
        source = analysis.source.as_str(),
        centralities = centrality_cards,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<b>&\"x\""), "&lt;b&gt;&amp;&quot;x&quot;");
    }

    #[test]
    fn form_page_offers_both_sources() {
        let page = render_network_page("", SourceKind::BioGrid, None);
        assert!(page.contains(r#"<option value="BioGRID" selected>"#));
        assert!(page.contains(r#"<option value="STRING">"#));
    }

    #[test]
    fn no_data_renders_warning_not_error() {
        let outcome = Err(InteractomeError::NoData {
            database: "BioGRID",
            protein: "NOSUCH".to_string(),
        });
        let page = render_network_page("NOSUCH", SourceKind::BioGrid, Some(outcome));
        assert!(page.contains("alert-warning"));
        assert!(!page.contains("alert-danger"));
        assert!(page.contains("NOSUCH"));
    }

    #[test]
    fn upstream_failure_renders_error_alert() {
        let outcome = Err(InteractomeError::Upstream {
            database: "STRING",
            status: axum::http::StatusCode::BAD_GATEWAY,
        });
        let page = render_network_page("TP53", SourceKind::String, Some(outcome));
        assert!(page.contains("alert-danger"));
        assert!(page.contains("STRING"));
    }
}
