//! BioGRID interaction-search REST client.
//!
//! API docs: https://wiki.thebiogrid.org/doku.php/biogridrest
//! Endpoint: https://webservice.thebiogrid.org/interactions
//!
//! Responses are a JSON map of interaction IDs to detail objects. Rows keep
//! the upstream key insertion order; `OFFICIAL_SYMBOL_A` / `OFFICIAL_SYMBOL_B`
//! are renamed to the canonical columns and everything else passes through.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use interactome_common::error::{InteractomeError, Result};
use interactome_common::sandbox::SandboxClient;

use super::PpiSource;
use crate::models::{InteractionRecord, InteractionTable};

const BIOGRID_API_URL: &str = "https://webservice.thebiogrid.org/interactions";

/// NCBI taxon for Homo sapiens; both adapters are scoped to human.
pub(crate) const HUMAN_TAXON: &str = "9606";

const SYMBOL_A: &str = "OFFICIAL_SYMBOL_A";
const SYMBOL_B: &str = "OFFICIAL_SYMBOL_B";

#[derive(Debug)]
pub struct BioGridClient {
    client: SandboxClient,
    access_key: SecretString,
}

impl BioGridClient {
    pub fn new(client: SandboxClient, access_key: SecretString) -> Self {
        Self { client, access_key }
    }
}

#[async_trait]
impl PpiSource for BioGridClient {
    fn name(&self) -> &'static str {
        "BioGRID"
    }

    #[instrument(skip(self))]
    async fn fetch_interactions(&self, protein: &str) -> Result<InteractionTable> {
        let resp = self
            .client
            .get(BIOGRID_API_URL)?
            .query(&[
                ("accessKey", self.access_key.expose_secret()),
                ("format", "json"),
                ("searchNames", "true"),
                ("geneList", protein),
                ("organism", HUMAN_TAXON),
                ("searchbiogridids", "true"),
                ("includeInteractors", "true"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(InteractomeError::Upstream {
                database: self.name(),
                status,
            });
        }

        let body = resp.json::<Value>().await?;
        let table = normalize_biogrid(&body, protein)?;
        debug!(rows = table.len(), "BioGRID interactions retrieved");
        Ok(table)
    }
}

/// Convert a BioGRID response body into an interaction table.
///
/// An empty JSON object means the protein is unknown to BioGRID — surfaced
/// as [`InteractomeError::NoData`] so callers can warn instead of erroring.
pub fn normalize_biogrid(body: &Value, protein: &str) -> Result<InteractionTable> {
    let network = body.as_object().ok_or_else(|| InteractomeError::Pipeline(
        "BioGRID returned a non-object payload".to_string(),
    ))?;

    if network.is_empty() {
        return Err(InteractomeError::NoData {
            database: "BioGRID",
            protein: protein.to_string(),
        });
    }

    let mut table = InteractionTable::default();

    // serde_json preserves key order, so rows come out in the order the API
    // returned the interaction IDs.
    for (interaction_id, detail) in network {
        let Some(fields) = detail.as_object() else {
            warn!(%interaction_id, "skipping non-object BioGRID interaction");
            continue;
        };

        let symbol_a = fields.get(SYMBOL_A).and_then(Value::as_str).unwrap_or("");
        let symbol_b = fields.get(SYMBOL_B).and_then(Value::as_str).unwrap_or("");
        if symbol_a.is_empty() || symbol_b.is_empty() {
            warn!(%interaction_id, "skipping interaction without official symbols");
            continue;
        }

        let mut record = InteractionRecord::new(symbol_a, symbol_b);
        for (key, value) in fields {
            if key != SYMBOL_A && key != SYMBOL_B {
                record.extra.insert(key.clone(), value.clone());
            }
        }
        table.push(record);
    }

    if table.is_empty() {
        return Err(InteractomeError::NoData {
            database: "BioGRID",
            protein: protein.to_string(),
        });
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_keyed_interactions_in_order() {
        let body = json!({
            "103": {
                "OFFICIAL_SYMBOL_A": "TP53",
                "OFFICIAL_SYMBOL_B": "MDM2",
                "EXPERIMENTAL_SYSTEM": "Two-hybrid",
                "ORGANISM_A": 9606
            },
            "88": {
                "OFFICIAL_SYMBOL_A": "TP53",
                "OFFICIAL_SYMBOL_B": "EP300",
                "EXPERIMENTAL_SYSTEM": "Reconstituted Complex"
            }
        });

        let table = normalize_biogrid(&body, "TP53").unwrap();
        assert_eq!(table.len(), 2);

        // Insertion order of the response keys, not numeric order.
        let first = &table.records()[0];
        assert_eq!(first.protein_a, "TP53");
        assert_eq!(first.protein_b, "MDM2");
        assert_eq!(first.extra["EXPERIMENTAL_SYSTEM"], "Two-hybrid");
        assert_eq!(first.extra["ORGANISM_A"], 9606);
        assert!(!first.extra.contains_key("OFFICIAL_SYMBOL_A"));

        assert_eq!(table.records()[1].protein_b, "EP300");
    }

    #[test]
    fn single_interaction_fixture() {
        let body = json!({
            "1": {"OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "MDM2"}
        });
        let table = normalize_biogrid(&body, "TP53").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].protein_a, "TP53");
        assert_eq!(table.records()[0].protein_b, "MDM2");
    }

    #[test]
    fn empty_object_is_no_data() {
        let err = normalize_biogrid(&json!({}), "NOSUCHGENE").unwrap_err();
        assert!(matches!(err, InteractomeError::NoData { database: "BioGRID", .. }));
    }

    #[test]
    fn rows_without_symbols_are_dropped() {
        let body = json!({
            "1": {"OFFICIAL_SYMBOL_A": "", "OFFICIAL_SYMBOL_B": "MDM2"},
            "2": {"OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "MDM2"}
        });
        let table = normalize_biogrid(&body, "TP53").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn all_rows_dropped_is_no_data() {
        let body = json!({
            "1": {"EXPERIMENTAL_SYSTEM": "Two-hybrid"}
        });
        let err = normalize_biogrid(&body, "TP53").unwrap_err();
        assert!(matches!(err, InteractomeError::NoData { .. }));
    }
}
