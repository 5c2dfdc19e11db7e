//! STRING network REST client.
//!
//! API docs: https://string-db.org/help/api/
//! Endpoint: https://string-db.org/api/json/network
//!
//! Responses are a JSON array of interaction objects. Each object is
//! flattened with dotted-path naming, then `preferredName_A` /
//! `preferredName_B` become the canonical columns. An empty array yields an
//! empty table with no warning of its own; the orchestration layer's generic
//! no-data message covers that case.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use interactome_common::error::{InteractomeError, Result};
use interactome_common::sandbox::SandboxClient;

use super::biogrid::HUMAN_TAXON;
use super::PpiSource;
use crate::flatten::flatten_object;
use crate::models::{InteractionRecord, InteractionTable};

const STRING_API_URL: &str = "https://string-db.org/api/json/network";

const PREFERRED_A: &str = "preferredName_A";
const PREFERRED_B: &str = "preferredName_B";

#[derive(Debug)]
pub struct StringClient {
    client: SandboxClient,
}

impl StringClient {
    pub fn new(client: SandboxClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PpiSource for StringClient {
    fn name(&self) -> &'static str {
        "STRING"
    }

    #[instrument(skip(self))]
    async fn fetch_interactions(&self, protein: &str) -> Result<InteractionTable> {
        let resp = self
            .client
            .get(STRING_API_URL)?
            .query(&[("identifiers", protein), ("species", HUMAN_TAXON)])
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
        let table = normalize_string(&body)?;
        debug!(rows = table.len(), "STRING interactions retrieved");
        Ok(table)
    }
}

/// Convert a STRING response body into an interaction table.
pub fn normalize_string(body: &Value) -> Result<InteractionTable> {
    let network = body.as_array().ok_or_else(|| InteractomeError::Pipeline(
        "STRING returned a non-array payload".to_string(),
    ))?;

    let mut table = InteractionTable::default();

    for entry in network {
        let mut fields = flatten_object(entry);

        let symbol_a = fields
            .get(PREFERRED_A)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let symbol_b = fields
            .get(PREFERRED_B)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        if symbol_a.is_empty() || symbol_b.is_empty() {
            warn!("skipping STRING interaction without preferred names");
            continue;
        }

        fields.remove(PREFERRED_A);
        fields.remove(PREFERRED_B);

        let mut record = InteractionRecord::new(symbol_a, symbol_b);
        record.extra = fields;
        table.push(record);
    }

    Ok(table)
}
