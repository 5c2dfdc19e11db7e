//! PPI database source clients.

pub mod biogrid;
pub mod string_db;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::models::InteractionTable;
use interactome_common::error::Result;

pub use biogrid::BioGridClient;
pub use string_db::StringClient;

/// Common interface for all PPI database clients.
///
/// Implementations fetch the raw payload for one protein identifier, check
/// the transport status, and normalize the body into an [`InteractionTable`]
/// with the canonical `Protein_A` / `Protein_B` columns. New databases add a
/// variant here instead of duplicating the fetch/normalize pipeline.
#[async_trait]
pub trait PpiSource: fmt::Debug + Send + Sync {
    /// Human-readable database name ("BioGRID", "STRING").
    fn name(&self) -> &'static str;

    /// Retrieve and normalize all interactions reported for `protein`.
    async fn fetch_interactions(&self, protein: &str) -> Result<InteractionTable>;
}

/// User-facing selector between the supported databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    BioGrid,
    String,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::BioGrid, SourceKind::String];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::BioGrid => "BioGRID",
            SourceKind::String => "STRING",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "biogrid" => Ok(SourceKind::BioGrid),
            "string" => Ok(SourceKind::String),
            other => Err(format!("unknown PPI database: {}", other)),
        }
    }
}
