//! interactome-sources — PPI source adapters.
//!
//! Each supported database (BioGRID, STRING) implements [`sources::PpiSource`]:
//! fetch raw JSON from the remote service, validate the HTTP status, and
//! normalize the payload into an [`models::InteractionTable`] with the
//! canonical `Protein_A` / `Protein_B` columns.

pub mod flatten;
pub mod models;
pub mod sources;

pub use models::{InteractionRecord, InteractionTable};
pub use sources::{BioGridClient, PpiSource, SourceKind, StringClient};
