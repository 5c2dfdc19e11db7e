//! interactome-graph — Interaction graph construction and centrality
//! metrics.
//!
//! [`build::InteractionGraph`] turns a normalized interaction table into an
//! undirected simple graph; [`metrics`] computes the five standard
//! centrality measures over it.

pub mod build;
pub mod metrics;

pub use build::InteractionGraph;
pub use metrics::{all_centralities, CentralityError, CentralityKind};
