//! interactome-web — Web GUI for Interactome
//! Provides a PPI network analysis page with:
//!   - Protein query form (BioGRID / STRING selector)
//!   - Raw interaction table with node/edge counts
//!   - Canvas network diagram
//!   - One table per centrality metric
//!   - JSON API mirror of the pipeline

pub mod handlers;
pub mod pipeline;
pub mod router;
pub mod state;
