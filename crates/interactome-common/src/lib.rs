//! interactome-common — Shared errors, configuration, and the sandboxed
//! HTTP client used across all Interactome crates.

pub mod config;
pub mod error;
pub mod sandbox;

pub use config::Config;
pub use error::{ApiError, InteractomeError, Result};
pub use sandbox::SandboxClient;
