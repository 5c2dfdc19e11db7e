use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use url::Url;

use crate::error::InteractomeError;

/// An HTTP client capped to an allowlist of upstream PPI database hosts.
/// Requests to any other domain are rejected before they leave the process.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client whose allowlist covers the supported PPI databases.
    pub fn new(timeout: Duration) -> Result<Self, InteractomeError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "webservice.thebiogrid.org", // BioGRID REST service
            "string-db.org",             // STRING network API
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                InteractomeError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, InteractomeError> {
        if !self.is_allowed(url) {
            return Err(InteractomeError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SandboxClient {
        SandboxClient::new(Duration::from_secs(30)).unwrap()
    }

    #[test]
    fn allows_known_ppi_hosts() {
        let c = client();
        assert!(c.is_allowed("https://webservice.thebiogrid.org/interactions"));
        assert!(c.is_allowed("https://string-db.org/api/json/network"));
        // Subdomains of an allowed domain are permitted.
        assert!(c.is_allowed("https://version-12-0.string-db.org/api/json/network"));
    }

    #[test]
    fn rejects_unknown_hosts() {
        let c = client();
        assert!(!c.is_allowed("https://example.com/interactions"));
        assert!(c.get("https://example.com/interactions").is_err());
    }

    #[test]
    fn allow_domain_extends_allowlist() {
        let mut c = client();
        assert!(!c.is_allowed("https://stringdb-static.org/x"));
        c.allow_domain("stringdb-static.org");
        assert!(c.is_allowed("https://stringdb-static.org/x"));
    }
}
