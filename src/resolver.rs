use anyhow::{anyhow, Result};
use log::{debug, warn};
use std::time::Duration;

use crate::config::IpResolvers;
use crate::error::DdnsError;

/// Looks up the public IP through an IP-echo service, falling back to a
/// second service once if the first one fails.
pub struct IpResolver {
    client: reqwest::Client,
    primary: String,
    fallback: String,
}

impl IpResolver {
    pub fn new(settings: &IpResolvers) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            primary: settings.ip_resolver.clone(),
            fallback: settings.ip_resolver_fallback.clone(),
        })
    }

    /// Returns the trimmed body of the first resolver that answers. The
    /// address itself is not parsed, only trimmed of whitespace.
    pub async fn resolve(&self) -> Result<String, DdnsError> {
        let primary_err = match self.fetch(&self.primary).await {
            Ok(ip) => return Ok(ip),
            Err(e) => e,
        };
        warn!(
            "Primary IP resolver {} failed: {:#}. Trying fallback {}",
            self.primary, primary_err, self.fallback
        );

        self.fetch(&self.fallback)
            .await
            .map_err(|fallback_err| DdnsError::Resolve {
                primary: format!("{:#}", primary_err),
                fallback: format!("{:#}", fallback_err),
            })
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} answered with HTTP {}", url, status));
        }

        let body = response.text().await?;
        let ip = body.trim();
        if ip.is_empty() {
            return Err(anyhow!("{} returned an empty body", url));
        }

        debug!("{} reports public IP {}", url, ip);
        Ok(ip.to_string())
    }
}
