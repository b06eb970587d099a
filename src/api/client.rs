use super::models::*;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    /// Lists record sets in `zone_id`, starting at `start_name`/`record_type`
    /// in the provider's ordering.
    async fn list_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        record_type: &str,
    ) -> Result<Vec<RecordSet>>;

    async fn submit_change(&self, zone_id: &str, change: &ChangeRequest) -> Result<ChangeInfo>;
}
