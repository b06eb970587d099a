
use crate::api::{ChangeInfo, ChangeRequest, DnsApiClient, RecordSet};
use crate::config::{Config, IpResolvers};
use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub DnsClient {}

    #[async_trait]
    impl DnsApiClient for DnsClient {
        async fn list_record_sets(
            &self,
            zone_id: &str,
            start_name: &str,
            record_type: &str,
        ) -> Result<Vec<RecordSet>>;

        async fn submit_change(&self, zone_id: &str, change: &ChangeRequest) -> Result<ChangeInfo>;
    }
}

pub const ZONE_ID: &str = "Z0123456789ABC";
pub const FQDN: &str = "home.example.com.";

pub fn a_record(name: &str, value: &str) -> RecordSet {
    RecordSet {
        name: name.to_string(),
        record_type: "A".to_string(),
        values: vec![value.to_string()],
        ttl: Some(300),
    }
}

pub fn pending_change() -> ChangeInfo {
    ChangeInfo {
        id: "/change/C2682N5HXP0BZ4".to_string(),
        status: "PENDING".to_string(),
    }
}

pub fn test_config(primary: &str, fallback: &str) -> Config {
    let yaml = format!(
        r#"
            aws_setting:
              aws_access_key_id: "AKIAEXAMPLE"
              aws_secret_access_key: "secret"
              aws_hosted_zone_id: "{ZONE_ID}"
              aws_fqdn: "{FQDN}"
            ip_resolvers:
              ip_resolver: "{primary}"
              ip_resolver_fallback: "{fallback}"
              timeout_secs: 2
        "#
    );
    crate::config::parse_config(&yaml).unwrap()
}

pub fn resolvers(primary: &str, fallback: &str) -> IpResolvers {
    test_config(primary, fallback).ip_resolvers
}
