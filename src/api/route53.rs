use super::{client::DnsApiClient, models::*};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_route53::{
    config::{Credentials, Region},
    error::DisplayErrorContext,
    types::{self, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType},
    Client,
};

use crate::config::AwsSetting;

const CREDENTIALS_PROVIDER_NAME: &str = "route53-ddns-config";

pub struct Route53Client {
    client: Client,
}

impl Route53Client {
    /// Builds a client signed with the static credentials from the config
    /// file. The environment credential chain is not consulted.
    pub async fn new(settings: &AwsSetting) -> Self {
        let credentials = Credentials::new(
            settings.aws_access_key_id.clone(),
            settings.aws_secret_access_key.clone(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.aws_region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint_url) = &settings.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl DnsApiClient for Route53Client {
    async fn list_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        record_type: &str,
    ) -> Result<Vec<RecordSet>> {
        let output = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .start_record_name(start_name)
            .start_record_type(RrType::from(record_type))
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to list record sets in zone {}: {}",
                    zone_id,
                    DisplayErrorContext(&e)
                )
            })?;

        let record_sets = output
            .resource_record_sets()
            .iter()
            .map(|set| RecordSet {
                name: set.name().to_string(),
                record_type: set.r#type().as_str().to_string(),
                values: set
                    .resource_records()
                    .iter()
                    .map(|record| record.value().to_string())
                    .collect(),
                ttl: set.ttl(),
            })
            .collect();

        Ok(record_sets)
    }

    async fn submit_change(&self, zone_id: &str, change: &ChangeRequest) -> Result<ChangeInfo> {
        let record = ResourceRecord::builder()
            .value(&change.value)
            .build()
            .context("Failed to build resource record")?;

        let record_set = ResourceRecordSet::builder()
            .name(&change.name)
            .r#type(RrType::from(change.record_type.as_str()))
            .ttl(i64::from(change.ttl))
            .resource_records(record)
            .build()
            .context("Failed to build resource record set")?;

        let batch_change = types::Change::builder()
            .action(types::ChangeAction::from(change.action.as_str()))
            .resource_record_set(record_set)
            .build()
            .context("Failed to build change")?;

        let batch = ChangeBatch::builder()
            .comment(&change.comment)
            .changes(batch_change)
            .build()
            .context("Failed to build change batch")?;

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to change record sets in zone {}: {}",
                    zone_id,
                    DisplayErrorContext(&e)
                )
            })?;

        let info = output
            .change_info()
            .ok_or_else(|| anyhow!("Change response carried no change info"))?;

        Ok(ChangeInfo {
            id: info.id().to_string(),
            status: info.status().as_str().to_string(),
        })
    }
}
