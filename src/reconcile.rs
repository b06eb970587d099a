use chrono::{DateTime, Utc};
use log::info;

use crate::api::{ChangeAction, ChangeInfo, ChangeRequest, DnsApiClient};
use crate::comment::CommentTemplate;
use crate::config::RecordSettings;
use crate::error::DdnsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    InSync,
    Updated(ChangeInfo),
    /// A change was needed but not submitted.
    DryRun(ChangeRequest),
}

/// Compares the resolved address with the published one and upserts the
/// record when they differ.
pub struct Reconciler<'a, C> {
    client: &'a C,
    settings: &'a RecordSettings,
    template: CommentTemplate,
    dry_run: bool,
}

impl<'a, C: DnsApiClient> Reconciler<'a, C> {
    pub fn new(client: &'a C, settings: &'a RecordSettings) -> Result<Self, DdnsError> {
        let template = CommentTemplate::parse(&settings.comment_template)?;
        Ok(Self {
            client,
            settings,
            template,
            dry_run: false,
        })
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Exact string comparison: `"203.0.113.05"` and `"203.0.113.5"` differ.
    /// A missing record always differs.
    pub async fn reconcile(
        &self,
        resolved: &str,
        published: Option<&str>,
        zone_id: &str,
        fqdn: &str,
    ) -> Result<Reconciliation, DdnsError> {
        if published == Some(resolved) {
            return Ok(Reconciliation::InSync);
        }

        let change = self.change_request(fqdn, resolved, Utc::now());

        if self.dry_run {
            info!(
                "Dry run: would {} {} {} -> {} (ttl {})",
                change.action.as_str(),
                change.record_type,
                change.name,
                change.value,
                change.ttl
            );
            return Ok(Reconciliation::DryRun(change));
        }

        info!(
            "Updating {} record {}: {} -> {}",
            change.record_type,
            fqdn,
            published.unwrap_or("<none>"),
            resolved
        );

        let change_info = self
            .client
            .submit_change(zone_id, &change)
            .await
            .map_err(|cause| DdnsError::RecordWrite {
                fqdn: fqdn.to_string(),
                cause,
            })?;

        info!(
            "Submitted change {} (status {})",
            change_info.id, change_info.status
        );
        Ok(Reconciliation::Updated(change_info))
    }

    pub fn change_request(&self, fqdn: &str, value: &str, now: DateTime<Utc>) -> ChangeRequest {
        ChangeRequest {
            action: ChangeAction::Upsert,
            name: fqdn.to_string(),
            record_type: self.settings.record_type.clone(),
            ttl: self.settings.ttl,
            value: value.to_string(),
            comment: self.template.render(fqdn, now),
        }
    }
}
