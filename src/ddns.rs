use log::{debug, info};
use std::path::Path;

use crate::api::{DnsApiClient, Route53Client};
use crate::config::{self, Config};
use crate::error::DdnsError;
use crate::record;
use crate::reconcile::{Reconciler, Reconciliation};
use crate::resolver::IpResolver;

/// Final outcome of one successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    InSync,
    Updated {
        previous: Option<String>,
        current: String,
        change_id: String,
    },
    DryRun {
        previous: Option<String>,
        current: String,
    },
}

impl RunStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunStatus::InSync => 0,
            RunStatus::Updated { .. } => 2,
            RunStatus::DryRun { .. } => 3,
        }
    }
}

pub struct Route53Ddns<C> {
    config: Config,
    client: C,
    resolver: IpResolver,
    dry_run: bool,
}

impl Route53Ddns<Route53Client> {
    pub async fn new(config_file: &Path) -> Result<Self, DdnsError> {
        let config = config::load_config(config_file).map_err(DdnsError::Config)?;
        let client = Route53Client::new(&config.aws_setting).await;
        Self::with_client(config, client)
    }
}

impl<C: DnsApiClient> Route53Ddns<C> {
    pub fn with_client(config: Config, client: C) -> Result<Self, DdnsError> {
        let resolver = IpResolver::new(&config.ip_resolvers).map_err(DdnsError::Config)?;

        Ok(Self {
            config,
            client,
            resolver,
            dry_run: false,
        })
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// One check-and-update cycle: resolve, read, compare, maybe write.
    /// Any failure stops the cycle before the next step runs.
    pub async fn run(&self) -> Result<RunStatus, DdnsError> {
        let aws = &self.config.aws_setting;
        let record_settings = &self.config.record;

        let reconciler = Reconciler::new(&self.client, record_settings)?.dry_run(self.dry_run);

        let resolved = self.resolver.resolve().await?;
        debug!("Public IP: {}", resolved);

        let published = record::current_value(
            &self.client,
            &aws.aws_hosted_zone_id,
            &aws.aws_fqdn,
            record_settings,
        )
        .await?;
        debug!("Published value for {}: {:?}", aws.aws_fqdn, published);

        let outcome = reconciler
            .reconcile(
                &resolved,
                published.as_deref(),
                &aws.aws_hosted_zone_id,
                &aws.aws_fqdn,
            )
            .await?;

        let status = match outcome {
            Reconciliation::InSync => RunStatus::InSync,
            Reconciliation::Updated(change) => {
                info!("Record {} now points at {}", aws.aws_fqdn, resolved);
                RunStatus::Updated {
                    previous: published,
                    current: resolved,
                    change_id: change.id,
                }
            }
            Reconciliation::DryRun(_) => RunStatus::DryRun {
                previous: published,
                current: resolved,
            },
        };

        Ok(status)
    }
}
