use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::comment::CommentTemplate;

pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const DEFAULT_RESOLVER_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RECORD_TYPE: &str = "A";
pub const DEFAULT_RECORD_TTL: u32 = 300;
pub const DEFAULT_COMMENT_TEMPLATE: &str = "Updating Route53 record for {fqdn} at {timestamp}";

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub aws_setting: AwsSetting,

    #[validate(nested)]
    pub ip_resolvers: IpResolvers,

    #[serde(default)]
    #[validate(nested)]
    pub record: RecordSettings,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AwsSetting {
    #[validate(length(min = 1, message = "AWS access key id cannot be empty"))]
    pub aws_access_key_id: String,

    #[validate(length(min = 1, message = "AWS secret access key cannot be empty"))]
    pub aws_secret_access_key: String,

    #[validate(length(min = 1, message = "Hosted zone ID cannot be empty"))]
    pub aws_hosted_zone_id: String,

    #[validate(length(min = 1, message = "FQDN cannot be empty"))]
    pub aws_fqdn: String,

    #[serde(default = "default_region")]
    #[validate(length(min = 1, message = "AWS region cannot be empty"))]
    pub aws_region: String,

    /// Overrides the Route53 API endpoint, e.g. for a local emulator.
    #[serde(default)]
    #[validate(url(message = "AWS endpoint must be a valid URL"))]
    pub aws_endpoint_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct IpResolvers {
    #[validate(url(message = "Primary IP resolver must be a valid URL"))]
    pub ip_resolver: String,

    #[validate(url(message = "Fallback IP resolver must be a valid URL"))]
    pub ip_resolver_fallback: String,

    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, message = "Resolver timeout must be greater than 0"))]
    pub timeout_secs: u64,
}

/// Settings for the record being reconciled. Built once at startup and
/// handed to the reconciler as-is.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordSettings {
    #[serde(default = "default_record_type")]
    #[validate(custom(function = "validate_record_type"))]
    pub record_type: String,

    #[serde(default = "default_ttl")]
    #[validate(range(min = 1, message = "TTL must be greater than 0"))]
    pub ttl: u32,

    #[serde(default = "default_comment_template")]
    #[validate(custom(function = "validate_comment_template"))]
    pub comment_template: String,

    #[serde(default)]
    pub match_policy: MatchPolicy,

    /// Only consider record sets named exactly like the FQDN. Off by default:
    /// the listing starts at the FQDN but also returns the sets sorted after
    /// it.
    #[serde(default)]
    pub match_name: bool,
}

impl Default for RecordSettings {
    fn default() -> Self {
        Self {
            record_type: default_record_type(),
            ttl: default_ttl(),
            comment_template: default_comment_template(),
            match_policy: MatchPolicy::default(),
            match_name: false,
        }
    }
}

/// Which matching record set wins when the provider returns several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    First,
    #[default]
    Last,
}

fn default_region() -> String {
    DEFAULT_AWS_REGION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_RESOLVER_TIMEOUT_SECS
}

fn default_record_type() -> String {
    DEFAULT_RECORD_TYPE.to_string()
}

fn default_ttl() -> u32 {
    DEFAULT_RECORD_TTL
}

fn default_comment_template() -> String {
    DEFAULT_COMMENT_TEMPLATE.to_string()
}

fn validate_record_type(record_type: &str) -> Result<(), ValidationError> {
    match record_type {
        "A" | "AAAA" => Ok(()),
        _ => {
            let mut err = ValidationError::new("record_type");
            err.message = Some("Record type must be A or AAAA".into());
            Err(err)
        }
    }
}

fn validate_comment_template(template: &str) -> Result<(), ValidationError> {
    CommentTemplate::parse(template).map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("comment_template");
        err.message = Some(e.to_string().into());
        err
    })
}
