use thiserror::Error;

use crate::comment::TemplateError;

/// Failures that abort a run. Each kind maps to its own exit code so a
/// scheduler can tell them apart.
#[derive(Debug, Error)]
pub enum DdnsError {
    #[error("configuration error: {0:#}")]
    Config(anyhow::Error),

    #[error("could not resolve public IP (primary: {primary}; fallback: {fallback})")]
    Resolve { primary: String, fallback: String },

    #[error("could not read current record for {fqdn}: {cause:#}")]
    RecordRead {
        fqdn: String,
        cause: anyhow::Error,
    },

    #[error("could not render change comment: {0}")]
    Template(#[from] TemplateError),

    #[error("could not update record for {fqdn}: {cause:#}")]
    RecordWrite {
        fqdn: String,
        cause: anyhow::Error,
    },
}

impl DdnsError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DdnsError::Config(_) => 10,
            DdnsError::Resolve { .. } => 11,
            DdnsError::RecordRead { .. } => 12,
            DdnsError::Template(_) => 13,
            DdnsError::RecordWrite { .. } => 14,
        }
    }
}
