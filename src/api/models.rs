/// One record set as published by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub name: String,
    pub record_type: String,
    pub values: Vec<String>,
    pub ttl: Option<i64>,
}

impl RecordSet {
    /// The published value, taken from the first resource record.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Upsert,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Upsert => "UPSERT",
        }
    }
}

/// A single-record change submitted as one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    pub action: ChangeAction,
    pub name: String,
    pub record_type: String,
    pub ttl: u32,
    pub value: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeInfo {
    pub id: String,
    pub status: String,
}
