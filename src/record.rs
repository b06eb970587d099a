use log::debug;

use crate::api::{DnsApiClient, RecordSet};
use crate::config::{MatchPolicy, RecordSettings};
use crate::error::DdnsError;

/// Reads the value currently published for `fqdn`.
///
/// Every record set of the configured type in the listing is a candidate.
/// Names are only compared when `match_name` is set, since the listing
/// starts at `fqdn` but carries on through the names sorted after it. The
/// match policy picks between the first and the last candidate in provider
/// order. `Ok(None)` means no candidate was found, which is distinct from
/// the listing call failing.
pub async fn current_value<C>(
    client: &C,
    zone_id: &str,
    fqdn: &str,
    settings: &RecordSettings,
) -> Result<Option<String>, DdnsError>
where
    C: DnsApiClient,
{
    let record_sets = client
        .list_record_sets(zone_id, fqdn, &settings.record_type)
        .await
        .map_err(|cause| DdnsError::RecordRead {
            fqdn: fqdn.to_string(),
            cause,
        })?;

    debug!(
        "Zone {} listed {} record set(s) from {}",
        zone_id,
        record_sets.len(),
        fqdn
    );
    for set in &record_sets {
        debug!(
            "  {} {} {:?} (ttl {:?})",
            set.name, set.record_type, set.values, set.ttl
        );
    }

    let name = settings.match_name.then_some(fqdn);
    Ok(select_value(
        &record_sets,
        &settings.record_type,
        name,
        settings.match_policy,
    ))
}

fn select_value(
    record_sets: &[RecordSet],
    record_type: &str,
    name: Option<&str>,
    policy: MatchPolicy,
) -> Option<String> {
    let mut candidates = record_sets
        .iter()
        .filter(|set| set.record_type == record_type)
        .filter(|set| name.map_or(true, |name| same_name(&set.name, name)))
        .filter_map(RecordSet::value);

    let value = match policy {
        MatchPolicy::First => candidates.next(),
        MatchPolicy::Last => candidates.last(),
    };
    value.map(str::to_string)
}

/// DNS names compare case-insensitively, with or without the root dot.
fn same_name(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(name: &str, record_type: &str, value: &str) -> RecordSet {
        RecordSet {
            name: name.to_string(),
            record_type: record_type.to_string(),
            values: vec![value.to_string()],
            ttl: Some(300),
        }
    }

    #[test]
    fn test_select_value_policies() {
        let sets = vec![
            set("home.example.com.", "A", "1.1.1.1"),
            set("home.example.com.", "TXT", "\"v=spf1 -all\""),
            set("www.example.com.", "A", "2.2.2.2"),
        ];

        assert_eq!(
            select_value(&sets, "A", None, MatchPolicy::Last).as_deref(),
            Some("2.2.2.2")
        );
        assert_eq!(
            select_value(&sets, "A", None, MatchPolicy::First).as_deref(),
            Some("1.1.1.1")
        );
        assert_eq!(select_value(&sets, "AAAA", None, MatchPolicy::Last), None);
    }

    #[test]
    fn test_select_value_by_name() {
        let sets = vec![
            set("home.example.com.", "A", "1.1.1.1"),
            set("www.example.com.", "A", "2.2.2.2"),
        ];

        assert_eq!(
            select_value(&sets, "A", Some("HOME.example.com"), MatchPolicy::Last).as_deref(),
            Some("1.1.1.1")
        );
        assert_eq!(
            select_value(&sets, "A", Some("nas.example.com."), MatchPolicy::Last),
            None
        );
    }

    #[test]
    fn test_select_value_skips_sets_without_records() {
        let mut empty = set("home.example.com.", "A", "");
        empty.values.clear();
        let sets = vec![set("home.example.com.", "A", "1.1.1.1"), empty];

        assert_eq!(
            select_value(&sets, "A", None, MatchPolicy::Last).as_deref(),
            Some("1.1.1.1")
        );
    }
}
