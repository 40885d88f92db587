//! Request descriptors and the builder that assembles them.

use crate::action::Action;
use crate::config::{DuplicateKeyPolicy, ElastiCacheConfig, API_VERSION, REQUEST_PATH, SERVICE};
use crate::error::{ElastiCacheError, ElastiCacheResult};
use crate::flatten::{flatten, FlatParam};
use crate::value::{OptionEntry, ParamValue};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use std::collections::BTreeMap;

/// Keys the builder always writes itself.
const RESERVED_KEYS: &[&str] = &["Action", "Version"];

/// RFC 3986 unreserved characters pass through; everything else is encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A finished ElastiCache Query API request, ready for a transport.
///
/// Always contains `Action` and `Version`; never contains an absent value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    path: &'static str,
    service: &'static str,
    action: Action,
    params: BTreeMap<String, ParamValue>,
}

impl QueryRequest {
    pub fn path(&self) -> &str {
        self.path
    }

    pub fn service(&self) -> &str {
        self.service
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Flattened parameters, ordered by key.
    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn into_params(self) -> BTreeMap<String, ParamValue> {
        self.params
    }

    /// `application/x-www-form-urlencoded` body, keys in sorted order.
    pub fn to_form_body(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(&v.to_string())))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// Assembles option entries into a [`QueryRequest`].
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    config: ElastiCacheConfig,
}

impl RequestBuilder {
    pub fn new(config: ElastiCacheConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ElastiCacheConfig {
        &self.config
    }

    /// Flatten `entries`, drop absent values, and add `Action` / `Version`.
    pub fn build(&self, action: Action, entries: &[OptionEntry]) -> ElastiCacheResult<QueryRequest> {
        let flat = flatten(entries).map_err(|e| e.with_action(action.as_str()))?;
        let reject = self.config.duplicate_keys == DuplicateKeyPolicy::Reject;

        let mut params = BTreeMap::new();
        for FlatParam { key, value } in flat {
            let value = match value {
                Some(v) => v,
                None => continue,
            };
            if RESERVED_KEYS.contains(&key.as_str()) {
                if reject {
                    return Err(ElastiCacheError::duplicate_parameter(&key).with_action(action.as_str()));
                }
                log::debug!("Ignoring caller-supplied '{}' for {}", key, action);
                continue;
            }
            if reject && params.contains_key(&key) {
                return Err(ElastiCacheError::duplicate_parameter(&key).with_action(action.as_str()));
            }
            if params.insert(key.clone(), value).is_some() {
                log::debug!("{} parameter '{}' overwritten by a later entry", action, key);
            }
        }

        params.insert("Action".to_string(), ParamValue::from(action.as_str()));
        params.insert("Version".to_string(), ParamValue::from(API_VERSION));

        log::debug!(
            "Built ElastiCache {} request with {} parameters",
            action,
            params.len()
        );

        Ok(QueryRequest {
            path: REQUEST_PATH,
            service: SERVICE,
            action,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ElastiCacheErrorKind;
    use crate::value::{OptionValue, Tag};

    #[test]
    fn empty_request_has_action_and_version_only() {
        let req = RequestBuilder::default()
            .build(Action::DescribeCacheClusters, &[])
            .unwrap();
        assert_eq!(req.path(), "/");
        assert_eq!(req.service(), "elasticache");
        assert_eq!(req.params().len(), 2);
        assert_eq!(req.get("Action"), Some(&ParamValue::from("DescribeCacheClusters")));
        assert_eq!(req.get("Version"), Some(&ParamValue::from("2015-02-02")));
    }

    #[test]
    fn absent_values_are_dropped() {
        let req = RequestBuilder::default()
            .build(
                Action::DeleteCacheCluster,
                &[
                    OptionEntry::scalar("cache_cluster_id", "Test"),
                    OptionEntry::new("final_snapshot_identifier", OptionValue::Absent),
                ],
            )
            .unwrap();
        assert_eq!(req.params().len(), 3);
        assert!(req.get("FinalSnapshotIdentifier").is_none());
    }

    #[test]
    fn duplicates_last_wins_by_default() {
        let req = RequestBuilder::default()
            .build(
                Action::CreateSnapshot,
                &[
                    OptionEntry::scalar("snapshot_name", "first"),
                    OptionEntry::scalar("snapshot_name", "second"),
                ],
            )
            .unwrap();
        assert_eq!(req.get("SnapshotName"), Some(&ParamValue::from("second")));
    }

    #[test]
    fn duplicates_rejected_when_configured() {
        let builder = RequestBuilder::new(
            ElastiCacheConfig::default().with_duplicate_keys(DuplicateKeyPolicy::Reject),
        );
        let err = builder
            .build(
                Action::CreateSnapshot,
                &[
                    OptionEntry::scalar("snapshot_name", "first"),
                    OptionEntry::scalar("snapshot_name", "second"),
                ],
            )
            .unwrap_err();
        assert_eq!(err.kind, ElastiCacheErrorKind::DuplicateParameter);
        assert_eq!(err.field.as_deref(), Some("SnapshotName"));
        assert_eq!(err.action.as_deref(), Some("CreateSnapshot"));
    }

    #[test]
    fn absent_duplicate_does_not_trigger_reject() {
        let builder = RequestBuilder::new(
            ElastiCacheConfig::default().with_duplicate_keys(DuplicateKeyPolicy::Reject),
        );
        let req = builder
            .build(
                Action::CreateSnapshot,
                &[
                    OptionEntry::optional::<&str>("snapshot_name", None),
                    OptionEntry::scalar("snapshot_name", "only"),
                ],
            )
            .unwrap();
        assert_eq!(req.get("SnapshotName"), Some(&ParamValue::from("only")));
    }

    #[test]
    fn caller_cannot_override_action_or_version() {
        let req = RequestBuilder::default()
            .build(
                Action::DescribeSnapshots,
                &[OptionEntry::scalar("version", "2012-11-15")],
            )
            .unwrap();
        assert_eq!(req.get("Version"), Some(&ParamValue::from("2015-02-02")));
    }

    #[test]
    fn shape_errors_carry_the_action() {
        let err = RequestBuilder::default()
            .build(
                Action::CreateCacheCluster,
                &[OptionEntry::scalar("tags", "env=prod")],
            )
            .unwrap_err();
        assert!(err.is_shape_error());
        assert_eq!(err.action.as_deref(), Some("CreateCacheCluster"));
    }

    #[test]
    fn form_body_is_sorted_and_encoded() {
        let req = RequestBuilder::default()
            .build(
                Action::AddTagsToResource,
                &[
                    OptionEntry::scalar("resource_name", "arn:aws:elasticache:us-east-1:123:cluster:c1"),
                    OptionEntry::tags("tags", &[Tag::new("team name", "a&b")]),
                ],
            )
            .unwrap();
        assert_eq!(
            req.to_form_body(),
            "Action=AddTagsToResource\
             &ResourceName=arn%3Aaws%3Aelasticache%3Aus-east-1%3A123%3Acluster%3Ac1\
             &Tags.Tag.1.Key=team%20name\
             &Tags.Tag.1.Value=a%26b\
             &Version=2015-02-02"
        );
    }

    #[test]
    fn serializes_to_json_descriptor() {
        let req = RequestBuilder::default()
            .build(
                Action::RebootCacheCluster,
                &[
                    OptionEntry::scalar("cache_cluster_id", "c1"),
                    OptionEntry::list("cache_node_ids_to_reboot", ["0001"]),
                ],
            )
            .unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["path"], "/");
        assert_eq!(json["service"], "elasticache");
        assert_eq!(json["action"], "RebootCacheCluster");
        assert_eq!(json["params"]["CacheNodeIdsToReboot.CacheNodeId.1"], "0001");
    }
}
