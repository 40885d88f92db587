//! Query-protocol parameter flattening.
//!
//! Turns an ordered list of [`OptionEntry`] values into flat
//! `(key, value)` pairs using the indexing conventions of the AWS Query
//! protocol:
//!
//! ```text
//! preferred_availability_zones: ["a", "b"]
//!   PreferredAvailabilityZones.PreferredAvailabilityZone.1 = a
//!   PreferredAvailabilityZones.PreferredAvailabilityZone.2 = b
//!
//! node_group_configurations: [{ primary_availability_zone: "a", replica_availability_zones: ["b"], .. }]
//!   NodeGroupConfigurations.NodeGroupConfiguration.1.PrimaryAvailabilityZone = a
//!   NodeGroupConfigurations.NodeGroupConfiguration.1.ReplicaAvailabilityZones.AvailabilityZone.1 = b
//!
//! tags: [("env", "prod")]
//!   Tags.Tag.1.Key = env
//!   Tags.Tag.1.Value = prod
//! ```
//!
//! Every field is looked up in [`RULES`] first. Fields without a rule use the
//! mechanical [`pascal_case`] of their identifier.

use crate::error::{ElastiCacheError, ElastiCacheResult};
use crate::value::{OptionEntry, OptionValue, ParamValue, Tag};

/// Fields of one node-group configuration record.
pub const NODE_GROUP_FIELDS: &[&str] = &[
    "primary_availability_zone",
    "replica_availability_zones",
    "replica_count",
    "slots",
];

/// How a field is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One key, mechanical PascalCase of the field identifier.
    Scalar,
    /// `Prefix.<i>` for each element of a scalar list.
    IndexedList { prefix: &'static str },
    /// `Prefix.<i>.<SubKey>` for each record of a record list. Every record
    /// must carry exactly the `required` fields.
    IndexedComposite {
        prefix: &'static str,
        required: &'static [&'static str],
    },
    /// `Prefix.<i>.Key` / `Prefix.<i>.Value` for each tag.
    TagList { prefix: &'static str },
    /// One key with an irregular wire name.
    RenameOnly { key: &'static str },
}

/// A hand-coded wire layout for one field identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatteningRule {
    pub field: &'static str,
    pub strategy: Strategy,
}

const fn list(field: &'static str, prefix: &'static str) -> FlatteningRule {
    FlatteningRule {
        field,
        strategy: Strategy::IndexedList { prefix },
    }
}

const fn rename(field: &'static str, key: &'static str) -> FlatteningRule {
    FlatteningRule {
        field,
        strategy: Strategy::RenameOnly { key },
    }
}

/// Fields whose wire layout cannot be derived mechanically.
pub const RULES: &[FlatteningRule] = &[
    list(
        "preferred_availability_zones",
        "PreferredAvailabilityZones.PreferredAvailabilityZone",
    ),
    list(
        "new_availability_zones",
        "NewAvailabilityZones.PreferredAvailabilityZone",
    ),
    list(
        "preferred_cache_cluster_azs",
        "PreferredCacheClusterAZs.AvailabilityZone",
    ),
    list(
        "replica_availability_zones",
        "ReplicaAvailabilityZones.AvailabilityZone",
    ),
    list("security_group_ids", "SecurityGroupIds.SecurityGroupId"),
    list(
        "cache_security_group_names",
        "CacheSecurityGroupNames.CacheSecurityGroupName",
    ),
    list("snapshot_arns", "SnapshotArns.SnapshotArn"),
    list("cache_node_ids_to_reboot", "CacheNodeIdsToReboot.CacheNodeId"),
    list("cache_node_ids_to_remove", "CacheNodeIdsToRemove.CacheNodeId"),
    list("tag_keys", "TagKeys.member"),
    FlatteningRule {
        field: "node_group_configurations",
        strategy: Strategy::IndexedComposite {
            prefix: "NodeGroupConfigurations.NodeGroupConfiguration",
            required: NODE_GROUP_FIELDS,
        },
    },
    FlatteningRule {
        field: "tags",
        strategy: Strategy::TagList { prefix: "Tags.Tag" },
    },
    rename("az_mode", "AZMode"),
    rename("multi_az_enabled", "MultiAZEnabled"),
    rename("ec2_security_group_name", "EC2SecurityGroupName"),
    rename("ec2_security_group_owner_id", "EC2SecurityGroupOwnerId"),
];

/// Look up the hand-coded rule for `field`, if any.
pub fn rule_for(field: &str) -> Option<&'static FlatteningRule> {
    RULES.iter().find(|rule| rule.field == field)
}

/// Mechanical wire name of a snake_case identifier: `cache_cluster_id` →
/// `CacheClusterId`. Identifiers already in PascalCase come back unchanged.
pub fn pascal_case(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// One flattened query parameter. `value` is `None` when the option was
/// not provided; the request builder drops those.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatParam {
    pub key: String,
    pub value: Option<ParamValue>,
}

/// Flatten `entries` in order.
pub fn flatten(entries: &[OptionEntry]) -> ElastiCacheResult<Vec<FlatParam>> {
    let mut out = Vec::new();
    flatten_into(&mut out, "", entries)?;
    Ok(out)
}

fn flatten_into(out: &mut Vec<FlatParam>, prefix: &str, entries: &[OptionEntry]) -> ElastiCacheResult<()> {
    for entry in entries {
        flatten_entry(out, prefix, entry)?;
    }
    Ok(())
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn push(out: &mut Vec<FlatParam>, key: String, value: Option<ParamValue>) {
    out.push(FlatParam { key, value });
}

fn flatten_entry(out: &mut Vec<FlatParam>, prefix: &str, entry: &OptionEntry) -> ElastiCacheResult<()> {
    let strategy = rule_for(&entry.field)
        .map(|rule| rule.strategy)
        .unwrap_or(Strategy::Scalar);
    let field = entry.field.as_str();

    match strategy {
        Strategy::Scalar => flatten_mechanical(out, prefix, field, &entry.value),
        Strategy::RenameOnly { key } => match &entry.value {
            OptionValue::Absent => {
                push(out, join(prefix, key), None);
                Ok(())
            }
            OptionValue::Scalar(v) => {
                push(out, join(prefix, key), Some(v.clone()));
                Ok(())
            }
            other => Err(ElastiCacheError::invalid_parameter_shape(
                field,
                "a scalar",
                other.shape(),
            )),
        },
        Strategy::IndexedList { prefix: list_prefix } => match &entry.value {
            OptionValue::Absent => Ok(()),
            OptionValue::List(values) => {
                indexed_scalars(out, &join(prefix, list_prefix), values);
                Ok(())
            }
            other => Err(ElastiCacheError::invalid_parameter_shape(
                field,
                "a list",
                other.shape(),
            )),
        },
        Strategy::IndexedComposite {
            prefix: list_prefix,
            required,
        } => match &entry.value {
            OptionValue::Absent => Ok(()),
            OptionValue::RecordList(records) => {
                let base = join(prefix, list_prefix);
                for (i, record) in records.iter().enumerate() {
                    check_record_fields(field, record, required)?;
                    flatten_into(out, &format!("{}.{}", base, i + 1), record)?;
                }
                Ok(())
            }
            other => Err(ElastiCacheError::invalid_parameter_shape(
                field,
                "a list of records",
                other.shape(),
            )),
        },
        Strategy::TagList { prefix: tag_prefix } => match &entry.value {
            OptionValue::Absent => Ok(()),
            OptionValue::Tags(tags) => {
                indexed_tags(out, &join(prefix, tag_prefix), tags);
                Ok(())
            }
            other => Err(ElastiCacheError::invalid_parameter_shape(
                field,
                "a tag list",
                other.shape(),
            )),
        },
    }
}

/// Fallback for fields without a rule. Lists and records use the generic
/// query-protocol `Field.member.<i>` and `Field.<Sub>` layouts.
fn flatten_mechanical(
    out: &mut Vec<FlatParam>,
    prefix: &str,
    field: &str,
    value: &OptionValue,
) -> ElastiCacheResult<()> {
    let key = join(prefix, &pascal_case(field));
    match value {
        OptionValue::Absent => push(out, key, None),
        OptionValue::Scalar(v) => push(out, key, Some(v.clone())),
        OptionValue::List(values) => indexed_scalars(out, &format!("{}.member", key), values),
        OptionValue::Record(entries) => flatten_into(out, &key, entries)?,
        OptionValue::RecordList(records) => {
            for (i, record) in records.iter().enumerate() {
                flatten_into(out, &format!("{}.member.{}", key, i + 1), record)?;
            }
        }
        OptionValue::Tags(tags) => indexed_tags(out, &format!("{}.member", key), tags),
    }
    Ok(())
}

fn indexed_scalars(out: &mut Vec<FlatParam>, prefix: &str, values: &[ParamValue]) {
    for (i, value) in values.iter().enumerate() {
        push(out, format!("{}.{}", prefix, i + 1), Some(value.clone()));
    }
}

fn indexed_tags(out: &mut Vec<FlatParam>, prefix: &str, tags: &[Tag]) {
    for (i, tag) in tags.iter().enumerate() {
        let idx = i + 1;
        push(out, format!("{}.{}.Key", prefix, idx), Some(ParamValue::from(&tag.key)));
        push(out, format!("{}.{}.Value", prefix, idx), Some(ParamValue::from(&tag.value)));
    }
}

/// Every required field must be present exactly once with a value; an
/// `Absent` entry counts as missing.
fn check_record_fields(field: &str, record: &[OptionEntry], required: &[&str]) -> ElastiCacheResult<()> {
    let present: Vec<&str> = record
        .iter()
        .filter(|entry| !entry.value.is_absent())
        .map(|entry| entry.field.as_str())
        .collect();
    let matches = present.len() == required.len() && required.iter().all(|name| present.contains(name));
    if matches {
        return Ok(());
    }
    Err(ElastiCacheError::invalid_parameter_shape(
        field,
        &format!("records with fields [{}]", required.join(", ")),
        &format!("a record with fields [{}]", present.join(", ")),
    ))
}
