//! Option entries and the values they carry.
//!
//! Callers describe a request as an ordered list of [`OptionEntry`] values.
//! Each entry pairs a snake_case field identifier with an [`OptionValue`]
//! that is either a primitive, an ordered list, a nested record, or one of
//! the composite shapes (tags, node-group configurations) the ElastiCache
//! API indexes specially.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Primitive values ────────────────────────────────────────────────────

/// A flat query-parameter value. Integers and booleans keep their native
/// type until the request is serialized for the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Boolean(bool),
    Integer(i64),
    String(String),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

macro_rules! integer_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(n: $ty) -> Self {
                    Self::Integer(i64::from(n))
                }
            }
        )*
    };
}

integer_param!(i8, i16, i32, i64, u8, u16, u32);

// ── Composite values ────────────────────────────────────────────────────

/// Resource tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// One node group (shard) of a cluster-mode replication group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeGroupConfiguration {
    pub primary_availability_zone: String,
    pub replica_availability_zones: Vec<String>,
    pub replica_count: u32,
    /// Keyspace slot range, e.g. `"0-8191"`, or a plain slot number.
    pub slots: ParamValue,
}

impl NodeGroupConfiguration {
    pub fn new<S: Into<ParamValue>>(
        primary_availability_zone: &str,
        replica_availability_zones: &[&str],
        replica_count: u32,
        slots: S,
    ) -> Self {
        Self {
            primary_availability_zone: primary_availability_zone.to_string(),
            replica_availability_zones: replica_availability_zones
                .iter()
                .map(|z| z.to_string())
                .collect(),
            replica_count,
            slots: slots.into(),
        }
    }

    /// The record form consumed by the flattener.
    pub fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::scalar("primary_availability_zone", self.primary_availability_zone.as_str()),
            OptionEntry::list("replica_availability_zones", &self.replica_availability_zones),
            OptionEntry::scalar("replica_count", self.replica_count),
            OptionEntry::scalar("slots", self.slots.clone()),
        ]
    }
}

// ── Option entries ──────────────────────────────────────────────────────

/// The value side of an option entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
    /// Not provided. Dropped when the request is assembled.
    Absent,
    Scalar(ParamValue),
    /// Ordered scalars.
    List(Vec<ParamValue>),
    /// Nested option entries.
    Record(Vec<OptionEntry>),
    /// Ordered nested records, e.g. node-group configurations.
    RecordList(Vec<Vec<OptionEntry>>),
    Tags(Vec<Tag>),
}

impl OptionValue {
    /// Name of this value's shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Absent => "an absent value",
            Self::Scalar(_) => "a scalar",
            Self::List(_) => "a list",
            Self::Record(_) => "a record",
            Self::RecordList(_) => "a list of records",
            Self::Tags(_) => "a tag list",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// A `(field identifier, value)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub field: String,
    pub value: OptionValue,
}

impl OptionEntry {
    pub fn new(field: &str, value: OptionValue) -> Self {
        Self {
            field: field.to_string(),
            value,
        }
    }

    pub fn scalar<V: Into<ParamValue>>(field: &str, value: V) -> Self {
        Self::new(field, OptionValue::Scalar(value.into()))
    }

    /// A scalar that may not have been provided.
    pub fn optional<V: Into<ParamValue>>(field: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => Self::scalar(field, v),
            None => Self::new(field, OptionValue::Absent),
        }
    }

    pub fn list<I>(field: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ParamValue>,
    {
        Self::new(
            field,
            OptionValue::List(values.into_iter().map(Into::into).collect()),
        )
    }

    pub fn record(field: &str, entries: Vec<OptionEntry>) -> Self {
        Self::new(field, OptionValue::Record(entries))
    }

    pub fn tags(field: &str, tags: &[Tag]) -> Self {
        Self::new(field, OptionValue::Tags(tags.to_vec()))
    }

    pub fn node_groups(field: &str, groups: &[NodeGroupConfiguration]) -> Self {
        Self::new(
            field,
            OptionValue::RecordList(groups.iter().map(NodeGroupConfiguration::entries).collect()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_value_display() {
        assert_eq!(ParamValue::from("cache.t3.micro").to_string(), "cache.t3.micro");
        assert_eq!(ParamValue::from(6379u16).to_string(), "6379");
        assert_eq!(ParamValue::from(false).to_string(), "false");
    }

    #[test]
    fn param_value_keeps_native_type() {
        assert_eq!(ParamValue::from(3u32).as_i64(), Some(3));
        assert_eq!(ParamValue::from(true).as_bool(), Some(true));
        assert_eq!(ParamValue::from(3u32).as_str(), None);
    }

    #[test]
    fn param_value_untagged_json() {
        let values = vec![
            ParamValue::from("redis"),
            ParamValue::from(2i32),
            ParamValue::from(true),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["redis",2,true]"#);
        let back: Vec<ParamValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn optional_none_is_absent() {
        let entry = OptionEntry::optional::<&str>("final_snapshot_identifier", None);
        assert!(entry.value.is_absent());
        let entry = OptionEntry::optional("final_snapshot_identifier", Some("final"));
        assert_eq!(entry.value, OptionValue::Scalar(ParamValue::from("final")));
    }

    #[test]
    fn node_group_record_has_four_fields() {
        let group = NodeGroupConfiguration::new("us-east-1a", &["us-east-1b"], 1, "0-8191");
        let fields: Vec<_> = group.entries().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "primary_availability_zone",
                "replica_availability_zones",
                "replica_count",
                "slots"
            ]
        );
    }

    #[test]
    fn shape_names() {
        assert_eq!(OptionValue::List(vec![]).shape(), "a list");
        assert_eq!(OptionValue::Tags(vec![]).shape(), "a tag list");
        assert_eq!(OptionValue::RecordList(vec![]).shape(), "a list of records");
    }
}
