//! ElastiCache operations.
//!
//! Each operation takes its required parameters positionally plus a typed
//! options struct, lowers both into [`OptionEntry`] values, and hands them to
//! the [`RequestBuilder`]. Unset options become `Absent` entries, which the
//! builder drops; empty lists emit no keys.
//!
//! Reference: <https://docs.aws.amazon.com/AmazonElastiCache/latest/APIReference/>

use crate::action::Action;
use crate::config::ElastiCacheConfig;
use crate::error::ElastiCacheResult;
use crate::request::{QueryRequest, RequestBuilder};
use crate::value::{NodeGroupConfiguration, OptionEntry, Tag};
use serde::{Deserialize, Serialize};

// ── Enumerated option values ────────────────────────────────────────────

/// Whether Memcached nodes are created in one or several availability zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AzMode {
    SingleAz,
    CrossAz,
}

impl AzMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleAz => "single-az",
            Self::CrossAz => "cross-az",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    System,
    User,
}

impl SnapshotSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTopicStatus {
    Active,
    Inactive,
}

impl NotificationTopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

// ── Options ─────────────────────────────────────────────────────────────

/// An options struct that lowers into option entries.
pub trait QueryOptions {
    fn entries(&self) -> Vec<OptionEntry>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CopySnapshotOptions {
    /// S3 bucket to export the copy to.
    pub target_bucket: Option<String>,
}

impl QueryOptions for CopySnapshotOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![OptionEntry::optional("target_bucket", self.target_bucket.as_deref())]
    }
}

/// Optional parameters of `CreateCacheCluster`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCacheClusterOptions {
    pub replication_group_id: Option<String>,
    pub az_mode: Option<AzMode>,
    pub preferred_availability_zone: Option<String>,
    /// One zone per node; sent as `PreferredAvailabilityZones.PreferredAvailabilityZone.N`.
    pub preferred_availability_zones: Vec<String>,
    pub engine_version: Option<String>,
    pub cache_parameter_group_name: Option<String>,
    pub cache_subnet_group_name: Option<String>,
    pub cache_security_group_names: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub tags: Vec<Tag>,
    /// S3 ARNs of Redis RDB snapshots to seed the cluster from.
    pub snapshot_arns: Vec<String>,
    pub snapshot_name: Option<String>,
    pub preferred_maintenance_window: Option<String>,
    pub port: Option<u16>,
    pub notification_topic_arn: Option<String>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub snapshot_retention_limit: Option<u32>,
    pub snapshot_window: Option<String>,
    pub auth_token: Option<String>,
}

impl QueryOptions for CreateCacheClusterOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("replication_group_id", self.replication_group_id.as_deref()),
            OptionEntry::optional("az_mode", self.az_mode.map(|m| m.as_str())),
            OptionEntry::optional("preferred_availability_zone", self.preferred_availability_zone.as_deref()),
            OptionEntry::list("preferred_availability_zones", &self.preferred_availability_zones),
            OptionEntry::optional("engine_version", self.engine_version.as_deref()),
            OptionEntry::optional("cache_parameter_group_name", self.cache_parameter_group_name.as_deref()),
            OptionEntry::optional("cache_subnet_group_name", self.cache_subnet_group_name.as_deref()),
            OptionEntry::list("cache_security_group_names", &self.cache_security_group_names),
            OptionEntry::list("security_group_ids", &self.security_group_ids),
            OptionEntry::tags("tags", &self.tags),
            OptionEntry::list("snapshot_arns", &self.snapshot_arns),
            OptionEntry::optional("snapshot_name", self.snapshot_name.as_deref()),
            OptionEntry::optional("preferred_maintenance_window", self.preferred_maintenance_window.as_deref()),
            OptionEntry::optional("port", self.port),
            OptionEntry::optional("notification_topic_arn", self.notification_topic_arn.as_deref()),
            OptionEntry::optional("auto_minor_version_upgrade", self.auto_minor_version_upgrade),
            OptionEntry::optional("snapshot_retention_limit", self.snapshot_retention_limit),
            OptionEntry::optional("snapshot_window", self.snapshot_window.as_deref()),
            OptionEntry::optional("auth_token", self.auth_token.as_deref()),
        ]
    }
}

/// Optional parameters of `CreateReplicationGroup`.
///
/// Cluster-mode-disabled groups use `primary_cluster_id` or
/// `num_cache_clusters`; cluster-mode-enabled groups describe their shards
/// with `num_node_groups` / `replicas_per_node_group` or explicit
/// `node_group_configurations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateReplicationGroupOptions {
    pub primary_cluster_id: Option<String>,
    pub automatic_failover_enabled: Option<bool>,
    pub multi_az_enabled: Option<bool>,
    pub num_cache_clusters: Option<u32>,
    pub preferred_cache_cluster_azs: Vec<String>,
    pub num_node_groups: Option<u32>,
    pub replicas_per_node_group: Option<u32>,
    pub node_group_configurations: Vec<NodeGroupConfiguration>,
    pub cache_node_type: Option<String>,
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub cache_parameter_group_name: Option<String>,
    pub cache_subnet_group_name: Option<String>,
    pub cache_security_group_names: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub tags: Vec<Tag>,
    pub snapshot_arns: Vec<String>,
    pub snapshot_name: Option<String>,
    pub preferred_maintenance_window: Option<String>,
    pub port: Option<u16>,
    pub notification_topic_arn: Option<String>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub snapshot_retention_limit: Option<u32>,
    pub snapshot_window: Option<String>,
    pub auth_token: Option<String>,
    pub transit_encryption_enabled: Option<bool>,
    pub at_rest_encryption_enabled: Option<bool>,
}

impl QueryOptions for CreateReplicationGroupOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("primary_cluster_id", self.primary_cluster_id.as_deref()),
            OptionEntry::optional("automatic_failover_enabled", self.automatic_failover_enabled),
            OptionEntry::optional("multi_az_enabled", self.multi_az_enabled),
            OptionEntry::optional("num_cache_clusters", self.num_cache_clusters),
            OptionEntry::list("preferred_cache_cluster_azs", &self.preferred_cache_cluster_azs),
            OptionEntry::optional("num_node_groups", self.num_node_groups),
            OptionEntry::optional("replicas_per_node_group", self.replicas_per_node_group),
            OptionEntry::node_groups("node_group_configurations", &self.node_group_configurations),
            OptionEntry::optional("cache_node_type", self.cache_node_type.as_deref()),
            OptionEntry::optional("engine", self.engine.as_deref()),
            OptionEntry::optional("engine_version", self.engine_version.as_deref()),
            OptionEntry::optional("cache_parameter_group_name", self.cache_parameter_group_name.as_deref()),
            OptionEntry::optional("cache_subnet_group_name", self.cache_subnet_group_name.as_deref()),
            OptionEntry::list("cache_security_group_names", &self.cache_security_group_names),
            OptionEntry::list("security_group_ids", &self.security_group_ids),
            OptionEntry::tags("tags", &self.tags),
            OptionEntry::list("snapshot_arns", &self.snapshot_arns),
            OptionEntry::optional("snapshot_name", self.snapshot_name.as_deref()),
            OptionEntry::optional("preferred_maintenance_window", self.preferred_maintenance_window.as_deref()),
            OptionEntry::optional("port", self.port),
            OptionEntry::optional("notification_topic_arn", self.notification_topic_arn.as_deref()),
            OptionEntry::optional("auto_minor_version_upgrade", self.auto_minor_version_upgrade),
            OptionEntry::optional("snapshot_retention_limit", self.snapshot_retention_limit),
            OptionEntry::optional("snapshot_window", self.snapshot_window.as_deref()),
            OptionEntry::optional("auth_token", self.auth_token.as_deref()),
            OptionEntry::optional("transit_encryption_enabled", self.transit_encryption_enabled),
            OptionEntry::optional("at_rest_encryption_enabled", self.at_rest_encryption_enabled),
        ]
    }
}

/// Source of a manual snapshot: exactly one of the two should be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSnapshotOptions {
    pub cache_cluster_id: Option<String>,
    pub replication_group_id: Option<String>,
}

impl QueryOptions for CreateSnapshotOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("cache_cluster_id", self.cache_cluster_id.as_deref()),
            OptionEntry::optional("replication_group_id", self.replication_group_id.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteCacheClusterOptions {
    pub final_snapshot_identifier: Option<String>,
}

impl QueryOptions for DeleteCacheClusterOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![OptionEntry::optional(
            "final_snapshot_identifier",
            self.final_snapshot_identifier.as_deref(),
        )]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteReplicationGroupOptions {
    pub retain_primary_cluster: Option<bool>,
    pub final_snapshot_identifier: Option<String>,
}

impl QueryOptions for DeleteReplicationGroupOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("retain_primary_cluster", self.retain_primary_cluster),
            OptionEntry::optional("final_snapshot_identifier", self.final_snapshot_identifier.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeCacheClustersOptions {
    pub cache_cluster_id: Option<String>,
    pub marker: Option<String>,
    pub max_records: Option<u32>,
    pub show_cache_node_info: Option<bool>,
    pub show_cache_clusters_not_in_replication_groups: Option<bool>,
}

impl QueryOptions for DescribeCacheClustersOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("cache_cluster_id", self.cache_cluster_id.as_deref()),
            OptionEntry::optional("marker", self.marker.as_deref()),
            OptionEntry::optional("max_records", self.max_records),
            OptionEntry::optional("show_cache_node_info", self.show_cache_node_info),
            OptionEntry::optional(
                "show_cache_clusters_not_in_replication_groups",
                self.show_cache_clusters_not_in_replication_groups,
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeCacheEngineVersionsOptions {
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub cache_parameter_group_family: Option<String>,
    pub default_only: Option<bool>,
    pub marker: Option<String>,
    pub max_records: Option<u32>,
}

impl QueryOptions for DescribeCacheEngineVersionsOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("engine", self.engine.as_deref()),
            OptionEntry::optional("engine_version", self.engine_version.as_deref()),
            OptionEntry::optional("cache_parameter_group_family", self.cache_parameter_group_family.as_deref()),
            OptionEntry::optional("default_only", self.default_only),
            OptionEntry::optional("marker", self.marker.as_deref()),
            OptionEntry::optional("max_records", self.max_records),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeReplicationGroupsOptions {
    pub replication_group_id: Option<String>,
    pub marker: Option<String>,
    pub max_records: Option<u32>,
}

impl QueryOptions for DescribeReplicationGroupsOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("replication_group_id", self.replication_group_id.as_deref()),
            OptionEntry::optional("marker", self.marker.as_deref()),
            OptionEntry::optional("max_records", self.max_records),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeSnapshotsOptions {
    pub replication_group_id: Option<String>,
    pub cache_cluster_id: Option<String>,
    pub snapshot_name: Option<String>,
    pub snapshot_source: Option<SnapshotSource>,
    pub marker: Option<String>,
    pub max_records: Option<u32>,
    pub show_node_group_config: Option<bool>,
}

impl QueryOptions for DescribeSnapshotsOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("replication_group_id", self.replication_group_id.as_deref()),
            OptionEntry::optional("cache_cluster_id", self.cache_cluster_id.as_deref()),
            OptionEntry::optional("snapshot_name", self.snapshot_name.as_deref()),
            OptionEntry::optional("snapshot_source", self.snapshot_source.map(|s| s.as_str())),
            OptionEntry::optional("marker", self.marker.as_deref()),
            OptionEntry::optional("max_records", self.max_records),
            OptionEntry::optional("show_node_group_config", self.show_node_group_config),
        ]
    }
}

/// Optional parameters of `ModifyCacheCluster`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyCacheClusterOptions {
    pub num_cache_nodes: Option<u32>,
    /// Node IDs to remove when scaling a Memcached cluster in.
    pub cache_node_ids_to_remove: Vec<String>,
    pub az_mode: Option<AzMode>,
    pub new_availability_zones: Vec<String>,
    pub cache_security_group_names: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub preferred_maintenance_window: Option<String>,
    pub notification_topic_arn: Option<String>,
    pub cache_parameter_group_name: Option<String>,
    pub notification_topic_status: Option<NotificationTopicStatus>,
    pub apply_immediately: Option<bool>,
    pub engine_version: Option<String>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub snapshot_retention_limit: Option<u32>,
    pub snapshot_window: Option<String>,
    pub cache_node_type: Option<String>,
}

impl QueryOptions for ModifyCacheClusterOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("num_cache_nodes", self.num_cache_nodes),
            OptionEntry::list("cache_node_ids_to_remove", &self.cache_node_ids_to_remove),
            OptionEntry::optional("az_mode", self.az_mode.map(|m| m.as_str())),
            OptionEntry::list("new_availability_zones", &self.new_availability_zones),
            OptionEntry::list("cache_security_group_names", &self.cache_security_group_names),
            OptionEntry::list("security_group_ids", &self.security_group_ids),
            OptionEntry::optional("preferred_maintenance_window", self.preferred_maintenance_window.as_deref()),
            OptionEntry::optional("notification_topic_arn", self.notification_topic_arn.as_deref()),
            OptionEntry::optional("cache_parameter_group_name", self.cache_parameter_group_name.as_deref()),
            OptionEntry::optional("notification_topic_status", self.notification_topic_status.map(|s| s.as_str())),
            OptionEntry::optional("apply_immediately", self.apply_immediately),
            OptionEntry::optional("engine_version", self.engine_version.as_deref()),
            OptionEntry::optional("auto_minor_version_upgrade", self.auto_minor_version_upgrade),
            OptionEntry::optional("snapshot_retention_limit", self.snapshot_retention_limit),
            OptionEntry::optional("snapshot_window", self.snapshot_window.as_deref()),
            OptionEntry::optional("cache_node_type", self.cache_node_type.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyReplicationGroupOptions {
    pub replication_group_description: Option<String>,
    pub primary_cluster_id: Option<String>,
    pub snapshotting_cluster_id: Option<String>,
    pub automatic_failover_enabled: Option<bool>,
    pub multi_az_enabled: Option<bool>,
    pub cache_security_group_names: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub preferred_maintenance_window: Option<String>,
    pub notification_topic_arn: Option<String>,
    pub cache_parameter_group_name: Option<String>,
    pub notification_topic_status: Option<NotificationTopicStatus>,
    pub apply_immediately: Option<bool>,
    pub engine_version: Option<String>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub snapshot_retention_limit: Option<u32>,
    pub snapshot_window: Option<String>,
    pub cache_node_type: Option<String>,
}

impl QueryOptions for ModifyReplicationGroupOptions {
    fn entries(&self) -> Vec<OptionEntry> {
        vec![
            OptionEntry::optional("replication_group_description", self.replication_group_description.as_deref()),
            OptionEntry::optional("primary_cluster_id", self.primary_cluster_id.as_deref()),
            OptionEntry::optional("snapshotting_cluster_id", self.snapshotting_cluster_id.as_deref()),
            OptionEntry::optional("automatic_failover_enabled", self.automatic_failover_enabled),
            OptionEntry::optional("multi_az_enabled", self.multi_az_enabled),
            OptionEntry::list("cache_security_group_names", &self.cache_security_group_names),
            OptionEntry::list("security_group_ids", &self.security_group_ids),
            OptionEntry::optional("preferred_maintenance_window", self.preferred_maintenance_window.as_deref()),
            OptionEntry::optional("notification_topic_arn", self.notification_topic_arn.as_deref()),
            OptionEntry::optional("cache_parameter_group_name", self.cache_parameter_group_name.as_deref()),
            OptionEntry::optional("notification_topic_status", self.notification_topic_status.map(|s| s.as_str())),
            OptionEntry::optional("apply_immediately", self.apply_immediately),
            OptionEntry::optional("engine_version", self.engine_version.as_deref()),
            OptionEntry::optional("auto_minor_version_upgrade", self.auto_minor_version_upgrade),
            OptionEntry::optional("snapshot_retention_limit", self.snapshot_retention_limit),
            OptionEntry::optional("snapshot_window", self.snapshot_window.as_deref()),
            OptionEntry::optional("cache_node_type", self.cache_node_type.as_deref()),
        ]
    }
}

// ── Request factory ─────────────────────────────────────────────────────

/// Builds ElastiCache request descriptors, one method per API operation.
#[derive(Debug, Clone, Default)]
pub struct ElastiCache {
    builder: RequestBuilder,
}

impl ElastiCache {
    pub fn new(config: ElastiCacheConfig) -> Self {
        Self {
            builder: RequestBuilder::new(config),
        }
    }

    pub fn config(&self) -> &ElastiCacheConfig {
        self.builder.config()
    }

    /// Build an arbitrary action from raw option entries.
    pub fn build(&self, action: Action, entries: &[OptionEntry]) -> ElastiCacheResult<QueryRequest> {
        self.builder.build(action, entries)
    }

    fn build_with<O: QueryOptions>(
        &self,
        action: Action,
        mut entries: Vec<OptionEntry>,
        options: &O,
    ) -> ElastiCacheResult<QueryRequest> {
        entries.extend(options.entries());
        self.builder.build(action, &entries)
    }

    // ── Security groups ─────────────────────────────────────────────

    /// Allow an EC2 security group to reach clusters in a cache security group.
    pub fn authorize_cache_security_group_ingress(
        &self,
        cache_security_group_name: &str,
        ec2_security_group_name: &str,
        ec2_security_group_owner_id: &str,
    ) -> ElastiCacheResult<QueryRequest> {
        self.builder.build(
            Action::AuthorizeCacheSecurityGroupIngress,
            &[
                OptionEntry::scalar("cache_security_group_name", cache_security_group_name),
                OptionEntry::scalar("ec2_security_group_name", ec2_security_group_name),
                OptionEntry::scalar("ec2_security_group_owner_id", ec2_security_group_owner_id),
            ],
        )
    }

    // ── Cache clusters ──────────────────────────────────────────────

    pub fn create_cache_cluster(
        &self,
        cache_cluster_id: &str,
        cache_node_type: &str,
        engine: &str,
        num_cache_nodes: u32,
        options: &CreateCacheClusterOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(
            Action::CreateCacheCluster,
            vec![
                OptionEntry::scalar("cache_cluster_id", cache_cluster_id),
                OptionEntry::scalar("cache_node_type", cache_node_type),
                OptionEntry::scalar("engine", engine),
                OptionEntry::scalar("num_cache_nodes", num_cache_nodes),
            ],
            options,
        )
    }

    pub fn delete_cache_cluster(
        &self,
        cache_cluster_id: &str,
        options: &DeleteCacheClusterOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(
            Action::DeleteCacheCluster,
            vec![OptionEntry::scalar("cache_cluster_id", cache_cluster_id)],
            options,
        )
    }

    pub fn describe_cache_clusters(
        &self,
        options: &DescribeCacheClustersOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(Action::DescribeCacheClusters, Vec::new(), options)
    }

    pub fn modify_cache_cluster(
        &self,
        cache_cluster_id: &str,
        options: &ModifyCacheClusterOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(
            Action::ModifyCacheCluster,
            vec![OptionEntry::scalar("cache_cluster_id", cache_cluster_id)],
            options,
        )
    }

    /// Reboot the listed nodes of a cluster. Node IDs are the zero-padded
    /// identifiers ElastiCache assigns (`0001`, `0002`, ...).
    pub fn reboot_cache_cluster(
        &self,
        cache_cluster_id: &str,
        cache_node_ids_to_reboot: &[&str],
    ) -> ElastiCacheResult<QueryRequest> {
        self.builder.build(
            Action::RebootCacheCluster,
            &[
                OptionEntry::scalar("cache_cluster_id", cache_cluster_id),
                OptionEntry::list("cache_node_ids_to_reboot", cache_node_ids_to_reboot.iter().copied()),
            ],
        )
    }

    pub fn describe_cache_engine_versions(
        &self,
        options: &DescribeCacheEngineVersionsOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(Action::DescribeCacheEngineVersions, Vec::new(), options)
    }

    // ── Replication groups ──────────────────────────────────────────

    pub fn create_replication_group(
        &self,
        replication_group_id: &str,
        replication_group_description: &str,
        options: &CreateReplicationGroupOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(
            Action::CreateReplicationGroup,
            vec![
                OptionEntry::scalar("replication_group_id", replication_group_id),
                OptionEntry::scalar("replication_group_description", replication_group_description),
            ],
            options,
        )
    }

    pub fn delete_replication_group(
        &self,
        replication_group_id: &str,
        options: &DeleteReplicationGroupOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(
            Action::DeleteReplicationGroup,
            vec![OptionEntry::scalar("replication_group_id", replication_group_id)],
            options,
        )
    }

    pub fn describe_replication_groups(
        &self,
        options: &DescribeReplicationGroupsOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(Action::DescribeReplicationGroups, Vec::new(), options)
    }

    pub fn modify_replication_group(
        &self,
        replication_group_id: &str,
        options: &ModifyReplicationGroupOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(
            Action::ModifyReplicationGroup,
            vec![OptionEntry::scalar("replication_group_id", replication_group_id)],
            options,
        )
    }

    // ── Snapshots ───────────────────────────────────────────────────

    pub fn create_snapshot(
        &self,
        snapshot_name: &str,
        options: &CreateSnapshotOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(
            Action::CreateSnapshot,
            vec![OptionEntry::scalar("snapshot_name", snapshot_name)],
            options,
        )
    }

    pub fn copy_snapshot(
        &self,
        source_snapshot_name: &str,
        target_snapshot_name: &str,
        options: &CopySnapshotOptions,
    ) -> ElastiCacheResult<QueryRequest> {
        self.build_with(
            Action::CopySnapshot,
            vec![
                OptionEntry::scalar("source_snapshot_name", source_snapshot_name),
                OptionEntry::scalar("target_snapshot_name", target_snapshot_name),
            ],
            options,
        )
    }

    pub fn delete_snapshot(&self, snapshot_name: &str) -> ElastiCacheResult<QueryRequest> {
        self.builder.build(
            Action::DeleteSnapshot,
            &[OptionEntry::scalar("snapshot_name", snapshot_name)],
        )
    }

    pub fn describe_snapshots(&self, options: &DescribeSnapshotsOptions) -> ElastiCacheResult<QueryRequest> {
        self.build_with(Action::DescribeSnapshots, Vec::new(), options)
    }

    // ── Tags ────────────────────────────────────────────────────────

    /// `resource_name` is the ARN of a cluster, snapshot or other taggable resource.
    pub fn add_tags_to_resource(&self, resource_name: &str, tags: &[Tag]) -> ElastiCacheResult<QueryRequest> {
        self.builder.build(
            Action::AddTagsToResource,
            &[
                OptionEntry::scalar("resource_name", resource_name),
                OptionEntry::tags("tags", tags),
            ],
        )
    }

    pub fn list_tags_for_resource(&self, resource_name: &str) -> ElastiCacheResult<QueryRequest> {
        self.builder.build(
            Action::ListTagsForResource,
            &[OptionEntry::scalar("resource_name", resource_name)],
        )
    }

    pub fn remove_tags_from_resource(
        &self,
        resource_name: &str,
        tag_keys: &[&str],
    ) -> ElastiCacheResult<QueryRequest> {
        self.builder.build(
            Action::RemoveTagsFromResource,
            &[
                OptionEntry::scalar("resource_name", resource_name),
                OptionEntry::list("tag_keys", tag_keys.iter().copied()),
            ],
        )
    }
}
