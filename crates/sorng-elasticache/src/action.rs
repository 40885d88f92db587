//! ElastiCache API actions.

use crate::error::{ElastiCacheError, ElastiCacheResult};
use crate::flatten::pascal_case;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ElastiCache Query API operation. Serializes as its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    AddTagsToResource,
    AuthorizeCacheSecurityGroupIngress,
    CopySnapshot,
    CreateCacheCluster,
    CreateReplicationGroup,
    CreateSnapshot,
    DeleteCacheCluster,
    DeleteReplicationGroup,
    DeleteSnapshot,
    DescribeCacheClusters,
    DescribeCacheEngineVersions,
    DescribeReplicationGroups,
    DescribeSnapshots,
    ListTagsForResource,
    ModifyCacheCluster,
    ModifyReplicationGroup,
    RebootCacheCluster,
    RemoveTagsFromResource,
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Self::AddTagsToResource,
        Self::AuthorizeCacheSecurityGroupIngress,
        Self::CopySnapshot,
        Self::CreateCacheCluster,
        Self::CreateReplicationGroup,
        Self::CreateSnapshot,
        Self::DeleteCacheCluster,
        Self::DeleteReplicationGroup,
        Self::DeleteSnapshot,
        Self::DescribeCacheClusters,
        Self::DescribeCacheEngineVersions,
        Self::DescribeReplicationGroups,
        Self::DescribeSnapshots,
        Self::ListTagsForResource,
        Self::ModifyCacheCluster,
        Self::ModifyReplicationGroup,
        Self::RebootCacheCluster,
        Self::RemoveTagsFromResource,
    ];

    /// The PascalCase name sent as the `Action` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddTagsToResource => "AddTagsToResource",
            Self::AuthorizeCacheSecurityGroupIngress => "AuthorizeCacheSecurityGroupIngress",
            Self::CopySnapshot => "CopySnapshot",
            Self::CreateCacheCluster => "CreateCacheCluster",
            Self::CreateReplicationGroup => "CreateReplicationGroup",
            Self::CreateSnapshot => "CreateSnapshot",
            Self::DeleteCacheCluster => "DeleteCacheCluster",
            Self::DeleteReplicationGroup => "DeleteReplicationGroup",
            Self::DeleteSnapshot => "DeleteSnapshot",
            Self::DescribeCacheClusters => "DescribeCacheClusters",
            Self::DescribeCacheEngineVersions => "DescribeCacheEngineVersions",
            Self::DescribeReplicationGroups => "DescribeReplicationGroups",
            Self::DescribeSnapshots => "DescribeSnapshots",
            Self::ListTagsForResource => "ListTagsForResource",
            Self::ModifyCacheCluster => "ModifyCacheCluster",
            Self::ModifyReplicationGroup => "ModifyReplicationGroup",
            Self::RebootCacheCluster => "RebootCacheCluster",
            Self::RemoveTagsFromResource => "RemoveTagsFromResource",
        }
    }

    /// Resolve an action from either its wire name (`CreateCacheCluster`)
    /// or its snake_case identifier (`create_cache_cluster`).
    pub fn from_name(name: &str) -> ElastiCacheResult<Self> {
        let wire = pascal_case(name);
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == wire)
            .ok_or_else(|| ElastiCacheError::unknown_action(name))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ElastiCacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
