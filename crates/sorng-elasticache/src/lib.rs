//! # sorng-elasticache – ElastiCache Query API request marshaling
//!
//! Builds complete, flat parameter sets for the Amazon ElastiCache Query
//! API (version `2015-02-02`) from typed operation arguments. Signing and
//! HTTP are left to a [`QueryTransport`] implementation.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  ElastiCache  (operations.rs)                    │
//! │  └── one method per action, typed *Options       │
//! ├──────────────────────────────────────────────────┤
//! │  RequestBuilder  (request.rs)                    │
//! │  ├── drop absent values                          │
//! │  ├── duplicate-key policy                        │
//! │  └── Action / Version                            │
//! ├──────────────────────────────────────────────────┤
//! │  flatten  (flatten.rs)                           │
//! │  ├── RULES  (indexed lists, node groups, tags)   │
//! │  └── mechanical PascalCase fallback              │
//! ├──────────────────────────────────────────────────┤
//! │  ElastiCacheClient  (client.rs)                  │
//! │  └── QueryTransport  (signing + HTTP, external)  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use sorng_elasticache::{CreateCacheClusterOptions, ElastiCache};
//!
//! let options = CreateCacheClusterOptions {
//!     preferred_availability_zones: vec!["us-east-1a".to_string()],
//!     ..Default::default()
//! };
//! let request = ElastiCache::default()
//!     .create_cache_cluster("my-cluster", "cache.m3.medium", "memcached", 1, &options)
//!     .unwrap();
//! assert_eq!(
//!     request.get("PreferredAvailabilityZones.PreferredAvailabilityZone.1").unwrap().to_string(),
//!     "us-east-1a"
//! );
//! ```

// ── Sub-modules ─────────────────────────────────────────────────────────

pub mod error;
pub mod config;
pub mod value;
pub mod flatten;
pub mod action;
pub mod request;
pub mod operations;
pub mod client;

// ── Re-exports for ergonomic access ─────────────────────────────────────

pub use action::Action;
pub use client::{ElastiCacheClient, QueryTransport, RecordingTransport, SentRequest};
pub use config::{AwsRegion, DuplicateKeyPolicy, ElastiCacheConfig, API_VERSION};
pub use error::{ElastiCacheError, ElastiCacheErrorKind, ElastiCacheResult};
pub use flatten::{flatten, FlatParam};
pub use operations::{
    AzMode, CopySnapshotOptions, CreateCacheClusterOptions, CreateReplicationGroupOptions,
    CreateSnapshotOptions, DeleteCacheClusterOptions, DeleteReplicationGroupOptions,
    DescribeCacheClustersOptions, DescribeCacheEngineVersionsOptions,
    DescribeReplicationGroupsOptions, DescribeSnapshotsOptions, ElastiCache,
    ModifyCacheClusterOptions, ModifyReplicationGroupOptions, NotificationTopicStatus,
    QueryOptions, SnapshotSource,
};
pub use request::{QueryRequest, RequestBuilder};
pub use value::{NodeGroupConfiguration, OptionEntry, OptionValue, ParamValue, Tag};
