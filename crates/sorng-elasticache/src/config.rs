//! ElastiCache API constants, region handling, and request-building
//! configuration.
//!
//! Nothing here is consulted while flattening parameters except the
//! duplicate-key policy; region and endpoint exist so that a transport can
//! resolve where to post a finished [`QueryRequest`](crate::request::QueryRequest).

use serde::{Deserialize, Serialize};

/// Fixed ElastiCache Query API version.
pub const API_VERSION: &str = "2015-02-02";
/// Service identifier (signing name and endpoint prefix).
pub const SERVICE: &str = "elasticache";
/// Every Query API request is posted to the service root.
pub const REQUEST_PATH: &str = "/";

/// Regions with an ElastiCache endpoint.
pub const AWS_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ca-central-1",
    "ca-west-1",
    "eu-central-1",
    "eu-central-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-south-1",
    "eu-south-2",
    "eu-north-1",
    "il-central-1",
    "me-south-1",
    "me-central-1",
    "sa-east-1",
    // GovCloud
    "us-gov-east-1",
    "us-gov-west-1",
    // China
    "cn-north-1",
    "cn-northwest-1",
];

// ── Regions ─────────────────────────────────────────────────────────────

/// AWS region configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AwsRegion {
    /// Region code (e.g., "us-east-1").
    pub name: String,
}

impl AwsRegion {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Regional ElastiCache endpoint: `https://elasticache.{region}.amazonaws.com`,
    /// with the `.com.cn` suffix in the China partition.
    pub fn endpoint(&self) -> String {
        if self.name.starts_with("cn-") {
            format!("https://{}.{}.amazonaws.com.cn", SERVICE, self.name)
        } else {
            format!("https://{}.{}.amazonaws.com", SERVICE, self.name)
        }
    }

    pub fn is_valid(&self) -> bool {
        AWS_REGIONS.contains(&self.name.as_str())
    }

    /// Return the partition for this region (aws, aws-cn, aws-us-gov).
    pub fn partition(&self) -> &str {
        if self.name.starts_with("cn-") {
            "aws-cn"
        } else if self.name.starts_with("us-gov-") {
            "aws-us-gov"
        } else {
            "aws"
        }
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self {
            name: "us-east-1".to_string(),
        }
    }
}

// ── Duplicate keys ──────────────────────────────────────────────────────

/// What the request builder does when two option entries flatten to the
/// same query key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateKeyPolicy {
    /// The later entry overwrites the earlier one.
    #[default]
    LastWins,
    /// Fail with `DuplicateParameter`.
    Reject,
}

// ── Configuration ───────────────────────────────────────────────────────

/// Request-building configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ElastiCacheConfig {
    pub region: AwsRegion,
    /// Custom endpoint URL (LocalStack, VPC endpoints, ...).
    pub endpoint_url: Option<String>,
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl ElastiCacheConfig {
    pub fn new(region: &str) -> Self {
        Self {
            region: AwsRegion::new(region),
            ..Self::default()
        }
    }

    pub fn with_endpoint_url(mut self, url: &str) -> Self {
        self.endpoint_url = Some(url.to_string());
        self
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Resolve region and endpoint override from the standard AWS
    /// environment variables, falling back to the defaults.
    pub fn from_environment() -> Self {
        let mut config = Self::default();
        if let Some(region) = env_var("AWS_REGION").or_else(|| env_var("AWS_DEFAULT_REGION")) {
            config.region = AwsRegion::new(&region);
        }
        config.endpoint_url =
            env_var("AWS_ENDPOINT_URL_ELASTICACHE").or_else(|| env_var("AWS_ENDPOINT_URL"));
        if !config.region.is_valid() {
            log::warn!(
                "Region '{}' is not a known ElastiCache region",
                config.region.name
            );
        }
        config
    }

    /// The URL a transport should post requests to.
    pub fn endpoint(&self) -> String {
        match self.endpoint_url {
            Some(ref url) => url.clone(),
            None => self.region.endpoint(),
        }
    }
}

/// Set and non-empty.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_endpoint_standard() {
        let r = AwsRegion::new("eu-west-1");
        assert_eq!(r.endpoint(), "https://elasticache.eu-west-1.amazonaws.com");
        assert_eq!(r.partition(), "aws");
    }

    #[test]
    fn region_endpoint_china() {
        let r = AwsRegion::new("cn-north-1");
        assert_eq!(r.endpoint(), "https://elasticache.cn-north-1.amazonaws.com.cn");
        assert_eq!(r.partition(), "aws-cn");
    }

    #[test]
    fn region_govcloud_partition() {
        assert_eq!(AwsRegion::new("us-gov-west-1").partition(), "aws-us-gov");
    }

    #[test]
    fn region_is_valid() {
        assert!(AwsRegion::new("us-east-1").is_valid());
        assert!(!AwsRegion::new("mars-central-1").is_valid());
    }

    #[test]
    fn default_config() {
        let cfg = ElastiCacheConfig::default();
        assert_eq!(cfg.region.name, "us-east-1");
        assert_eq!(cfg.duplicate_keys, DuplicateKeyPolicy::LastWins);
        assert_eq!(cfg.endpoint(), "https://elasticache.us-east-1.amazonaws.com");
    }

    #[test]
    fn endpoint_override_wins() {
        let cfg = ElastiCacheConfig::new("us-west-2").with_endpoint_url("http://localhost:4566");
        assert_eq!(cfg.endpoint(), "http://localhost:4566");
    }

    #[test]
    fn deserialize_partial_config() {
        let cfg: ElastiCacheConfig =
            serde_json::from_str(r#"{"duplicate_keys":"reject"}"#).unwrap();
        assert_eq!(cfg.duplicate_keys, DuplicateKeyPolicy::Reject);
        assert_eq!(cfg.region, AwsRegion::default());
        assert!(cfg.endpoint_url.is_none());
    }

    // Single test so nothing else races on the process environment.
    #[test]
    fn from_environment_precedence() {
        const VARS: &[&str] = &[
            "AWS_REGION",
            "AWS_DEFAULT_REGION",
            "AWS_ENDPOINT_URL_ELASTICACHE",
            "AWS_ENDPOINT_URL",
        ];
        let clear = || {
            for var in VARS {
                std::env::remove_var(var);
            }
        };

        clear();
        let cfg = ElastiCacheConfig::from_environment();
        assert_eq!(cfg.region, AwsRegion::default());
        assert!(cfg.endpoint_url.is_none());

        std::env::set_var("AWS_DEFAULT_REGION", "eu-west-1");
        std::env::set_var("AWS_ENDPOINT_URL", "http://generic:4566");
        let cfg = ElastiCacheConfig::from_environment();
        assert_eq!(cfg.region.name, "eu-west-1");
        assert_eq!(cfg.endpoint(), "http://generic:4566");

        std::env::set_var("AWS_REGION", "ap-northeast-1");
        std::env::set_var("AWS_ENDPOINT_URL_ELASTICACHE", "http://elasticache:4566");
        let cfg = ElastiCacheConfig::from_environment();
        assert_eq!(cfg.region.name, "ap-northeast-1");
        assert_eq!(cfg.endpoint(), "http://elasticache:4566");

        // Empty values fall through.
        std::env::set_var("AWS_REGION", "");
        std::env::set_var("AWS_ENDPOINT_URL_ELASTICACHE", "");
        std::env::set_var("AWS_ENDPOINT_URL", "");
        let cfg = ElastiCacheConfig::from_environment();
        assert_eq!(cfg.region.name, "eu-west-1");
        assert!(cfg.endpoint_url.is_none());

        std::env::set_var("AWS_DEFAULT_REGION", "");
        let cfg = ElastiCacheConfig::from_environment();
        assert_eq!(cfg.region, AwsRegion::default());

        clear();
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = ElastiCacheConfig::new("ap-southeast-2")
            .with_endpoint_url("https://vpce.example")
            .with_duplicate_keys(DuplicateKeyPolicy::Reject);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ElastiCacheConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
