use std::collections::BTreeMap;
use std::sync::Arc;

use sorng_elasticache::{
    Action, CreateCacheClusterOptions, CreateReplicationGroupOptions, DuplicateKeyPolicy,
    ElastiCache, ElastiCacheClient, ElastiCacheConfig, ElastiCacheErrorKind, NodeGroupConfiguration,
    OptionEntry, QueryRequest, RecordingTransport, Tag,
};

fn as_strings(req: &QueryRequest) -> BTreeMap<String, String> {
    req.params()
        .iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect()
}

fn expected(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_create_memcached_cluster_in_one_zone() {
    let options = CreateCacheClusterOptions {
        preferred_availability_zones: vec!["us-east-1a".to_string()],
        ..Default::default()
    };
    let req = ElastiCache::default()
        .create_cache_cluster("MyMemcachedCluster", "cache.m3.medium", "memcached", 1, &options)
        .unwrap();

    assert_eq!(
        as_strings(&req),
        expected(&[
            ("Action", "CreateCacheCluster"),
            ("CacheClusterId", "MyMemcachedCluster"),
            ("CacheNodeType", "cache.m3.medium"),
            ("Engine", "memcached"),
            ("NumCacheNodes", "1"),
            ("PreferredAvailabilityZones.PreferredAvailabilityZone.1", "us-east-1a"),
            ("Version", "2015-02-02"),
        ])
    );
}

#[test]
fn test_reboot_three_nodes() {
    let req = ElastiCache::default()
        .reboot_cache_cluster("MyCacheClusterId", &["0001", "0002", "0003"])
        .unwrap();

    assert_eq!(
        as_strings(&req),
        expected(&[
            ("Action", "RebootCacheCluster"),
            ("CacheClusterId", "MyCacheClusterId"),
            ("CacheNodeIdsToReboot.CacheNodeId.1", "0001"),
            ("CacheNodeIdsToReboot.CacheNodeId.2", "0002"),
            ("CacheNodeIdsToReboot.CacheNodeId.3", "0003"),
            ("Version", "2015-02-02"),
        ])
    );
}

#[test]
fn test_replication_group_with_one_node_group() {
    let options = CreateReplicationGroupOptions {
        node_group_configurations: vec![NodeGroupConfiguration::new(
            "us-east-1a",
            &["us-east-1b", "us-east-1c"],
            2,
            0,
        )],
        ..Default::default()
    };
    let req = ElastiCache::default()
        .create_replication_group("myRepGroup", "My Rep Group", &options)
        .unwrap();

    let p = "NodeGroupConfigurations.NodeGroupConfiguration.1";
    let mut want = expected(&[
        ("Action", "CreateReplicationGroup"),
        ("ReplicationGroupDescription", "My Rep Group"),
        ("ReplicationGroupId", "myRepGroup"),
        ("Version", "2015-02-02"),
    ]);
    want.insert(format!("{}.PrimaryAvailabilityZone", p), "us-east-1a".into());
    want.insert(
        format!("{}.ReplicaAvailabilityZones.AvailabilityZone.1", p),
        "us-east-1b".into(),
    );
    want.insert(
        format!("{}.ReplicaAvailabilityZones.AvailabilityZone.2", p),
        "us-east-1c".into(),
    );
    want.insert(format!("{}.ReplicaCount", p), "2".into());
    want.insert(format!("{}.Slots", p), "0".into());

    assert_eq!(as_strings(&req), want);
}

#[test]
fn test_delete_cluster_without_final_snapshot() {
    let req = ElastiCache::default()
        .delete_cache_cluster("Test", &Default::default())
        .unwrap();

    assert_eq!(
        as_strings(&req),
        expected(&[
            ("Action", "DeleteCacheCluster"),
            ("CacheClusterId", "Test"),
            ("Version", "2015-02-02"),
        ])
    );
}

#[test]
fn test_describe_clusters_without_arguments() {
    let req = ElastiCache::default()
        .describe_cache_clusters(&Default::default())
        .unwrap();

    assert_eq!(
        as_strings(&req),
        expected(&[("Action", "DescribeCacheClusters"), ("Version", "2015-02-02")])
    );
}

#[test]
fn test_every_request_has_action_and_version() {
    let ec = ElastiCache::default();
    let arn = "arn:aws:elasticache:us-east-1:123456789012:cluster:c1";
    let requests = vec![
        ec.add_tags_to_resource(arn, &[Tag::new("env", "prod")]).unwrap(),
        ec.authorize_cache_security_group_ingress("csg", "web", "123456789012").unwrap(),
        ec.copy_snapshot("a", "b", &Default::default()).unwrap(),
        ec.create_cache_cluster("c1", "cache.t3.micro", "redis", 1, &Default::default()).unwrap(),
        ec.create_replication_group("rg", "desc", &Default::default()).unwrap(),
        ec.create_snapshot("s", &Default::default()).unwrap(),
        ec.delete_cache_cluster("c1", &Default::default()).unwrap(),
        ec.delete_replication_group("rg", &Default::default()).unwrap(),
        ec.delete_snapshot("s").unwrap(),
        ec.describe_cache_clusters(&Default::default()).unwrap(),
        ec.describe_cache_engine_versions(&Default::default()).unwrap(),
        ec.describe_replication_groups(&Default::default()).unwrap(),
        ec.describe_snapshots(&Default::default()).unwrap(),
        ec.list_tags_for_resource(arn).unwrap(),
        ec.modify_cache_cluster("c1", &Default::default()).unwrap(),
        ec.modify_replication_group("rg", &Default::default()).unwrap(),
        ec.reboot_cache_cluster("c1", &["0001"]).unwrap(),
        ec.remove_tags_from_resource(arn, &["env"]).unwrap(),
    ];

    assert_eq!(requests.len(), Action::ALL.len());
    for (req, action) in requests.iter().zip(Action::ALL) {
        assert_eq!(req.action(), *action);
        assert_eq!(req.get("Action").unwrap().to_string(), action.as_str());
        assert_eq!(req.get("Version").unwrap().to_string(), "2015-02-02");
    }
}

#[test]
fn test_reject_policy_surfaces_duplicates() {
    let ec = ElastiCache::new(
        ElastiCacheConfig::new("us-east-1").with_duplicate_keys(DuplicateKeyPolicy::Reject),
    );
    let err = ec
        .build(
            Action::ModifyCacheCluster,
            &[
                OptionEntry::scalar("cache_cluster_id", "c1"),
                OptionEntry::scalar("CacheClusterId", "c2"),
            ],
        )
        .unwrap_err();
    assert_eq!(err.kind, ElastiCacheErrorKind::DuplicateParameter);
    assert_eq!(err.action.as_deref(), Some("ModifyCacheCluster"));
}

#[tokio::test]
async fn test_client_delivers_form_encoded_request() {
    let transport = Arc::new(RecordingTransport::with_response("<ok/>"));
    let client = ElastiCacheClient::new(transport.clone(), ElastiCacheConfig::new("us-west-2"));

    let req = client
        .requests()
        .add_tags_to_resource(
            "arn:aws:elasticache:us-west-2:1:cluster:c1",
            &[Tag::new("Service", "cache")],
        )
        .unwrap();
    assert_eq!(client.send(&req).await.unwrap(), "<ok/>");

    let sent = transport.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].endpoint, "https://elasticache.us-west-2.amazonaws.com");
    assert_eq!(
        sent[0].request.to_form_body(),
        "Action=AddTagsToResource\
         &ResourceName=arn%3Aaws%3Aelasticache%3Aus-west-2%3A1%3Acluster%3Ac1\
         &Tags.Tag.1.Key=Service\
         &Tags.Tag.1.Value=cache\
         &Version=2015-02-02"
    );
}
