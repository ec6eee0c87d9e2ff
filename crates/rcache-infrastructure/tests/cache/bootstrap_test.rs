//! Startup wiring tests

use rcache_infrastructure::bootstrap::init_cache;
use rcache_infrastructure::config::{AppConfig, CacheConfig};
use std::collections::HashMap;

#[test]
fn test_no_endpoints_disables_caching() {
    let cache = init_cache(&AppConfig::default()).unwrap();

    assert_eq!(cache.provider_name(), "null");
    cache.store("k", &"v").unwrap();
    assert_eq!(cache.fetch::<String>("k").unwrap(), "");
    assert!(!cache.exists("k").unwrap());
    assert!(cache.fetch_all::<String>().unwrap().is_empty());
    cache.ping().unwrap();
}

#[test]
fn test_moka_provider_with_namespace() {
    let config = AppConfig {
        cache: CacheConfig {
            provider: "moka".to_string(),
            namespace: Some("app".to_string()),
            max_capacity: Some(100),
            ..CacheConfig::default()
        },
        ..AppConfig::default()
    };

    let cache = init_cache(&config).unwrap();

    assert_eq!(cache.provider_name(), "moka");
    assert_eq!(cache.namespace(), Some("app"));
    cache.store("k", &"v").unwrap();
    let all: HashMap<String, String> = cache.fetch_all().unwrap();
    assert_eq!(all.get("k").map(String::as_str), Some("v"));
}

#[test]
fn test_redis_provider_does_not_connect_at_startup() {
    let config = AppConfig {
        cache: CacheConfig {
            endpoints: vec!["127.0.0.1:1".to_string(), "127.0.0.1:2".to_string()],
            timeout_ms: 100,
            ..CacheConfig::default()
        },
        ..AppConfig::default()
    };

    let cache = init_cache(&config).unwrap();

    assert_eq!(cache.provider_name(), "redis");
}

#[test]
fn test_unknown_provider_is_rejected() {
    let config = AppConfig {
        cache: CacheConfig {
            provider: "memcached".to_string(),
            ..CacheConfig::default()
        },
        ..AppConfig::default()
    };

    let err = init_cache(&config).unwrap_err();
    assert!(err.to_string().contains("Unknown cache backend 'memcached'"));
}

#[test]
#[ignore = "requires a running Redis server on 127.0.0.1:6379"]
fn test_redis_round_trip() {
    let config = AppConfig {
        cache: CacheConfig {
            endpoints: vec!["127.0.0.1:6379".to_string()],
            namespace: Some("rcache-test".to_string()),
            ..CacheConfig::default()
        },
        ..AppConfig::default()
    };
    let cache = init_cache(&config).unwrap();

    cache.ping().unwrap();
    cache.store("greeting", &"hello").unwrap();
    assert_eq!(cache.fetch::<String>("greeting").unwrap(), "hello");

    let all: HashMap<String, String> = cache.fetch_all().unwrap();
    assert_eq!(all.get("greeting").map(String::as_str), Some("hello"));

    assert!(cache.remove("greeting").unwrap());
    assert!(!cache.exists("greeting").unwrap());
}
