//! Cache Configuration Tests

use rcache_infrastructure::config::types::split_endpoints;
use rcache_infrastructure::config::{AppConfig, CacheConfig};
use std::time::Duration;

#[test]
fn test_default_cache_config_is_disabled() {
    let config = CacheConfig::default();

    assert_eq!(config.provider, "redis");
    assert!(config.endpoints.is_empty());
    assert!(!config.is_enabled());
    assert_eq!(config.effective_provider(), "null");
    assert_eq!(config.timeout(), Duration::from_millis(1000));
    assert_eq!(config.component, "cache");
}

#[test]
fn test_endpoints_enable_redis() {
    let config = CacheConfig {
        endpoints: vec!["10.0.0.1:6379".to_string()],
        ..CacheConfig::default()
    };

    assert!(config.is_enabled());
    assert_eq!(config.effective_provider(), "redis");
}

#[test]
fn test_moka_needs_no_endpoints() {
    let config = CacheConfig {
        provider: "moka".to_string(),
        ..CacheConfig::default()
    };

    assert!(config.is_enabled());
    assert_eq!(config.effective_provider(), "moka");
}

#[test]
fn test_to_backend_config() {
    let config = CacheConfig {
        endpoints: vec!["a:6379".to_string(), "b:6379".to_string()],
        read_endpoints: vec!["replica:6379".to_string()],
        max_read_pool: 20,
        max_write_pool: 5,
        timeout_ms: 250,
        max_capacity: Some(100),
        ..CacheConfig::default()
    };

    let backend = config.to_backend_config();
    assert_eq!(backend.provider, "redis");
    assert_eq!(backend.endpoints, vec!["a:6379", "b:6379"]);
    assert_eq!(backend.effective_read_endpoints(), ["replica:6379".to_string()]);
    assert_eq!(backend.max_read_pool, 20);
    assert_eq!(backend.max_write_pool, 5);
    assert_eq!(backend.timeout, Duration::from_millis(250));
    assert_eq!(backend.max_capacity, Some(100));
}

#[test]
fn test_split_endpoints() {
    assert_eq!(
        split_endpoints(" 10.0.0.1:6379 ,10.0.0.2:6379,, "),
        vec!["10.0.0.1:6379", "10.0.0.2:6379"]
    );
    assert!(split_endpoints("").is_empty());
}

#[test]
fn test_endpoints_accept_string_or_list() {
    let joined: AppConfig = toml::from_str(
        r#"
        [cache]
        endpoints = "a:6379,b:6379"
        "#,
    )
    .unwrap();
    let listed: AppConfig = toml::from_str(
        r#"
        [cache]
        endpoints = ["a:6379", "b:6379"]
        "#,
    )
    .unwrap();

    assert_eq!(joined.cache.endpoints, vec!["a:6379", "b:6379"]);
    assert_eq!(joined, listed);
}

#[test]
fn test_legacy_keys_are_accepted() {
    let config: AppConfig = toml::from_str(
        r#"
        [cache]
        redis_server_session = "pw@10.0.0.1:6379"
        redis_max_read_pool = 30
        redis_max_write_pool = 3
        "#,
    )
    .unwrap();

    assert_eq!(config.cache.endpoints, vec!["pw@10.0.0.1:6379"]);
    assert_eq!(config.cache.max_read_pool, 30);
    assert_eq!(config.cache.max_write_pool, 3);
    assert_eq!(config.logging, Default::default());
}
