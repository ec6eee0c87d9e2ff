//! Backend Registry Tests

use rcache_providers::registry::CacheBackendConfig;
use rcache_providers::{list_cache_backends, resolve_cache_backend};

#[test]
fn test_null_backend_is_registered() {
    let backend = resolve_cache_backend(&CacheBackendConfig::new("null")).unwrap();
    assert_eq!(backend.provider_name(), "null");
}

#[cfg(feature = "cache-moka")]
#[test]
fn test_moka_backend_is_registered() {
    let config = CacheBackendConfig::new("moka").with_max_capacity(10);
    let backend = resolve_cache_backend(&config).unwrap();
    assert_eq!(backend.provider_name(), "moka");
}

#[test]
fn test_unknown_backend_lists_available() {
    let err = resolve_cache_backend(&CacheBackendConfig::new("memcached")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Unknown cache backend 'memcached'"));
    assert!(message.contains("null"));
}

#[test]
fn test_list_cache_backends_is_sorted() {
    let backends = list_cache_backends();
    let names: Vec<&str> = backends.iter().map(|(name, _)| *name).collect();

    assert!(names.contains(&"null"));
    #[cfg(feature = "cache-redis")]
    assert!(names.contains(&"redis"));

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}
