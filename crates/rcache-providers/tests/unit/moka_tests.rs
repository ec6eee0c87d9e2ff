//! Moka Cache Backend Tests

use rcache_providers::CacheBackend;
use rcache_providers::cache::MokaCacheBackend;
use std::thread::sleep;
use std::time::Duration;

#[test]
fn test_moka_backend_basic_operations() {
    let backend = MokaCacheBackend::with_capacity(100);

    backend.set("user:1", br#"{"name":"alice"}"#, None).unwrap();

    assert_eq!(
        backend.get("user:1").unwrap().as_deref(),
        Some(br#"{"name":"alice"}"#.as_slice())
    );
    assert!(backend.exists("user:1").unwrap());

    assert!(backend.delete("user:1").unwrap());
    assert!(!backend.exists("user:1").unwrap());
    assert!(!backend.delete("user:1").unwrap());
    assert!(backend.get("user:1").unwrap().is_none());
}

#[test]
fn test_moka_backend_entry_expires_after_ttl() {
    let backend = MokaCacheBackend::new();

    backend
        .set("short", b"1", Some(Duration::from_millis(50)))
        .unwrap();
    backend.set("long", b"2", Some(Duration::from_secs(60))).unwrap();
    assert!(backend.exists("short").unwrap());

    sleep(Duration::from_millis(150));

    assert!(backend.get("short").unwrap().is_none());
    assert!(backend.get("long").unwrap().is_some());
}

#[test]
fn test_moka_backend_rewrite_replaces_ttl() {
    let backend = MokaCacheBackend::new();

    backend
        .set("key", b"1", Some(Duration::from_millis(50)))
        .unwrap();
    backend.set("key", b"2", None).unwrap();

    sleep(Duration::from_millis(150));

    assert_eq!(backend.get("key").unwrap().as_deref(), Some(b"2".as_slice()));
}

#[test]
fn test_moka_backend_keys_by_pattern() {
    let backend = MokaCacheBackend::new();
    backend.set("session:1", b"1", None).unwrap();
    backend.set("session:2", b"2", None).unwrap();
    backend.set("user:1", b"3", None).unwrap();

    let mut sessions = backend.keys("session:*").unwrap();
    sessions.sort();
    assert_eq!(sessions, vec!["session:1", "session:2"]);

    assert_eq!(backend.keys("*").unwrap().len(), 3);
    assert!(backend.keys("order:*").unwrap().is_empty());
}

#[test]
fn test_moka_backend_escaped_pattern_matches_literally() {
    let backend = MokaCacheBackend::new();
    backend.set("tenant[1]:a", b"1", None).unwrap();
    backend.set("tenant1:b", b"2", None).unwrap();

    assert_eq!(backend.keys(r"tenant\[1\]:*").unwrap(), vec!["tenant[1]:a"]);
}

#[test]
fn test_moka_backend_rejects_invalid_pattern() {
    let backend = MokaCacheBackend::new();
    assert!(backend.keys("session:[").is_err());
}

#[test]
fn test_moka_backend_get_many_keeps_order() {
    let backend = MokaCacheBackend::new();
    backend.set("a", b"1", None).unwrap();
    backend.set("c", b"3", None).unwrap();

    let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let values = backend.get_many(&keys).unwrap();

    assert_eq!(
        values,
        vec![Some(b"1".to_vec()), None, Some(b"3".to_vec())]
    );
}

#[test]
fn test_moka_backend_metadata() {
    let backend = MokaCacheBackend::with_capacity(42);
    assert_eq!(backend.max_capacity(), 42);
    assert_eq!(backend.provider_name(), "moka");
    assert!(backend.ping().is_ok());
    assert!(format!("{backend:?}").contains("MokaCacheBackend"));
}
