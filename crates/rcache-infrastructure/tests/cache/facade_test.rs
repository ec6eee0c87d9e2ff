//! Facade behavior against the Moka backend

use crate::test_utils::Session;
use chrono::{TimeDelta, Utc};
use rcache_domain::{CacheStats, Expiry};
use rcache_infrastructure::cache::{CacheFacade, CacheOperation};
use rcache_providers::cache::MokaCacheBackend;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn facade() -> CacheFacade {
    CacheFacade::new(Arc::new(MokaCacheBackend::new()))
}

#[test]
fn test_store_then_fetch_returns_value() {
    let cache = facade();

    cache.store("session:42", &Session::new("alice")).unwrap();

    let session: Session = cache.fetch("session:42").unwrap();
    assert_eq!(session, Session::new("alice"));
}

#[test]
fn test_expired_deadline_removes_key() {
    let cache = facade();
    cache.store("session:42", &Session::new("alice")).unwrap();

    cache
        .store_until(
            "session:42",
            &Session::new("alice"),
            Utc::now() - TimeDelta::seconds(1),
        )
        .unwrap();

    assert!(!cache.exists("session:42").unwrap());
    let session: Session = cache.fetch("session:42").unwrap();
    assert_eq!(session, Session::default());
}

#[test]
fn test_future_deadline_stores_with_ttl() {
    let cache = facade();

    cache
        .store_until("token", &"abc", Utc::now() + TimeDelta::hours(1))
        .unwrap();

    assert!(cache.exists("token").unwrap());
    assert_eq!(cache.fetch::<String>("token").unwrap(), "abc");
}

#[test]
fn test_non_positive_duration_removes_key() {
    let cache = facade();

    for ttl in [TimeDelta::zero(), TimeDelta::seconds(-5)] {
        cache.store("counter", &1_u32).unwrap();
        cache.store_for("counter", &2_u32, ttl).unwrap();

        assert!(!cache.exists("counter").unwrap(), "ttl {ttl} should evict");
    }
}

#[test]
fn test_duration_is_not_renewed_on_read() {
    let cache = facade();

    cache
        .store_for("short", &"lived", TimeDelta::milliseconds(300))
        .unwrap();
    thread::sleep(Duration::from_millis(150));
    assert_eq!(cache.fetch::<String>("short").unwrap(), "lived");

    thread::sleep(Duration::from_millis(300));
    assert_eq!(cache.fetch::<String>("short").unwrap(), "");
    assert!(!cache.exists("short").unwrap());
}

#[test]
fn test_store_with_accepts_any_expiry_form() {
    let cache = facade();

    cache.store_with("a", &1, Expiry::Never).unwrap();
    cache.store_with("b", &2, Duration::from_secs(60)).unwrap();
    cache.store_with("c", &3, TimeDelta::minutes(1)).unwrap();

    assert_eq!(cache.fetch::<i32>("a").unwrap(), 1);
    assert_eq!(cache.fetch::<i32>("b").unwrap(), 2);
    assert_eq!(cache.fetch::<i32>("c").unwrap(), 3);
}

#[test]
fn test_absent_value_is_not_stored() {
    let cache = facade();

    cache.store("missing", &None::<Session>).unwrap();

    assert!(!cache.exists("missing").unwrap());
}

#[test]
fn test_absent_value_with_expired_deadline_keeps_key() {
    let cache = facade();
    cache.store("kept", &7_i64).unwrap();

    cache
        .store_until("kept", &None::<i64>, Utc::now() - TimeDelta::hours(1))
        .unwrap();

    assert_eq!(cache.fetch::<i64>("kept").unwrap(), 7);
}

#[test]
fn test_fetch_missing_and_empty_keys_return_default() {
    let cache = facade();

    assert_eq!(cache.fetch::<Session>("nobody").unwrap(), Session::default());
    assert_eq!(cache.fetch::<u64>("").unwrap(), 0);
    assert_eq!(cache.get::<String>("").unwrap(), None);
}

#[test]
fn test_get_distinguishes_missing_from_default() {
    let cache = facade();
    cache.store("zero", &0_u8).unwrap();

    assert_eq!(cache.get::<u8>("zero").unwrap(), Some(0));
    assert_eq!(cache.get::<u8>("none").unwrap(), None);
}

#[test]
fn test_remove_reports_deletion() {
    let cache = facade();
    cache.store("gone", &"soon").unwrap();

    assert!(cache.remove("gone").unwrap());
    assert!(!cache.remove("gone").unwrap());
    assert!(!cache.exists("gone").unwrap());
}

#[test]
fn test_fetch_all_returns_every_entry() {
    let cache = facade();
    cache.store("session:1", &Session::new("alice")).unwrap();
    cache.store("session:2", &Session::new("bob")).unwrap();

    let all: HashMap<String, Session> = cache.fetch_all().unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all["session:1"], Session::new("alice"));
    assert_eq!(all["session:2"], Session::new("bob"));
}

#[test]
fn test_fetch_all_on_empty_store() {
    let all: HashMap<String, Session> = facade().fetch_all().unwrap();
    assert!(all.is_empty());
}

#[test]
fn test_fetch_all_fails_on_undecodable_entry() {
    let cache = facade();
    cache.store("session:1", &Session::new("alice")).unwrap();
    cache.store("counter", &5_u32).unwrap();

    let err = cache.fetch_all::<Session>().unwrap_err();

    assert!(err.is_serialization());
    assert_eq!(cache.stats().failures, 1);
}

#[test]
fn test_namespace_isolates_keys() {
    let backend = Arc::new(MokaCacheBackend::new());
    let shared = CacheFacade::new(backend.clone());
    let app = CacheFacade::new(backend).with_namespace("app");

    app.store("user", &Session::new("alice")).unwrap();
    shared.store("user", &Session::new("bob")).unwrap();

    assert_eq!(app.fetch::<Session>("user").unwrap(), Session::new("alice"));
    assert_eq!(shared.fetch::<Session>("user").unwrap(), Session::new("bob"));
    assert_eq!(
        shared.fetch::<Session>("app:user").unwrap(),
        Session::new("alice")
    );

    let scoped: HashMap<String, Session> = app.fetch_all().unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped["user"], Session::new("alice"));

    let everything: HashMap<String, Session> = shared.fetch_all().unwrap();
    assert_eq!(everything.len(), 2);
    assert!(everything.contains_key("app:user"));
}

#[test]
fn test_fetch_all_with_bracketed_namespace() {
    let cache = facade().with_namespace("tenant[1]");
    cache.store("a", &1).unwrap();

    let all: HashMap<String, i32> = cache.fetch_all().unwrap();

    assert_eq!(all, HashMap::from([("a".to_string(), 1)]));
}

#[test]
fn test_fetch_all_with_unbalanced_brace_namespace() {
    let cache = facade().with_namespace("t{x");
    cache.store("a", &1).unwrap();

    let all: HashMap<String, i32> = cache.fetch_all().unwrap();

    assert_eq!(all, HashMap::from([("a".to_string(), 1)]));
}

#[test]
fn test_namespace_wildcards_match_literally() {
    let backend = Arc::new(MokaCacheBackend::new());
    let starred = CacheFacade::new(backend.clone()).with_namespace("a*b?");
    let other = CacheFacade::new(backend).with_namespace("aXbY");

    starred.store("mine", &1).unwrap();
    other.store("theirs", &2).unwrap();

    let all: HashMap<String, i32> = starred.fetch_all().unwrap();
    assert_eq!(all, HashMap::from([("mine".to_string(), 1)]));
}

#[test]
fn test_empty_namespace_is_ignored() {
    let cache = facade().with_namespace("");
    assert_eq!(cache.namespace(), None);
}

#[test]
fn test_stats_count_hits_and_misses() {
    let cache = facade();
    cache.store("hit", &1).unwrap();

    let _ = cache.fetch::<i32>("hit").unwrap();
    let _ = cache.fetch::<i32>("hit").unwrap();
    let _ = cache.fetch::<i32>("miss").unwrap();

    let stats = cache.stats();
    assert_eq!(
        stats,
        CacheStats {
            hits: 2,
            misses: 1,
            failures: 0
        }
    );
    assert!((stats.hit_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_clones_share_backend_and_counters() {
    let cache = facade();
    let clone = cache.clone();

    cache.store("shared", &"value").unwrap();
    assert_eq!(clone.fetch::<String>("shared").unwrap(), "value");
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn test_ping_and_provider_name() {
    let cache = facade();

    cache.ping().unwrap();
    assert_eq!(cache.provider_name(), "moka");
}

#[test]
fn test_operation_names() {
    assert_eq!(CacheOperation::Store.as_str(), "store");
    assert_eq!(CacheOperation::FetchAll.to_string(), "fetch_all");
    assert_eq!(CacheOperation::Exists.to_string(), "exists");
}
