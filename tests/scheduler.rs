//! Scheduler tests: startup pass, independence, overlap policy, shutdown.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::future::BoxFuture;
use status_monitor::monitor::{
    HttpProber, Probe, ProbeSettings, Scheduler, StatusRecord, StatusStore, Target, TargetRegistry,
};
use status_monitor::Shutdown;

mod common;

/// Prober driven by a closure, for deterministic scheduling tests.
struct FnProber<F>(F);

impl<F> Probe for FnProber<F>
where
    F: Fn(&Target) -> BoxFuture<'static, StatusRecord> + Send + Sync + 'static,
{
    fn probe(&self, target: &Target) -> BoxFuture<'static, StatusRecord> {
        (self.0)(target)
    }
}

fn http_prober(timeout: Duration) -> Arc<HttpProber> {
    Arc::new(
        HttpProber::new(ProbeSettings {
            timeout,
            ..ProbeSettings::default()
        })
        .unwrap(),
    )
}

#[tokio::test]
async fn test_good_and_bad_targets_after_first_tick() {
    let good = common::start_programmable_backend(|| async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        (200, "fine".to_string())
    })
    .await;
    let bad = common::start_silent_backend().await;

    let registry = TargetRegistry::new([common::url(good), common::url(bad)]);
    let store = StatusStore::new(&registry);
    let timeout = Duration::from_millis(300);
    let scheduler = Scheduler::new(http_prober(timeout), store.clone(), Duration::from_millis(1000));
    let shutdown = Shutdown::new();
    let handle = scheduler.start(&registry, &shutdown);

    assert!(common::eventually(Duration::from_secs(3), || store.len() == 2).await);
    let snapshot = store.snapshot();
    shutdown.trigger();
    handle.join().await;

    assert_eq!(snapshot.len(), 2);

    assert_eq!(snapshot[0].target, common::url(good));
    assert!(snapshot[0].reachable);
    assert_eq!(snapshot[0].http_code, Some(200));
    let latency = snapshot[0].latency_ms.expect("good target has latency");
    assert!(latency >= 5 && latency <= 300, "latency {latency}");

    assert_eq!(snapshot[1].target, common::url(bad));
    assert!(!snapshot[1].reachable);
    assert_eq!(snapshot[1].http_code, None);
    assert_eq!(snapshot[1].latency_ms, None);
}

#[tokio::test]
async fn test_startup_pass_populates_every_target_in_order() {
    let mut urls = Vec::new();
    for status in [200u16, 404, 500] {
        urls.push(common::url(common::start_mock_backend(status).await));
    }
    urls.push(common::url(common::refused_addr().await));
    urls.push("not a url".to_string());

    let registry = TargetRegistry::new(&urls);
    let store = StatusStore::new(&registry);
    // Long interval: only the immediate startup probe can populate the store.
    let scheduler = Scheduler::new(http_prober(Duration::from_secs(2)), store.clone(), Duration::from_secs(60));
    let shutdown = Shutdown::new();
    let handle = scheduler.start(&registry, &shutdown);
    assert_eq!(handle.len(), urls.len());

    assert!(common::eventually(Duration::from_secs(5), || store.len() == urls.len()).await);
    shutdown.trigger();
    handle.join().await;

    let snapshot = store.snapshot();
    let order: Vec<&str> = snapshot.iter().map(|r| r.target.as_str()).collect();
    let expected: Vec<&str> = urls.iter().map(String::as_str).collect();
    assert_eq!(order, expected);

    let up: Vec<bool> = snapshot.iter().map(|r| r.reachable).collect();
    assert_eq!(up, vec![true, false, false, false, false]);
}

#[tokio::test]
async fn test_hung_target_does_not_delay_others() {
    let calls: Arc<Mutex<HashMap<String, usize>>> = Arc::default();
    let counter = calls.clone();

    let prober = FnProber(move |target: &Target| -> BoxFuture<'static, StatusRecord> {
        *counter.lock().unwrap().entry(target.to_string()).or_default() += 1;
        let target = target.clone();
        Box::pin(async move {
            if target.as_str() == "http://a.test" {
                std::future::pending::<()>().await;
            }
            StatusRecord::responded(target.as_str(), true, 200, 1)
        })
    });

    let registry = TargetRegistry::from_list("http://a.test,http://b.test");
    let store = StatusStore::new(&registry);
    let scheduler = Scheduler::new(Arc::new(prober), store.clone(), Duration::from_millis(50));
    let shutdown = Shutdown::new();
    let handle = scheduler.start(&registry, &shutdown);

    assert!(common::eventually(Duration::from_secs(2), || store.get("http://b.test").is_some()).await);
    let first = store.get("http://b.test").unwrap().observed_at;
    tokio::time::sleep(Duration::from_millis(300)).await;
    let later = store.get("http://b.test").unwrap().observed_at;

    shutdown.trigger();
    handle.join().await;

    assert!(later > first, "b must keep being probed while a hangs");
    assert!(store.get("http://a.test").is_none(), "a never completed");

    let calls = calls.lock().unwrap();
    assert_eq!(calls["http://a.test"], 1, "ticks for a are skipped while its probe is in flight");
    assert!(calls["http://b.test"] >= 4, "b probed {} times", calls["http://b.test"]);
}

#[tokio::test]
async fn test_at_most_one_probe_in_flight_per_target() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_seen = Arc::new(AtomicUsize::new(0));
    let completed = Arc::new(AtomicUsize::new(0));

    let (current, max, done) = (in_flight.clone(), max_seen.clone(), completed.clone());
    let prober = FnProber(move |target: &Target| -> BoxFuture<'static, StatusRecord> {
        let (current, max, done) = (current.clone(), max.clone(), done.clone());
        let target = target.clone();
        Box::pin(async move {
            let now = current.fetch_add(1, Ordering::SeqCst) + 1;
            max.fetch_max(now, Ordering::SeqCst);
            // Slower than the interval.
            tokio::time::sleep(Duration::from_millis(120)).await;
            current.fetch_sub(1, Ordering::SeqCst);
            done.fetch_add(1, Ordering::SeqCst);
            StatusRecord::unreachable(target.as_str())
        })
    });

    let registry = TargetRegistry::from_list("http://slow.test");
    let store = StatusStore::new(&registry);
    let scheduler = Scheduler::new(Arc::new(prober), store.clone(), Duration::from_millis(20));
    let shutdown = Shutdown::new();
    let handle = scheduler.start(&registry, &shutdown);

    tokio::time::sleep(Duration::from_millis(500)).await;
    shutdown.trigger();
    handle.join().await;

    assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    assert!(completed.load(Ordering::SeqCst) >= 2);
    assert_eq!(store.snapshot().len(), 1);
}

#[tokio::test]
async fn test_shutdown_stops_all_tasks() {
    let prober = FnProber(|target: &Target| -> BoxFuture<'static, StatusRecord> {
        let target = target.clone();
        Box::pin(async move {
            // In-flight probes are dropped on shutdown.
            std::future::pending::<()>().await;
            StatusRecord::unreachable(target.as_str())
        })
    });

    let registry = TargetRegistry::from_list("http://a.test,http://b.test,http://c.test");
    let store = StatusStore::new(&registry);
    let scheduler = Scheduler::new(Arc::new(prober), store, Duration::from_millis(10));
    let shutdown = Shutdown::new();
    let handle = scheduler.start(&registry, &shutdown);
    assert_eq!(shutdown.receiver_count(), 3);

    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.trigger();

    tokio::time::timeout(Duration::from_secs(1), handle.join())
        .await
        .expect("scheduler tasks exit promptly after shutdown");
    assert_eq!(shutdown.receiver_count(), 0);
}

#[tokio::test]
async fn test_abort_stops_tasks_without_signal() {
    let probes = Arc::new(AtomicUsize::new(0));
    let counter = probes.clone();
    let prober = FnProber(move |target: &Target| -> BoxFuture<'static, StatusRecord> {
        counter.fetch_add(1, Ordering::SeqCst);
        let target = target.clone();
        Box::pin(async move { StatusRecord::unreachable(target.as_str()) })
    });

    let registry = TargetRegistry::from_list("http://a.test");
    let scheduler = Scheduler::new(Arc::new(prober), StatusStore::new(&registry), Duration::from_millis(10));
    let shutdown = Shutdown::new();
    let mut handle = scheduler.start(&registry, &shutdown);

    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.abort();
    handle.join().await;

    let after_abort = probes.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(probes.load(Ordering::SeqCst), after_abort);
}
