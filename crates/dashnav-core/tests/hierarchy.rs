//! Register/release sequences against the hierarchy store, checked against a
//! simple model of which registrations are still live.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use dashnav_core::{
    active_section, derive_breadcrumbs, PageDescriptor, PageHierarchyStore, RegistrationHandle,
    SharedHierarchy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn random_sequences_match_model() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut store = PageHierarchyStore::new();
        // (handle, id) of every registration ever made, in order.
        let mut issued: Vec<(RegistrationHandle, String)> = Vec::new();
        let mut live: Vec<(RegistrationHandle, String)> = Vec::new();
        let mut registers = 0usize;
        let mut effective_releases = 0usize;

        for step in 0..200 {
            if issued.is_empty() || rng.random_bool(0.55) {
                let id = format!("page-{seed}-{step}");
                let handle = store.register(PageDescriptor::new(id.clone(), "Same title"));
                registers += 1;
                issued.push((handle, id.clone()));
                live.push((handle, id));
            } else {
                // Release any handle ever issued, including dead ones.
                let (handle, _) = issued[rng.random_range(0..issued.len())].clone();
                let was_live = live.iter().any(|(h, _)| *h == handle);
                assert_eq!(store.release(handle), was_live);
                if was_live {
                    effective_releases += 1;
                    live.retain(|(h, _)| *h != handle);
                }
            }

            assert_eq!(store.len(), registers - effective_releases);
            let expected: Vec<&str> = live.iter().map(|(_, id)| id.as_str()).collect();
            let actual: Vec<&str> = store
                .current_hierarchy()
                .iter()
                .map(|p| p.id.as_str())
                .collect();
            assert_eq!(actual, expected, "seed {seed} step {step}");
        }
    }
}

#[test]
fn navigating_into_and_out_of_nested_routes() {
    let shared = SharedHierarchy::new();

    let jobs = shared.register(PageDescriptor::new("jobs", "Jobs").with_path("/jobs"));
    assert!(shared.with_hierarchy(derive_breadcrumbs).is_empty());
    assert_eq!(
        shared.with_hierarchy(|h| active_section(h).map(str::to_string)),
        Some("jobs".to_string())
    );

    let job = shared.register(PageDescriptor::new("job", "Job 123").with_path("123"));
    let trail = shared.with_hierarchy(derive_breadcrumbs);
    assert_eq!(trail[1].resolved_path.as_deref(), Some("/jobs/123"));

    // Switching job detail without unmounting the screen.
    assert!(job.update(PageDescriptor::new("job", "Job 456").with_path("456")));
    let trail = shared.with_hierarchy(derive_breadcrumbs);
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[1].label, "Job 456");
    assert_eq!(trail[1].resolved_path.as_deref(), Some("/jobs/456"));

    // Outer screen unmounts first; the inner one is still removed by identity.
    drop(jobs);
    assert_eq!(shared.snapshot().len(), 1);
    drop(job);
    assert!(shared.snapshot().is_empty());
}

#[test]
fn panicking_screen_still_releases() {
    let shared = SharedHierarchy::new();
    let _cluster = shared.register(PageDescriptor::new("cluster", "Cluster").with_path("/cluster"));

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _node = shared.register(PageDescriptor::new("node", "node-1").with_path("node-1"));
        panic!("render failed");
    }));

    assert!(result.is_err());
    let ids: Vec<String> = shared.snapshot().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["cluster"]);
}

#[tokio::test]
async fn cancelled_setup_does_not_orphan_entry() {
    let shared = SharedHierarchy::new();
    let registration = shared.register(PageDescriptor::new("actors", "Actor").with_path("/actors"));

    let setup = async move {
        let _registration = registration;
        std::future::pending::<()>().await;
    };

    let outcome = tokio::time::timeout(Duration::from_millis(10), setup).await;
    assert!(outcome.is_err());
    assert!(shared.snapshot().is_empty());
}
