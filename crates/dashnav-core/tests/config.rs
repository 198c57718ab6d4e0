use std::io::Write;

use dashnav_core::{ConfigError, DashboardConfig, NavChrome, PageDescriptor};

#[test]
fn load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "nav_items": [
                {{"title": "Jobs", "path": "/jobs", "id": "jobs"}},
                {{"title": "Metrics", "path": "/metrics", "id": "metrics"}}
            ],
            "metrics": {{"context_loaded": true, "grafana_host": "DISABLED"}},
            "window_title": "Cluster Dashboard"
        }}"#
    )
    .unwrap();

    let config = DashboardConfig::load(file.path()).unwrap();
    assert_eq!(config.window_title, "Cluster Dashboard");

    let hierarchy = [PageDescriptor::new("jobs", "Jobs").with_path("/jobs")];
    let chrome = NavChrome::derive(&config.nav_menu(), &hierarchy);
    let ids: Vec<&str> = chrome.items.iter().map(|i| i.item.id.as_str()).collect();
    assert_eq!(ids, vec!["jobs"]);
    assert!(chrome.items[0].highlighted);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DashboardConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
