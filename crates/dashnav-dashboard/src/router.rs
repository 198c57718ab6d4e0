//! In-app routing: maps paths to the screen tree rendered inside the shell.
//!
//! The navigation chrome never looks at routes; it only sees the pages that
//! screens register while mounted.

/// A resolved dashboard route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Overview,
    Jobs,
    Job { job_id: String },
    Serve,
    ServeApp { app: String },
    Cluster,
    Node { node_id: String },
    Actors,
    Actor { actor_id: String },
    Metrics,
    Logs,
    LogFile { node_id: String, file: String },
    NotFound { path: String },
}

impl Route {
    /// Resolves a path. `/` lands on the overview.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["overview"] => Route::Overview,
            ["jobs"] => Route::Jobs,
            ["jobs", job_id] => Route::Job {
                job_id: job_id.to_string(),
            },
            ["serve"] => Route::Serve,
            ["serve", "applications", app] => Route::ServeApp {
                app: app.to_string(),
            },
            ["cluster"] => Route::Cluster,
            ["cluster", "nodes", node_id] => Route::Node {
                node_id: node_id.to_string(),
            },
            ["actors"] => Route::Actors,
            ["actors", actor_id] => Route::Actor {
                actor_id: actor_id.to_string(),
            },
            ["metrics"] => Route::Metrics,
            ["logs"] => Route::Logs,
            ["logs", node_id, file] => Route::LogFile {
                node_id: node_id.to_string(),
                file: file.to_string(),
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/overview".to_string(),
            Route::Jobs => "/jobs".to_string(),
            Route::Job { job_id } => format!("/jobs/{job_id}"),
            Route::Serve => "/serve".to_string(),
            Route::ServeApp { app } => format!("/serve/applications/{app}"),
            Route::Cluster => "/cluster".to_string(),
            Route::Node { node_id } => format!("/cluster/nodes/{node_id}"),
            Route::Actors => "/actors".to_string(),
            Route::Actor { actor_id } => format!("/actors/{actor_id}"),
            Route::Metrics => "/metrics".to_string(),
            Route::Logs => "/logs".to_string(),
            Route::LogFile { node_id, file } => format!("/logs/{node_id}/{file}"),
            Route::NotFound { path } => path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_overview() {
        assert_eq!(Route::parse("/"), Route::Overview);
        assert_eq!(Route::parse(""), Route::Overview);
    }

    #[test]
    fn test_nested_routes() {
        assert_eq!(
            Route::parse("/jobs/123"),
            Route::Job {
                job_id: "123".to_string()
            }
        );
        assert_eq!(
            Route::parse("/cluster/nodes/node-a/"),
            Route::Node {
                node_id: "node-a".to_string()
            }
        );
        assert_eq!(
            Route::parse("/logs/node-a/raylet.out"),
            Route::LogFile {
                node_id: "node-a".to_string(),
                file: "raylet.out".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(
            Route::parse("/nowhere/at/all"),
            Route::NotFound {
                path: "/nowhere/at/all".to_string()
            }
        );
    }

    #[test]
    fn test_path_parses_back() {
        let routes = [
            Route::Jobs,
            Route::Job { job_id: "7".into() },
            Route::ServeApp { app: "llm".into() },
            Route::Actor { actor_id: "a1".into() },
            Route::LogFile { node_id: "n".into(), file: "f.log".into() },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
