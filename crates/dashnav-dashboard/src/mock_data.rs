//! Static sample data shown by the dashboard screens.

/// A submitted job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobSummary {
    pub id: &'static str,
    pub entrypoint: &'static str,
    pub status: &'static str,
}

/// A cluster node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeSummary {
    pub id: &'static str,
    pub address: &'static str,
    pub alive: bool,
}

/// A live actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorSummary {
    pub id: &'static str,
    pub class_name: &'static str,
    pub node_id: &'static str,
}

/// A deployed serve application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServeApp {
    pub name: &'static str,
    pub route_prefix: &'static str,
    pub replicas: u32,
}

pub const JOBS: &[JobSummary] = &[
    JobSummary { id: "123", entrypoint: "python train.py", status: "RUNNING" },
    JobSummary { id: "124", entrypoint: "python eval.py --split test", status: "SUCCEEDED" },
    JobSummary { id: "125", entrypoint: "python ingest.py", status: "FAILED" },
];

pub const NODES: &[NodeSummary] = &[
    NodeSummary { id: "node-a", address: "10.0.0.11", alive: true },
    NodeSummary { id: "node-b", address: "10.0.0.12", alive: true },
    NodeSummary { id: "node-c", address: "10.0.0.13", alive: false },
];

pub const ACTORS: &[ActorSummary] = &[
    ActorSummary { id: "a1f3", class_name: "ParameterServer", node_id: "node-a" },
    ActorSummary { id: "b72e", class_name: "RolloutWorker", node_id: "node-b" },
    ActorSummary { id: "c09d", class_name: "RolloutWorker", node_id: "node-b" },
];

pub const SERVE_APPS: &[ServeApp] = &[
    ServeApp { name: "llm", route_prefix: "/llm", replicas: 4 },
    ServeApp { name: "embeddings", route_prefix: "/embed", replicas: 2 },
];

pub const LOG_FILES: &[&str] = &["raylet.out", "gcs_server.out", "dashboard.log"];

pub fn find_job(id: &str) -> Option<&'static JobSummary> {
    JOBS.iter().find(|j| j.id == id)
}

pub fn find_node(id: &str) -> Option<&'static NodeSummary> {
    NODES.iter().find(|n| n.id == id)
}

pub fn find_actor(id: &str) -> Option<&'static ActorSummary> {
    ACTORS.iter().find(|a| a.id == id)
}

pub fn find_serve_app(name: &str) -> Option<&'static ServeApp> {
    SERVE_APPS.iter().find(|a| a.name == name)
}
