//! Entry point for the desktop dashboard.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dashnav_core::DashboardConfig;
use dashnav_dashboard::components::App;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

/// Dashboard-specific CSS embedded at compile time.
const DASHBOARD_CSS: &str = include_str!("../assets/dashboard.css");

/// Configuration resolved before launch.
static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "dashnav-dashboard")]
#[command(about = "Cluster dashboard with live breadcrumb navigation")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mark the metrics subsystem as ready
    #[arg(long)]
    metrics_ready: bool,

    /// Grafana host ("DISABLED" hides the metrics item)
    #[arg(long)]
    grafana_host: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

fn resolve_config(args: &Args) -> anyhow::Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    if args.metrics_ready {
        config.metrics.context_loaded = Some(true);
    }
    if let Some(host) = &args.grafana_host {
        config.metrics.grafana_host = Some(host.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!(
        nav_items = config.nav_items.len(),
        metrics_visible = config.feature_gate().is_open(),
        "Starting dashboard"
    );

    let title = config.window_title.clone();
    CONFIG.set(config).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1280, 800)),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    dashnav_ui::SHARED_CSS,
                    DASHBOARD_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Hands the resolved config to the app.
#[component]
fn RootApp() -> Element {
    let config = CONFIG.get().cloned().unwrap_or_default();

    use_drop(|| {
        tracing::info!("Shutting down dashboard");
    });

    rsx! {
        App { config }
    }
}
