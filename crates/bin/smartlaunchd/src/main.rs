//! # smartlaunchd — SmartLaunch daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing
//! - Construct store implementations (adapters)
//! - Construct application services, injecting stores via port traits
//! - Run one launch check on startup (the page-entry evaluation)
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use smartlaunch_adapter_http_axum::state::AppState;
use smartlaunch_adapter_stops_csv::CsvStopSource;
use smartlaunch_adapter_storage_json::{JsonRecentStore, JsonRuleStore, JsonSavedStore};
use smartlaunch_adapter_virtual::{TracingNavigator, VirtualLocator};
use smartlaunch_app::event_bus::InProcessEventBus;
use smartlaunch_app::launch_engine::{CheckOutcome, LaunchEngine};
use smartlaunch_app::services::recent_service::RecentService;
use smartlaunch_app::services::rule_service::RuleService;
use smartlaunch_app::services::saved_service::SavedService;
use smartlaunch_app::services::stop_catalog::StopCatalog;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Stores. The rule store is shared between the HTTP service and the
    // launch engine, so it goes behind an Arc.
    let rule_store = Arc::new(JsonRuleStore::new(&config.storage.data_dir));
    let recent_store = JsonRecentStore::new(&config.storage.data_dir);
    let saved_store = JsonSavedStore::new(&config.storage.data_dir);

    // Device-facing adapters.
    let locator = match (config.launch.device_lat, config.launch.device_lon) {
        (Some(lat), Some(lon)) => VirtualLocator::at(lat, lon),
        _ => VirtualLocator::unavailable(),
    };
    let navigator = TracingNavigator::new();
    let event_bus = InProcessEventBus::new(256);

    // One launch check for this "page entry". A matched rule starts its
    // cancelable notice in the background.
    let engine = LaunchEngine::new(Arc::clone(&rule_store), locator, navigator, event_bus)
        .with_notice_delay(Duration::from_millis(config.launch.notice_delay_ms));
    match engine.check().await? {
        CheckOutcome::Matched(pending) => {
            tracing::info!(stop_id = %pending.stop_id(), "launch notice started");
            tokio::spawn(async move {
                if let Err(err) = pending.run().await {
                    tracing::error!(error = %err, "pending launch failed");
                }
            });
        }
        CheckOutcome::NoRules => tracing::debug!("no enabled rules, skipping launch check"),
        CheckOutcome::NoFix => tracing::debug!("no location fix, skipping launch check"),
        CheckOutcome::NoMatch => tracing::debug!("no rule matched the current position"),
    }

    // HTTP
    let state = AppState::new(
        RuleService::new(rule_store),
        RecentService::new(recent_store),
        SavedService::new(saved_store),
        StopCatalog::new(CsvStopSource::new(&config.stops.csv_path)),
    );
    let app = smartlaunch_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("smartlaunchd listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
    }
}
