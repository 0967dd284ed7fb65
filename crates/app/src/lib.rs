//! # smartlaunch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RuleStore` / `RecentStore` / `SavedStore` — whole-list persistence
//!   - `Locator` — one-shot device location fix
//!   - `NavigationSink` — page transition to a stop's detail view
//!   - `StopSource` — static stops dataset
//!   - `EventPublisher` — fire-and-forget launch events
//! - Define **use-case services**:
//!   - `RuleService` — rule CRUD with whole-list persistence
//!   - `RecentService` / `SavedService` — rider-local history
//!   - `StopCatalog` — cached stops dataset with nearby lookup
//!   - `LaunchEngine` — rule matching and cancelable redirect sequencing
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `smartlaunch-domain` only (plus `tokio::sync`/`tokio::time`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod event_bus;
pub mod launch_engine;
pub mod ports;
pub mod services;
