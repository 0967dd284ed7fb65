//! # smartlaunch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API the rider front-end talks to
//!   (`/api/rules`, `/api/recent`, `/api/saved`, `/api/stops`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into HTTP status codes
//!
//! All request and response bodies use the camelCase field names the
//! front-end persisted (`stopId`, `radiusMeters`, …).
//!
//! ## Dependency rule
//! Depends on `smartlaunch-app` (for port traits and services) and
//! `smartlaunch-domain` (for domain types used in request/response
//! mapping). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
