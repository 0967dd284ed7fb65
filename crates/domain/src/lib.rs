//! # smartlaunch-domain
//!
//! Pure domain model for the smartlaunch transit auto-navigation system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **geographic primitives** (points, haversine distance, geofence
//!   circle approximation)
//! - Define **SmartLaunch rules** (geofence + optional time window that
//!   triggers navigation to a stop)
//! - Define **Stops** (rows of the static transit stops dataset)
//! - Define **Recent visits** and **Saved items** (rider-local history)
//! - Define **Launch events** (records of rule matches and their outcome)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod geo;
pub mod rule;
pub mod saved;
pub mod stop;
pub mod visit;
