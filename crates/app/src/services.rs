//! Use-case services built on the port traits.

pub mod recent_service;
pub mod rule_service;
pub mod saved_service;
pub mod stop_catalog;
