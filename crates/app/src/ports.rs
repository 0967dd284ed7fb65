//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod event_bus;
pub mod location;
pub mod navigation;
pub mod stop_source;
pub mod storage;

pub use event_bus::EventPublisher;
pub use location::{Fix, FixOptions, LocateError, Locator};
pub use navigation::NavigationSink;
pub use stop_source::StopSource;
pub use storage::{RecentStore, RuleStore, SavedStore};
