//! dataviz-studio: dataset management and a pure chart-geometry engine.
//!
//! The crate keeps a strict split between the geometry core, which is a set
//! of pure projection functions, and the storage/session glue surrounding it.

pub mod api;
pub mod core;
pub mod error;
pub mod store;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, Studio};
pub use error::{StudioError, StudioResult};
