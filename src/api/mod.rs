mod engine;
mod engine_config;
mod studio;

pub use engine::{ChartEngine, ChartFrame, ChartKind};
pub use engine_config::ChartEngineConfig;
pub use studio::Studio;
