pub mod config;
mod context;
pub mod dispersal;
pub mod lifecycle;
pub mod light;
pub mod mutation;
pub mod resolve;
mod runner;

pub use config::{CanopyShape, ConfigError, SimParams};
pub use context::{TickContext, TickReport};
pub use mutation::TradeOff;
pub use runner::{RunError, SimConfig, run, run_to_sink, run_with_rng, tick, tick_with_report};
