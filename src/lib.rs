//! Beetsim - Sugar-Beet Batch Strategy Simulator
//!
//! Evaluates competing batch-selection heuristics for processing sugar-beet
//! batches whose sugar content degrades over discrete steps, via Monte-Carlo
//! averaging over independently generated trials. The crate is the engine
//! only: parameter collection and chart rendering are external consumers of
//! [`ExperimentConfig`] and [`SimReport`].

pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod report;
pub mod runner;
pub mod strategy;
pub mod trial;
pub mod yields;

pub use config::ExperimentConfig;
pub use error::SimError;
pub use report::{SimReport, StrategyResult};
pub use runner::run_experiments;
pub use strategy::Strategy;
