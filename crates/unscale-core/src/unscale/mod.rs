pub mod config;
mod orchestrator;
mod types;

pub use config::{CompareMode, UnscaleConfig};
pub use orchestrator::{determine_dimensions, Unscaler};
pub use types::{NoOpReporter, ProgressReporter, UnscaleReport};
