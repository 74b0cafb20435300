//! Configuration loading and the load-then-split pipeline.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::Config;
pub use error::PipelineError;
pub use pipeline::{ChunkingPipeline, PipelineOutput};
