pub mod api;
pub mod classifier;
pub mod config;
pub mod metrics;
pub mod visualizations;

type Result<T> = anyhow::Result<T>;
