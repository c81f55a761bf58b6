//! PulseCore - Regional Latency Analytics Service

pub mod aggregator;
pub mod config;
pub mod dataset;
pub mod models;
pub mod router;
pub mod statistics;

pub use aggregator::LatencyAggregator;
pub use dataset::Dataset;
