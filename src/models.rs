use serde::{Deserialize, Serialize};

/// One telemetry observation for a region/service pair at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub region: String,
    pub service: String,
    pub latency_ms: f64,
    pub uptime_pct: f64,
    pub timestamp: i64,
}

/// Request body for the analyze operation. Region order defines output
/// order; duplicates are allowed and processed independently.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRequest {
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

/// Per-region summary metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub region: String,
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionMetrics {
    /// Sentinel record for a region with no samples.
    pub fn zero(region: &str) -> Self {
        Self {
            region: region.to_string(),
            avg_latency: 0.0,
            p95_latency: 0.0,
            avg_uptime: 0.0,
            breaches: 0,
        }
    }
}
