//! Per-region latency and uptime aggregation.

use crate::dataset::Dataset;
use crate::models::{RegionMetrics, Sample};
use crate::statistics::{mean, percentile, round_to};

/// Computes per-region summary metrics over an immutable dataset snapshot.
///
/// The dataset is read-only after construction, so `analyze` is a pure,
/// stateless computation and needs no locking under concurrent use.
pub struct LatencyAggregator {
    dataset: Dataset,
}

impl LatencyAggregator {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns one `RegionMetrics` per requested region, in request order.
    ///
    /// Regions match by exact string equality. A region with no samples
    /// yields a zero record rather than an error; duplicates in the input
    /// are each processed independently. Never fails: an unknown region or
    /// a negative threshold is processed arithmetically as-is.
    pub fn analyze(&self, regions: &[String], threshold_ms: f64) -> Vec<RegionMetrics> {
        regions
            .iter()
            .map(|region| self.region_metrics(region, threshold_ms))
            .collect()
    }

    fn region_metrics(&self, region: &str, threshold_ms: f64) -> RegionMetrics {
        let selected: Vec<&Sample> = self
            .dataset
            .samples()
            .iter()
            .filter(|s| s.region == region)
            .collect();

        if selected.is_empty() {
            return RegionMetrics::zero(region);
        }

        let latencies: Vec<f64> = selected.iter().map(|s| s.latency_ms).collect();
        let uptimes: Vec<f64> = selected.iter().map(|s| s.uptime_pct).collect();

        // Strict inequality: a sample equal to the threshold is not a breach
        let breaches = latencies.iter().filter(|&&l| l > threshold_ms).count() as u64;

        RegionMetrics {
            region: region.to_string(),
            avg_latency: round_to(mean(&latencies), 2),
            p95_latency: round_to(percentile(&latencies, 95.0), 2),
            avg_uptime: round_to(mean(&uptimes), 3),
            breaches,
        }
    }
}
