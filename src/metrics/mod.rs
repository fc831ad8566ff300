//! Prometheus metrics for the prompt hub service.
//!
//! Covers the two things worth watching in production:
//! - Prompt CRUD traffic (created/updated/deleted counters, stored gauge)
//! - Execution outcomes and completion-API latency

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge,
    Encoder, Histogram, IntCounter, IntCounterVec, IntGauge, TextEncoder,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "prompt_hub";

lazy_static! {
    /// Total prompts created
    pub static ref PROMPTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_prompts_created_total", METRIC_PREFIX),
        "Total prompts created"
    ).unwrap();

    /// Total prompts updated
    pub static ref PROMPTS_UPDATED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_prompts_updated_total", METRIC_PREFIX),
        "Total prompts updated"
    ).unwrap();

    /// Total prompts deleted
    pub static ref PROMPTS_DELETED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_prompts_deleted_total", METRIC_PREFIX),
        "Total prompts deleted"
    ).unwrap();

    /// Number of stored prompts (refreshed on scrape)
    pub static ref PROMPTS_STORED: IntGauge = register_int_gauge!(
        format!("{}_prompts_stored", METRIC_PREFIX),
        "Number of stored prompts"
    ).unwrap();

    /// Prompt executions by outcome ("ok", "not_found", "upstream_error")
    pub static ref EXECUTIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_executions_total", METRIC_PREFIX),
        "Prompt executions by outcome",
        &["outcome"]
    ).unwrap();

    /// Completion API round-trip latency in seconds
    pub static ref COMPLETION_LATENCY_SECONDS: Histogram = register_histogram!(
        format!("{}_completion_latency_seconds", METRIC_PREFIX),
        "Completion API round-trip latency",
        vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    ).unwrap();
}

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording execution metrics
pub struct ExecutionMetrics;

impl ExecutionMetrics {
    pub fn record_ok() {
        EXECUTIONS_TOTAL.with_label_values(&["ok"]).inc();
    }

    pub fn record_not_found() {
        EXECUTIONS_TOTAL.with_label_values(&["not_found"]).inc();
    }

    pub fn record_upstream_error() {
        EXECUTIONS_TOTAL.with_label_values(&["upstream_error"]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_metrics_includes_prefix() {
        PROMPTS_CREATED_TOTAL.inc();
        let output = encode_metrics().unwrap();
        assert!(output.contains("prompt_hub_prompts_created_total"));
    }
}
