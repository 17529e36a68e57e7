// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;

/// Histogram bucket bounds in seconds (Prometheus client defaults)
pub const DEFAULT_BUCKETS: [f64; 14] = [
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

#[derive(Clone, Debug)]
pub struct MetricsRegistry {
    registry: Arc<Registry>,
    request_count: Counter,
    request_duration_seconds: Histogram,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let request_count = Counter::default();
        registry.register(
            "request_count",
            "Total HTTP requests",
            request_count.clone(),
        );
        let request_duration_seconds = Histogram::new(DEFAULT_BUCKETS.iter().copied());
        registry.register(
            "request_duration_seconds",
            "Request duration",
            request_duration_seconds.clone(),
        );

        Self {
            registry: Arc::new(registry),
            request_count,
            request_duration_seconds,
        }
    }

    /// Records one completed request and its elapsed time
    pub fn record_request(&self, elapsed: Duration) {
        self.request_count.inc();
        self.request_duration_seconds.observe(elapsed.as_secs_f64());
    }

    /// Number of requests recorded so far
    pub fn request_count(&self) -> u64 {
        self.request_count.get()
    }

    pub fn encode_metrics(&self) -> Result<String> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }
}
