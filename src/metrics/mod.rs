// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request metrics for the items service
//!
//! Holds the process-wide request counter and request duration histogram and
//! encodes them in the OpenMetrics text format.

mod registry;


/// Prometheus metrics registry
pub use registry::MetricsRegistry;
