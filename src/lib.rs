// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Items Service
//!
//! Minimal HTTP service with a health check, an in-memory item list and
//! Prometheus metrics.
//!
//! ## Main modules
//! - `api`: HTTP router, handlers and request tracking middleware
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: request metrics registry
//! - `store`: in-memory item list
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod metrics;
mod store;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Request metrics registry
pub use metrics::MetricsRegistry;

/// In-memory item list
pub use store::ItemStore;
