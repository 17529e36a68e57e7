// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use items_service::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// Application state
pub use crate::api::{AppState, create_router};
pub use crate::metrics::MetricsRegistry;
pub use crate::store::ItemStore;
