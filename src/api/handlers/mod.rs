// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod items;
mod metrics;

pub use health::health_check;
pub use items::{add_item, list_items};
pub use metrics::metrics_handler;
