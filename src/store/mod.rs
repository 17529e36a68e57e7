// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! In-memory item list
//!
//! Items live for the lifetime of the process. The list only grows and keeps
//! insertion order.

use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<String>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the list
    pub async fn push(&self, item: String) {
        self.items.write().await.push(item);
    }

    /// Snapshot of all items in insertion order
    pub async fn list(&self) -> Vec<String> {
        self.items.read().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
