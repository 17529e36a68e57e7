use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;

/// Query parameters accepted by `POST /items`
#[derive(Debug, Deserialize)]
pub struct AddItemParams {
    pub item: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddItemResponse {
    pub message: String,
}

/// GET /items
pub async fn list_items(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.items.list().await)
}

/// POST /items?item=<value>
///
/// Appends the item as-is. A missing `item` parameter is rejected by the
/// `Query` extractor before this runs.
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddItemParams>,
) -> Json<AddItemResponse> {
    state.items.push(params.item).await;
    Json(AddItemResponse {
        message: "item added".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_list() {
        let state = Arc::new(AppState::new());

        let Json(resp) = add_item(
            State(state.clone()),
            Query(AddItemParams {
                item: "widget".to_string(),
            }),
        )
        .await;
        assert_eq!(resp.message, "item added");

        let Json(items) = list_items(State(state)).await;
        assert_eq!(items, vec!["widget"]);
    }

    #[tokio::test]
    async fn test_empty_item_is_accepted() {
        let state = Arc::new(AppState::new());

        add_item(
            State(state.clone()),
            Query(AddItemParams {
                item: String::new(),
            }),
        )
        .await;

        let Json(items) = list_items(State(state)).await;
        assert_eq!(items, vec![String::new()]);
    }
}
