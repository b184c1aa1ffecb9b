//! CRUD app: an item table behind `/items`.

use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extract::{ValidJson, ValidPath};
use crate::store::{Item, ItemId, ItemStore};

pub const APP_NAME: &str = "crud-app";

#[derive(Debug, Serialize)]
pub struct ItemList {
    pub app: &'static str,
    /// Keyed by id; JSON object keys are the decimal ids.
    pub items: BTreeMap<ItemId, Item>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub app: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub item: Item,
}

#[derive(Debug, Serialize)]
pub struct ItemCreated {
    pub app: &'static str,
    pub message: &'static str,
    pub item_id: ItemId,
    pub item: Item,
}

#[derive(Debug, Serialize)]
pub struct ItemDeleted {
    pub app: &'static str,
    pub message: &'static str,
    pub item_id: ItemId,
}

pub fn router(store: ItemStore) -> Router {
    Router::new()
        .route("/", get(|| async { super::banner(APP_NAME, "Use /items for CRUD operations") }))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/health", get(|| async { super::health_body(APP_NAME) }))
        .with_state(store)
}

async fn list_items(State(store): State<ItemStore>) -> Json<ItemList> {
    let items = store
        .list()
        .await
        .into_iter()
        .map(|record| (record.id, record.item))
        .collect();
    Json(ItemList { app: APP_NAME, items })
}

async fn get_item(
    State(store): State<ItemStore>,
    ValidPath(item_id): ValidPath<ItemId>,
) -> Result<Json<ItemResponse>, ApiError> {
    let record = store.get(item_id).await?;
    Ok(Json(ItemResponse {
        app: APP_NAME,
        message: None,
        item: record.item,
    }))
}

async fn create_item(
    State(store): State<ItemStore>,
    ValidJson(item): ValidJson<Item>,
) -> Json<ItemCreated> {
    let record = store.create(item).await;
    tracing::info!(item_id = record.id, name = %record.item.name, "Item created");
    Json(ItemCreated {
        app: APP_NAME,
        message: "Item created",
        item_id: record.id,
        item: record.item,
    })
}

async fn update_item(
    State(store): State<ItemStore>,
    ValidPath(item_id): ValidPath<ItemId>,
    ValidJson(item): ValidJson<Item>,
) -> Result<Json<ItemResponse>, ApiError> {
    let record = store.update(item_id, item).await?;
    tracing::info!(item_id, "Item updated");
    Ok(Json(ItemResponse {
        app: APP_NAME,
        message: Some("Item updated"),
        item: record.item,
    }))
}

async fn delete_item(
    State(store): State<ItemStore>,
    ValidPath(item_id): ValidPath<ItemId>,
) -> Result<Json<ItemDeleted>, ApiError> {
    let item_id = store.delete(item_id).await?;
    tracing::info!(item_id, "Item deleted");
    Ok(Json(ItemDeleted {
        app: APP_NAME,
        message: "Item deleted",
        item_id,
    }))
}
