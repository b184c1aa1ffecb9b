use std::collections::BTreeMap;

use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Item fields as sent and received by the CRUD app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct ItemList {
    pub app: String,
    pub items: BTreeMap<u64, Item>,
}

#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    pub app: String,
    #[serde(default)]
    pub message: Option<String>,
    pub item: Item,
}

#[derive(Debug, Deserialize)]
pub struct ItemCreated {
    pub app: String,
    pub message: String,
    pub item_id: u64,
    pub item: Item,
}

#[derive(Debug, Deserialize)]
pub struct ItemDeleted {
    pub app: String,
    pub message: String,
    pub item_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct Health {
    pub status: String,
    pub app: String,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The app answered 404.
    #[error("Item not found")]
    NotFound,
    /// Any other non-success status, with the raw body.
    #[error("Backend returned {0}: {1}")]
    Status(StatusCode, String),
}

/// Typed client for the CRUD demo app.
#[derive(Debug, Clone)]
pub struct CrudClient {
    client: Client,
    base_url: String,
}

impl CrudClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (timeouts, pooling, ...).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        let resp = self.client.get(format!("{}/health", self.base_url)).send().await?;
        decode(resp).await
    }

    pub async fn list(&self) -> Result<ItemList, ClientError> {
        let resp = self.client.get(format!("{}/items", self.base_url)).send().await?;
        decode(resp).await
    }

    pub async fn get(&self, id: u64) -> Result<ItemResponse, ClientError> {
        let resp = self
            .client
            .get(format!("{}/items/{}", self.base_url, id))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create(&self, item: &Item) -> Result<ItemCreated, ClientError> {
        let resp = self
            .client
            .post(format!("{}/items", self.base_url))
            .json(item)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn update(&self, id: u64, item: &Item) -> Result<ItemResponse, ClientError> {
        let resp = self
            .client
            .put(format!("{}/items/{}", self.base_url, id))
            .json(item)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete(&self, id: u64) -> Result<ItemDeleted, ClientError> {
        let resp = self
            .client
            .delete(format!("{}/items/{}", self.base_url, id))
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(ClientError::Status(status, text));
    }
    Ok(resp.json::<T>().await?)
}
