//! In-memory item table with sequential id assignment.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::observability::metrics;
use crate::store::types::{Item, ItemId, Record};

/// Errors produced by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(ItemId),
}

#[derive(Debug)]
struct Table {
    items: BTreeMap<ItemId, Item>,
    /// Next id to hand out. Only ever incremented.
    next_id: ItemId,
}

/// Shared handle to the item table.
///
/// Cloning is cheap; all clones see the same table. Map and counter sit
/// behind one mutex, so every operation is atomic with respect to the others.
#[derive(Debug, Clone)]
pub struct ItemStore {
    inner: Arc<Mutex<Table>>,
}

impl ItemStore {
    /// Create an empty store whose first id is 1.
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Create a store holding the sample catalogue (ids 1-5, next id 6).
    pub fn seeded() -> Self {
        Self::from_items(sample_items())
    }

    /// Create a store from items, numbering them 1..=n.
    pub fn from_items(items: Vec<Item>) -> Self {
        let items: BTreeMap<ItemId, Item> = (1..).zip(items).collect();
        let next_id = items.len() as ItemId + 1;
        metrics::record_store_size(items.len());
        Self {
            inner: Arc::new(Mutex::new(Table { items, next_id })),
        }
    }

    /// All records in ascending id order.
    pub async fn list(&self) -> Vec<Record> {
        let table = self.inner.lock().await;
        table
            .items
            .iter()
            .map(|(id, item)| Record {
                id: *id,
                item: item.clone(),
            })
            .collect()
    }

    pub async fn get(&self, id: ItemId) -> Result<Record, StoreError> {
        let table = self.inner.lock().await;
        table
            .items
            .get(&id)
            .map(|item| Record {
                id,
                item: item.clone(),
            })
            .ok_or(StoreError::NotFound(id))
    }

    /// Insert a new item under the next id.
    pub async fn create(&self, item: Item) -> Record {
        let mut table = self.inner.lock().await;
        let id = table.next_id;
        table.next_id += 1;
        table.items.insert(id, item.clone());
        metrics::record_store_size(table.items.len());

        tracing::debug!(item_id = id, "Item created");
        Record { id, item }
    }

    /// Replace every field of an existing item. The id is untouched.
    pub async fn update(&self, id: ItemId, item: Item) -> Result<Record, StoreError> {
        let mut table = self.inner.lock().await;
        let slot = table.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = item.clone();

        tracing::debug!(item_id = id, "Item updated");
        Ok(Record { id, item })
    }

    /// Remove an item, returning its id.
    pub async fn delete(&self, id: ItemId) -> Result<ItemId, StoreError> {
        let mut table = self.inner.lock().await;
        table.items.remove(&id).ok_or(StoreError::NotFound(id))?;
        metrics::record_store_size(table.items.len());

        tracing::debug!(item_id = id, "Item deleted");
        Ok(id)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("F5 BIG-IP", "Hardware Application Delivery Controller", 15000.00),
        Item::new("NGINX Plus", "Advanced Load Balancer and Web Server", 2500.00),
        Item::new("F5 Distributed Cloud", "SaaS-based Application Security and Delivery", 5000.00),
        Item::new("NGINX App Protect", "WAF solution for NGINX", 1800.00),
        Item::new("BIG-IP Virtual Edition", "Software-based ADC for cloud deployments", 8000.00),
    ]
}
