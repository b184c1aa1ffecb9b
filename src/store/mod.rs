//! Item store subsystem.
//!
//! # Data Flow
//! ```text
//! CRUD handler (apps/crud.rs)
//!     → ItemStore (single mutex over map + id counter)
//!     → Record / StoreError
//!     → ApiError maps NotFound to 404
//! ```
//!
//! # Design Decisions
//! - Process-lifetime only; nothing is persisted
//! - Ids come from a counter that never goes backwards, so deleted ids are
//!   never handed out again
//! - The store is passed to handlers as axum state, not held in a global

pub mod items;
pub mod types;

pub use items::{ItemStore, StoreError};
pub use types::{Item, ItemId, Record};
