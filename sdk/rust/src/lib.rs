//! Client SDK for the CRUD demo backend.

pub mod client;

pub use client::{ClientError, CrudClient, Item};
