//! Demo HTTP backends for exercising a reverse proxy / load balancer.

pub mod apps;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod store;

pub use apps::AppKind;
pub use config::schema::LabConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Item, ItemStore};
