//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Configured bind address
//!     → listener.rs (parse, bind)          plain HTTP
//!     → tls.rs (load PEM cert + key)       HTTPS via axum-server
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - TLS is optional; most deployments terminate TLS at the proxy under test
//! - Certificates are loaded, never validated against a CA here

pub mod listener;
pub mod tls;

pub use listener::{bind, parse_addr, ListenerError};
