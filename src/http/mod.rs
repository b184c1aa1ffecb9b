//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign/propagate request ID)
//!     → extract.rs (path + JSON extraction, rejections → ApiError)
//!     → apps/* handler
//!     → error.rs (ApiError → status + JSON detail)
//!     → response.rs (x-served-by, redirects)
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod request;
pub mod response;
pub mod server;

pub use error::{ApiError, FieldError};
pub use request::X_REQUEST_ID;
pub use response::X_SERVED_BY;
pub use server::HttpServer;
