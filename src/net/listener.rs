//! TCP listener binding.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The configured address does not parse.
    #[error("Invalid bind address '{0}': {1}")]
    Address(String, std::net::AddrParseError),

    /// Failed to bind to address.
    #[error("Failed to bind: {0}")]
    Bind(#[from] std::io::Error),
}

/// Parse a configured bind address.
pub fn parse_addr(addr: &str) -> Result<SocketAddr, ListenerError> {
    addr.parse()
        .map_err(|e| ListenerError::Address(addr.to_string(), e))
}

/// Bind a TCP listener on the configured address.
pub async fn bind(addr: &str) -> Result<TcpListener, ListenerError> {
    let listener = TcpListener::bind(parse_addr(addr)?).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind("127.0.0.1:0").await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bad_address() {
        let err = bind("localhost").await.unwrap_err();
        assert!(matches!(err, ListenerError::Address(..)));
    }
}
