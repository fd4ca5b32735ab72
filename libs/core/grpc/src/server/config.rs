//! Server configuration loaded from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_or_default, env_parse};
use tonic::codec::CompressionEncoding;

const DEFAULT_MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for the gRPC server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  /// Host to bind to (default: [::1] for IPv6 localhost)
  pub host: String,
  /// Port to listen on (default: 50051)
  pub port: u16,
  /// Negotiate zstd in both directions (default: true)
  pub enable_compression: bool,
  /// Maximum message size for decoding (default: 8MB)
  pub max_decoding_message_size: usize,
  /// Maximum message size for encoding (default: 8MB)
  pub max_encoding_message_size: usize,
  /// TCP keepalive interval (default: 60s)
  pub tcp_keepalive: Duration,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: "[::1]".to_string(),
      port: 50051,
      enable_compression: true,
      max_decoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
      max_encoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
      tcp_keepalive: Duration::from_secs(60),
    }
  }
}

impl FromEnv for ServerConfig {
  /// Reads:
  /// - `GRPC_HOST` (default: [::1])
  /// - `GRPC_PORT` (default: 50051)
  /// - `GRPC_COMPRESSION` (default: true; `false` or `0` disables)
  /// - `GRPC_MAX_MESSAGE_SIZE` (default: 8388608)
  fn from_env() -> Result<Self, ConfigError> {
    let host = env_or_default("GRPC_HOST", "[::1]");
    let port = env_parse("GRPC_PORT", 50051u16)?;
    let compression = env_or_default("GRPC_COMPRESSION", "true");
    let enable_compression = !matches!(compression.trim(), "false" | "0");
    let max_message_size = env_parse("GRPC_MAX_MESSAGE_SIZE", DEFAULT_MAX_MESSAGE_SIZE)?;

    let config = Self {
      host,
      port,
      enable_compression,
      max_decoding_message_size: max_message_size,
      max_encoding_message_size: max_message_size,
      ..Self::default()
    };
    config.socket_addr()?;
    Ok(config)
  }
}

impl ServerConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_host(mut self, host: impl Into<String>) -> Self {
    self.host = host.into();
    self
  }

  pub fn with_port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  pub fn with_compression(mut self, enable: bool) -> Self {
    self.enable_compression = enable;
    self
  }

  pub fn with_max_message_size(mut self, size: usize) -> Self {
    self.max_decoding_message_size = size;
    self.max_encoding_message_size = size;
    self
  }

  /// Encoding to negotiate, if compression is enabled.
  pub fn compression_encoding(&self) -> Option<CompressionEncoding> {
    self.enable_compression.then_some(CompressionEncoding::Zstd)
  }

  /// Socket address to bind to.
  pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
    self
      .addr_string()
      .parse()
      .map_err(|e: std::net::AddrParseError| ConfigError::ParseError {
        key: "GRPC_HOST".to_string(),
        details: e.to_string(),
      })
  }

  /// Address string (for logging).
  pub fn addr_string(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}
