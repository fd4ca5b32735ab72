use std::time::Duration;
use tonic::transport::Endpoint;

/// HTTP/2 and TCP tuning for client channels
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  pub connect_timeout: Duration,
  /// Per-request timeout; sent to the server as `grpc-timeout`. `None` leaves calls unbounded.
  pub timeout: Option<Duration>,

  pub initial_connection_window_size: Option<u32>,
  pub initial_stream_window_size: Option<u32>,
  pub http2_adaptive_window: bool,

  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: Duration::from_secs(5),
      // Streaming calls (search, rate) may legitimately stay open for a long time.
      timeout: None,
      initial_connection_window_size: Some(1024 * 1024),
      initial_stream_window_size: Some(1024 * 1024),
      http2_adaptive_window: true,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
    }
  }
}

impl ChannelConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Bound every RPC made over the channel.
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  pub fn without_keep_alive(mut self) -> Self {
    self.http2_keep_alive_interval = None;
    self
  }

  /// Set both connection and stream window sizes to the same value
  pub fn with_window_size(mut self, size: u32) -> Self {
    self.initial_connection_window_size = Some(size);
    self.initial_stream_window_size = Some(size);
    self
  }

  pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> Endpoint {
    if let Some(interval) = self.http2_keep_alive_interval {
      endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    endpoint = endpoint
      .keep_alive_timeout(self.keep_alive_timeout)
      .keep_alive_while_idle(self.keep_alive_while_idle)
      .connect_timeout(self.connect_timeout);

    if let Some(timeout) = self.timeout {
      endpoint = endpoint.timeout(timeout);
    }

    if let Some(size) = self.initial_connection_window_size {
      endpoint = endpoint.initial_connection_window_size(size);
    }
    if let Some(size) = self.initial_stream_window_size {
      endpoint = endpoint.initial_stream_window_size(size);
    }

    endpoint
      .http2_adaptive_window(self.http2_adaptive_window)
      .tcp_nodelay(self.tcp_nodelay)
      .tcp_keepalive(self.tcp_keepalive)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = ChannelConfig::default();
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.timeout, None);
    assert_eq!(config.initial_connection_window_size, Some(1024 * 1024));
    assert!(config.tcp_nodelay);
    assert!(config.http2_adaptive_window);
  }

  #[test]
  fn test_builder_pattern() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(10))
      .with_request_timeout(Duration::from_secs(2))
      .with_window_size(2 * 1024 * 1024)
      .without_keep_alive();

    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.timeout, Some(Duration::from_secs(2)));
    assert_eq!(config.initial_stream_window_size, Some(2 * 1024 * 1024));
    assert_eq!(config.http2_keep_alive_interval, None);
  }
}
