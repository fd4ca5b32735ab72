mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Connects a channel with the default [`ChannelConfig`].
///
/// ## Example
/// ```ignore
/// use grpc_client::create_channel;
/// use rpc::laptop::laptop_service_client::LaptopServiceClient;
///
/// let channel = create_channel("http://[::1]:50051").await?;
/// let client = LaptopServiceClient::new(channel);
/// ```
pub async fn create_channel(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_with_config(addr, ChannelConfig::default()).await
}

/// Connects a channel with custom HTTP/2 and TCP settings.
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();

  let endpoint = Endpoint::from_shared(addr.clone()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  let endpoint = config.apply_to_endpoint(endpoint);

  tracing::debug!(target: "grpc_client", addr = %addr, "Creating gRPC channel");

  endpoint.connect().await.map_err(|e| {
    tracing::error!(
      target: "grpc_client",
      addr = %addr,
      error = ?e,
      "Failed to connect to gRPC service"
    );
    GrpcError::ConnectionFailed(e)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_invalid_uri() {
    let result = create_channel("not a valid uri").await;
    assert!(matches!(result, Err(GrpcError::InvalidUri(_))));
  }

  #[tokio::test]
  async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = create_channel(format!("http://{addr}")).await;
    assert!(matches!(result, Err(GrpcError::ConnectionFailed(_))));
  }
}
