//! Startup logging and health reporting.

use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::info;

/// Helpers shared by gRPC binaries.
pub struct GrpcServer;

impl GrpcServer {
  /// Log server startup information for a single service.
  pub fn log_startup(config: &ServerConfig, service_name: &str) {
    info!(
      addr = %config.addr_string(),
      service = service_name,
      compression = config.enable_compression,
      max_message_size = config.max_decoding_message_size,
      "gRPC server starting"
    );
  }

  /// Mark `service_name` and the empty (whole-server) name as serving.
  pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
    Self::set_status(health_reporter, service_name, ServingStatus::Serving).await;
    info!(service = service_name, "Service marked as serving");
  }

  /// Flip both names to not-serving, used while draining on shutdown.
  pub async fn mark_not_serving(health_reporter: &HealthReporter, service_name: &str) {
    Self::set_status(health_reporter, service_name, ServingStatus::NotServing).await;
    info!(service = service_name, "Service marked as not serving");
  }

  async fn set_status(health_reporter: &HealthReporter, service_name: &str, status: ServingStatus) {
    health_reporter
      .set_service_status(service_name, status)
      .await;
    health_reporter.set_service_status("", status).await;
  }
}

pub use tonic_health::server::health_reporter as create_health_service;
