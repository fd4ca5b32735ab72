//! gRPC server helpers
//!
//! ```ignore
//! use core_config::FromEnv;
//! use grpc_client::server::{GrpcServer, ServerConfig};
//! use rpc::laptop::laptop_service_server::SERVICE_NAME;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = grpc_client::server::create_health_service();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//! ```

mod builder;
mod config;

pub use builder::{GrpcServer, create_health_service};
pub use config::ServerConfig;
