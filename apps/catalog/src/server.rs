//! gRPC server initialization and lifecycle management
//!
//! - Tracing initialization
//! - Config loading (`ServerConfig`, `ImageStorageConfig`)
//! - Store and service wiring
//! - Health check service (grpc.health.v1.Health)
//! - Serving until SIGINT/SIGTERM

use std::future::Future;
use std::sync::Arc;

use core_config::storage::ImageStorageConfig;
use core_config::{Environment, FromEnv};
use domain_laptops::{
    CatalogService, DiskBlobSink, InMemoryLaptopStore, InMemoryRatingStore, LaptopStore,
    RatingStore,
};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
use rpc::laptop::laptop_service_server::{LaptopServiceServer, SERVICE_NAME};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{info, warn};

use crate::service::LaptopServiceImpl;

/// Run the gRPC server
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the listener cannot be bound,
/// or the server fails while running.
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let server_config = ServerConfig::from_env().wrap_err("Failed to load server configuration")?;
    let storage = ImageStorageConfig::from_env().wrap_err("Failed to load image storage configuration")?;
    let addr = server_config
        .socket_addr()
        .wrap_err("Failed to resolve server address")?;

    let service = CatalogService::new(
        InMemoryLaptopStore::new(),
        InMemoryRatingStore::default(),
        Arc::new(DiskBlobSink::new(storage.image_dir.clone())),
    )
    .with_max_image_size(storage.max_image_size);
    info!(
        image_dir = %storage.image_dir.display(),
        max_image_size = storage.max_image_size,
        "Catalog storage configured"
    );

    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;

    serve(
        listener,
        &server_config,
        LaptopServiceImpl::new(service),
        shutdown_signal(),
    )
    .await?;

    info!("Catalog server stopped");
    Ok(())
}

/// Serve the laptop and health services on `listener` until `shutdown` resolves.
pub async fn serve<S, R, F>(
    listener: TcpListener,
    config: &ServerConfig,
    service: LaptopServiceImpl<S, R>,
    shutdown: F,
) -> Result<()>
where
    S: LaptopStore + 'static,
    R: RatingStore + 'static,
    F: Future<Output = ()>,
{
    let local_addr = listener.local_addr().wrap_err("Listener has no local address")?;

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(config, SERVICE_NAME);
    info!(%local_addr, "LaptopService listening");

    Server::builder()
        .tcp_keepalive(Some(config.tcp_keepalive))
        .add_service(health_service)
        .add_service(laptop_service_server(config, service))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .wrap_err("gRPC server failed")?;

    GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
    Ok(())
}

/// Wrap the service with the configured message limits and compression.
pub fn laptop_service_server<S, R>(
    config: &ServerConfig,
    service: LaptopServiceImpl<S, R>,
) -> LaptopServiceServer<LaptopServiceImpl<S, R>>
where
    S: LaptopStore + 'static,
    R: RatingStore + 'static,
{
    let server = LaptopServiceServer::new(service)
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);

    match config.compression_encoding() {
        Some(encoding) => server.accept_compressed(encoding).send_compressed(encoding),
        None => server,
    }
}

/// Wait for a shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        },
    }
}
