//! # gRPC plumbing
//!
//! Shared transport helpers for the catalog service and its clients.
//!
//! - **Channels**: [`create_channel`] with HTTP/2 keep-alive and window tuning.
//! - **Server**: [`server::ServerConfig`] loaded from `GRPC_*` variables, health reporting and
//!   startup logging via [`server::GrpcServer`].
//! - **Errors**: [`GrpcError`] plus the [`ToTonicResult`] / [`ToTonicOption`] extension traits
//!   for turning conversion failures into `tonic::Status`.
//! - **Deadlines**: [`timeout::request_deadline`] reads the `grpc-timeout` header.
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::create_channel;
//! use rpc::laptop::laptop_service_client::LaptopServiceClient;
//!
//! let channel = create_channel("http://[::1]:50051").await?;
//! let client = LaptopServiceClient::new(channel)
//!     .accept_compressed(tonic::codec::CompressionEncoding::Zstd)
//!     .send_compressed(tonic::codec::CompressionEncoding::Zstd);
//! ```

pub mod channel;
pub mod conversions;
pub mod error;
pub mod server;
pub mod timeout;

pub use channel::{ChannelConfig, create_channel, create_channel_with_config};
pub use error::{GrpcError, GrpcResult, ToTonicOption, ToTonicResult};
