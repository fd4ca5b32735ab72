//! Laptop catalog gRPC service
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, unary and streaming, optional zstd)
//! LaptopServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions, CallContext per call)
//! CatalogService (domain_laptops)
//!   ↓
//! InMemoryLaptopStore / InMemoryRatingStore / DiskBlobSink
//! ```
//!
//! ## Modules
//!
//! - `server`: bootstrap, listener and graceful shutdown
//! - `service`: gRPC service implementation (LaptopServiceImpl)

pub mod server;
pub mod service;

pub use server::{laptop_service_server, run, serve};
pub use service::LaptopServiceImpl;
