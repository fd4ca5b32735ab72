//! Laptops Domain
//!
//! Catalog records, image uploads and ratings for the laptop service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  CatalogService  │  ← id assignment, upload sessions, score validation
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┬──────────────┬────────────┐
//! │   LaptopStore    │ RatingStore  │  BlobSink  │  ← traits + in-memory / disk implementations
//! └────────┬─────────┴──────────────┴────────────┘
//!          │
//! ┌────────▼─────────┐
//! │      Models      │  ← Laptop, Filter, Rating, ImageRecord
//! └──────────────────┘
//! ```
//!
//! Every operation that can suspend takes a [`CallContext`] so that cancellation and
//! deadlines from the transport reach the store.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_laptops::{
//!     CallContext, CatalogService, DiskBlobSink, InMemoryLaptopStore, InMemoryRatingStore, Laptop,
//! };
//!
//! # async fn example() -> Result<(), domain_laptops::CatalogError> {
//! let service = CatalogService::new(
//!     InMemoryLaptopStore::new(),
//!     InMemoryRatingStore::new(),
//!     Arc::new(DiskBlobSink::new("img")),
//! );
//! let id = service.create_laptop(&CallContext::new(), Laptop::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod conversions;
pub mod error;
pub mod id;
pub mod image;
pub mod models;
pub mod rating;
pub mod repository;
pub mod service;
pub mod upload;

pub use context::CallContext;
pub use error::{CatalogError, CatalogResult};
pub use id::{IdGenerator, UuidIdGenerator};
pub use image::{BlobSink, DiskBlobSink, ImageStore, InMemoryBlobSink, InMemoryImageStore};
pub use models::{
    Cpu, Filter, Gpu, ImageRecord, Keyboard, KeyboardLayout, Laptop, Memory, MemoryUnit, Panel,
    Rating, Resolution, Screen, Storage, StorageDriver, StoredImage, Weight,
};
pub use rating::{InMemoryRatingStore, RatingStore};
pub use repository::{InMemoryLaptopStore, LaptopStore};
pub use service::{CatalogService, DEFAULT_MAX_IMAGE_SIZE};
pub use upload::{UploadSession, UploadState};
