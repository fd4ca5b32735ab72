use std::future::Future;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::context::CallContext;
use crate::error::{CatalogError, CatalogResult};
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::image::{BlobSink, ImageStore, InMemoryImageStore};
use crate::models::{Filter, ImageRecord, Laptop, Rating, StoredImage};
use crate::rating::RatingStore;
use crate::repository::LaptopStore;
use crate::upload::{AssembledImage, UploadSession};

pub use core_config::storage::DEFAULT_MAX_IMAGE_SIZE;

/// Catalog operations behind the four RPCs
pub struct CatalogService<S: LaptopStore, R: RatingStore> {
    laptops: Arc<S>,
    ratings: Arc<R>,
    images: Arc<dyn ImageStore>,
    blobs: Arc<dyn BlobSink>,
    ids: Arc<dyn IdGenerator>,
    max_image_size: usize,
}

impl<S: LaptopStore, R: RatingStore> Clone for CatalogService<S, R> {
    fn clone(&self) -> Self {
        Self {
            laptops: self.laptops.clone(),
            ratings: self.ratings.clone(),
            images: self.images.clone(),
            blobs: self.blobs.clone(),
            ids: self.ids.clone(),
            max_image_size: self.max_image_size,
        }
    }
}

impl<S: LaptopStore, R: RatingStore> CatalogService<S, R> {
    pub fn new(laptops: S, ratings: R, blobs: Arc<dyn BlobSink>) -> Self {
        Self {
            laptops: Arc::new(laptops),
            ratings: Arc::new(ratings),
            images: Arc::new(InMemoryImageStore::new()),
            blobs,
            ids: Arc::new(UuidIdGenerator),
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }

    /// Generator for image ids. Laptop ids come from the laptop store; pass the same
    /// generator to both when ids must share one scheme.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_image_store(mut self, images: Arc<dyn ImageStore>) -> Self {
        self.images = images;
        self
    }

    /// Upload cap in bytes, clamped to `u32::MAX` since upload responses report a `u32` size.
    pub fn with_max_image_size(mut self, max_image_size: usize) -> Self {
        self.max_image_size = max_image_size.min(u32::MAX as usize);
        self
    }

    pub fn max_image_size(&self) -> usize {
        self.max_image_size
    }

    /// Save `laptop`; the store validates or assigns its id.
    ///
    /// The context is checked right before the store write; a call that is already
    /// cancelled saves nothing.
    #[instrument(skip(self, ctx, laptop), fields(laptop_id = %laptop.id))]
    pub async fn create_laptop(&self, ctx: &CallContext, laptop: Laptop) -> CatalogResult<String> {
        ctx.check()?;

        let id = self.laptops.save(laptop).await?;
        info!(laptop_id = %id, "laptop saved");
        Ok(id)
    }

    pub async fn find_laptop(&self, id: &str) -> CatalogResult<Option<Laptop>> {
        self.laptops.find(id).await
    }

    #[instrument(skip(self, ctx, on_match))]
    pub async fn search_laptops<F, Fut>(
        &self,
        ctx: &CallContext,
        filter: &Filter,
        on_match: F,
    ) -> CatalogResult<usize>
    where
        F: FnMut(Laptop) -> Fut + Send,
        Fut: Future<Output = CatalogResult<()>> + Send,
    {
        let delivered = self.laptops.search(ctx, filter, on_match).await?;
        info!(delivered, "search finished");
        Ok(delivered)
    }

    /// Open an upload for an existing laptop.
    #[instrument(skip(self))]
    pub async fn begin_upload(&self, laptop_id: &str, image_type: &str) -> CatalogResult<UploadSession> {
        if self.laptops.find(laptop_id).await?.is_none() {
            return Err(CatalogError::invalid(format!("laptop {laptop_id} doesn't exist")));
        }

        let mut session = UploadSession::new(self.max_image_size);
        session.begin(laptop_id, image_type)?;
        Ok(session)
    }

    /// Write the assembled bytes out and record their metadata.
    ///
    /// A sink failure leaves no metadata behind.
    #[instrument(skip(self, ctx, session), fields(laptop_id = %session.laptop_id()))]
    pub async fn finish_upload(
        &self,
        ctx: &CallContext,
        mut session: UploadSession,
    ) -> CatalogResult<StoredImage> {
        if let Err(err) = ctx.check() {
            session.abort();
            return Err(err);
        }

        let AssembledImage {
            laptop_id,
            image_type,
            data,
        } = session.finish()?;

        let id = self.ids.new_id();
        let size = data.len();
        let location = self.blobs.write(&format!("{id}{image_type}"), data).await?;

        self.images
            .save(ImageRecord {
                id: id.clone(),
                laptop_id,
                image_type,
                location,
                size,
            })
            .await?;

        info!(image_id = %id, size, "saved image");
        Ok(StoredImage { id, size })
    }

    pub async fn find_image(&self, image_id: &str) -> CatalogResult<Option<ImageRecord>> {
        self.images.find(image_id).await
    }

    /// Fold one score into the laptop's aggregate.
    #[instrument(skip(self))]
    pub async fn rate_laptop(&self, laptop_id: &str, score: f64) -> CatalogResult<Rating> {
        if !score.is_finite() {
            return Err(CatalogError::invalid(format!("score must be a finite number, got {score}")));
        }
        if laptop_id.is_empty() {
            return Err(CatalogError::invalid("laptop id is required"));
        }
        self.ratings.add(laptop_id, score).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::MockIdGenerator;
    use crate::image::{InMemoryBlobSink, MockBlobSink, MockImageStore};
    use crate::models::{Cpu, Memory};
    use crate::rating::{InMemoryRatingStore, MockRatingStore};
    use crate::repository::InMemoryLaptopStore;
    use crate::upload::UploadState;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type TestService = CatalogService<InMemoryLaptopStore, InMemoryRatingStore>;

    fn service() -> (TestService, InMemoryBlobSink) {
        let blobs = InMemoryBlobSink::new();
        let service = CatalogService::new(
            InMemoryLaptopStore::new(),
            InMemoryRatingStore::new(),
            Arc::new(blobs.clone()),
        );
        (service, blobs)
    }

    fn sample() -> Laptop {
        Laptop {
            brand: "Dell".to_string(),
            name: "XPS 15".to_string(),
            cpu: Cpu {
                number_cores: 8,
                min_ghz: 2.4,
                ..Default::default()
            },
            ram: Memory::gigabytes(32),
            price_usd: 1800.0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let (service, _) = service();
        let id = service.create_laptop(&CallContext::new(), sample()).await.unwrap();

        let stored = service.find_laptop(&id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.brand, "Dell");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_id() {
        let (service, _) = service();
        let laptop = Laptop {
            id: "invalid-uuid".to_string(),
            ..sample()
        };
        let err = service.create_laptop(&CallContext::new(), laptop).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidIdentifier(_)));
    }

    #[tokio::test]
    async fn test_create_duplicate_id() {
        let (service, _) = service();
        let laptop = Laptop {
            id: UuidIdGenerator.new_id(),
            ..sample()
        };
        service.create_laptop(&CallContext::new(), laptop.clone()).await.unwrap();

        let err = service.create_laptop(&CallContext::new(), laptop).await.unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_create_on_cancelled_call_saves_nothing() {
        let store = InMemoryLaptopStore::new();
        let service = CatalogService::new(
            store.clone(),
            InMemoryRatingStore::new(),
            Arc::new(InMemoryBlobSink::new()),
        );

        let ctx = CallContext::new();
        ctx.cancel();
        let err = service.create_laptop(&ctx, sample()).await.unwrap_err();

        assert!(matches!(err, CatalogError::Cancelled));
        assert!(store.is_empty().await);
    }

    #[test]
    fn test_max_image_size_clamped_to_u32() {
        let (service, _) = service();
        assert_eq!(service.max_image_size(), DEFAULT_MAX_IMAGE_SIZE);

        let service = service.with_max_image_size(usize::MAX);
        assert_eq!(service.max_image_size(), u32::MAX as usize);
    }

    fn sequential_ids() -> Arc<dyn IdGenerator> {
        let next = Arc::new(AtomicUsize::new(0));
        let mut ids = MockIdGenerator::new();
        ids.expect_new_id()
            .returning(move || format!("laptop-{}", next.fetch_add(1, Ordering::SeqCst)));
        ids.expect_is_valid().returning(|id| id.starts_with("laptop-"));
        Arc::new(ids)
    }

    #[tokio::test]
    async fn test_create_with_custom_generator_on_service_only() {
        let service = CatalogService::new(
            InMemoryLaptopStore::new(),
            InMemoryRatingStore::new(),
            Arc::new(InMemoryBlobSink::new()),
        )
        .with_id_generator(sequential_ids());

        let id = service.create_laptop(&CallContext::new(), Laptop::default()).await.unwrap();
        assert!(service.find_laptop(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_shared_custom_generator() {
        let ids = sequential_ids();
        let blobs = InMemoryBlobSink::new();
        let service = CatalogService::new(
            InMemoryLaptopStore::with_id_generator(ids.clone()),
            InMemoryRatingStore::new(),
            Arc::new(blobs.clone()),
        )
        .with_id_generator(ids);
        let ctx = CallContext::new();

        let first = service.create_laptop(&ctx, Laptop::default()).await.unwrap();
        let second = service.create_laptop(&ctx, Laptop::default()).await.unwrap();
        assert_eq!(first, "laptop-0");
        assert_eq!(second, "laptop-1");

        let supplied = Laptop {
            id: "laptop-42".to_string(),
            ..sample()
        };
        assert_eq!(service.create_laptop(&ctx, supplied).await.unwrap(), "laptop-42");

        let mut session = service.begin_upload(&first, ".jpg").await.unwrap();
        session.push_chunk(&[1; 8]).unwrap();
        let stored = service.finish_upload(&ctx, session).await.unwrap();
        assert_eq!(stored.id, "laptop-2");
        assert!(blobs.get("laptop-2.jpg").await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_past_deadline() {
        let (service, _) = service();
        let ctx = CallContext::with_timeout(std::time::Duration::from_millis(1));
        tokio::time::advance(std::time::Duration::from_millis(2)).await;

        let err = service.create_laptop(&ctx, sample()).await.unwrap_err();
        assert!(matches!(err, CatalogError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_search_through_service() {
        let (service, _) = service();
        let ctx = CallContext::new();
        let id = service.create_laptop(&ctx, sample()).await.unwrap();
        service
            .create_laptop(
                &ctx,
                Laptop {
                    price_usd: 5000.0,
                    ..sample()
                },
            )
            .await
            .unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let filter = Filter {
            max_price_usd: 2000.0,
            ..Default::default()
        };
        let delivered = service
            .search_laptops(&ctx, &filter, move |laptop| {
                sink.lock().unwrap().push(laptop.id);
                async { Ok(()) }
            })
            .await
            .unwrap();

        assert_eq!(delivered, 1);
        assert_eq!(*seen.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn test_upload_for_missing_laptop() {
        let (service, blobs) = service();
        let err = service.begin_upload("missing", ".jpg").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
        assert!(blobs.is_empty().await);
    }

    #[tokio::test]
    async fn test_upload_round_trip() {
        let (service, blobs) = service();
        let ctx = CallContext::new();
        let laptop_id = service.create_laptop(&ctx, sample()).await.unwrap();

        let mut session = service.begin_upload(&laptop_id, ".png").await.unwrap();
        session.push_chunk(&[7; 1024]).unwrap();
        session.push_chunk(&[8; 1024]).unwrap();
        let stored = service.finish_upload(&ctx, session).await.unwrap();

        assert_eq!(stored.size, 2048);
        let record = service.find_image(&stored.id).await.unwrap().unwrap();
        assert_eq!(record.laptop_id, laptop_id);
        assert_eq!(record.image_type, ".png");
        assert_eq!(record.location, format!("memory://{}.png", stored.id));
        assert_eq!(blobs.get(&format!("{}.png", stored.id)).await.unwrap().len(), 2048);
    }

    #[tokio::test]
    async fn test_upload_over_cap_records_nothing() {
        let (service, blobs) = service();
        let service = service.with_max_image_size(1000);
        let laptop_id = service.create_laptop(&CallContext::new(), sample()).await.unwrap();

        let mut session = service.begin_upload(&laptop_id, ".png").await.unwrap();
        let err = session.push_chunk(&[0; 1001]).unwrap_err();

        assert!(matches!(err, CatalogError::ResourceExhausted { limit: 1000, .. }));
        assert_eq!(session.state(), UploadState::Aborted);
        assert!(service.finish_upload(&CallContext::new(), session).await.is_err());
        assert!(blobs.is_empty().await);
    }

    #[tokio::test]
    async fn test_cancelled_upload_is_not_persisted() {
        let (service, blobs) = service();
        let laptop_id = service.create_laptop(&CallContext::new(), sample()).await.unwrap();
        let mut session = service.begin_upload(&laptop_id, ".png").await.unwrap();
        session.push_chunk(&[1; 10]).unwrap();

        let ctx = CallContext::new();
        ctx.cancel();
        let err = service.finish_upload(&ctx, session).await.unwrap_err();

        assert!(matches!(err, CatalogError::Cancelled));
        assert!(blobs.is_empty().await);
    }

    #[tokio::test]
    async fn test_sink_failure_records_no_metadata() {
        let mut sink = MockBlobSink::new();
        sink.expect_write()
            .returning(|_, _| Err(CatalogError::internal("disk full")));
        let mut images = MockImageStore::new();
        images.expect_save().never();

        let store = InMemoryLaptopStore::new();
        let service = CatalogService::new(store, InMemoryRatingStore::new(), Arc::new(sink))
            .with_image_store(Arc::new(images));
        let ctx = CallContext::new();
        let laptop_id = service.create_laptop(&ctx, sample()).await.unwrap();

        let mut session = service.begin_upload(&laptop_id, ".jpg").await.unwrap();
        session.push_chunk(b"abc").unwrap();
        let err = service.finish_upload(&ctx, session).await.unwrap_err();

        assert!(matches!(err, CatalogError::Internal(_)));
    }

    #[tokio::test]
    async fn test_rate_accumulates() {
        let (service, _) = service();
        let mut last = Rating::default();
        for score in [3.0, 4.0, 5.0] {
            last = service.rate_laptop("laptop-a", score).await.unwrap();
        }
        assert_eq!(last, Rating { count: 3, sum: 12.0 });
        assert_eq!(last.average(), 4.0);
    }

    #[tokio::test]
    async fn test_rate_rejects_non_finite_scores() {
        let mut ratings = MockRatingStore::new();
        ratings.expect_add().never();
        let service = CatalogService::new(
            InMemoryLaptopStore::new(),
            ratings,
            Arc::new(InMemoryBlobSink::new()),
        );

        for score in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = service.rate_laptop("laptop-a", score).await.unwrap_err();
            assert!(matches!(err, CatalogError::InvalidArgument(_)));
        }
        let err = service.rate_laptop("", 1.0).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_rate_store_error_propagates() {
        let mut ratings = MockRatingStore::new();
        ratings
            .expect_add()
            .returning(|_, _| Err(CatalogError::internal("lock poisoned")));
        let service = CatalogService::new(
            InMemoryLaptopStore::new(),
            ratings,
            Arc::new(InMemoryBlobSink::new()),
        );

        assert!(matches!(
            service.rate_laptop("laptop-a", 2.0).await,
            Err(CatalogError::Internal(_))
        ));
    }
}
