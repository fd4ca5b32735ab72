use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::context::CallContext;
use crate::error::{CatalogError, CatalogResult};
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::models::{Filter, Laptop};

/// Storage for laptop records
///
/// Records are created once and never updated or deleted. Every value crossing this
/// boundary is an owned copy.
#[async_trait]
pub trait LaptopStore: Send + Sync {
    /// Insert `laptop`, assigning a fresh id when it has none. Returns the stored id.
    async fn save(&self, laptop: Laptop) -> CatalogResult<String>;

    /// Copy of the laptop with `id`, if any.
    async fn find(&self, id: &str) -> CatalogResult<Option<Laptop>>;

    /// Hand every laptop matching `filter` to `on_match`, returning how many were delivered.
    ///
    /// Stops at the first error from `on_match` or as soon as `ctx` is cancelled. Laptops
    /// already delivered stay delivered.
    async fn search<F, Fut>(
        &self,
        ctx: &CallContext,
        filter: &Filter,
        on_match: F,
    ) -> CatalogResult<usize>
    where
        F: FnMut(Laptop) -> Fut + Send,
        Fut: Future<Output = CatalogResult<()>> + Send;
}

/// In-memory implementation of LaptopStore
#[derive(Clone)]
pub struct InMemoryLaptopStore {
    laptops: Arc<RwLock<HashMap<String, Laptop>>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for InMemoryLaptopStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLaptopStore {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            laptops: Arc::new(RwLock::new(HashMap::new())),
            ids,
        }
    }

    pub async fn len(&self) -> usize {
        self.laptops.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.laptops.read().await.is_empty()
    }
}

#[async_trait]
impl LaptopStore for InMemoryLaptopStore {
    async fn save(&self, mut laptop: Laptop) -> CatalogResult<String> {
        if laptop.id.is_empty() {
            laptop.id = self.ids.new_id();
        } else if !self.ids.is_valid(&laptop.id) {
            return Err(CatalogError::InvalidIdentifier(laptop.id));
        }

        let mut laptops = self.laptops.write().await;
        if laptops.contains_key(&laptop.id) {
            return Err(CatalogError::AlreadyExists(laptop.id));
        }

        let id = laptop.id.clone();
        laptops.insert(id.clone(), laptop);

        tracing::debug!(laptop_id = %id, "Saved laptop");
        Ok(id)
    }

    async fn find(&self, id: &str) -> CatalogResult<Option<Laptop>> {
        let laptops = self.laptops.read().await;
        Ok(laptops.get(id).cloned())
    }

    async fn search<F, Fut>(
        &self,
        ctx: &CallContext,
        filter: &Filter,
        mut on_match: F,
    ) -> CatalogResult<usize>
    where
        F: FnMut(Laptop) -> Fut + Send,
        Fut: Future<Output = CatalogResult<()>> + Send,
    {
        // Snapshot under the read lock; delivery may suspend on the peer.
        let matches: Vec<Laptop> = {
            let laptops = self.laptops.read().await;
            laptops
                .values()
                .filter(|laptop| filter.matches(laptop))
                .cloned()
                .collect()
        };

        let mut delivered = 0;
        for laptop in matches {
            ctx.check()?;
            on_match(laptop).await?;
            delivered += 1;
        }
        Ok(delivered)
    }
}
