use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::Rating;

/// Per-laptop rating accumulator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Fold `score` into the aggregate for `laptop_id` and return the updated aggregate.
    async fn add(&self, laptop_id: &str, score: f64) -> CatalogResult<Rating>;

    /// Current aggregate, if the laptop has been rated.
    async fn get(&self, laptop_id: &str) -> CatalogResult<Option<Rating>>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryRatingStore {
    ratings: Arc<RwLock<HashMap<String, Rating>>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingStore for InMemoryRatingStore {
    async fn add(&self, laptop_id: &str, score: f64) -> CatalogResult<Rating> {
        let mut ratings = self.ratings.write().await;
        let rating = ratings.entry(laptop_id.to_string()).or_default();
        rating.count += 1;
        rating.sum += score;
        Ok(*rating)
    }

    async fn get(&self, laptop_id: &str) -> CatalogResult<Option<Rating>> {
        Ok(self.ratings.read().await.get(laptop_id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_rating_creates_aggregate() {
        let store = InMemoryRatingStore::new();
        assert!(store.get("a").await.unwrap().is_none());

        let rating = store.add("a", 4.5).await.unwrap();
        assert_eq!(rating, Rating { count: 1, sum: 4.5 });
    }

    #[tokio::test]
    async fn test_running_totals() {
        let store = InMemoryRatingStore::new();
        let mut sum = 0.0;
        for (n, score) in [3.0, 4.0, 5.0].into_iter().enumerate() {
            sum += score;
            let rating = store.add("a", score).await.unwrap();
            assert_eq!(rating.count, n as u32 + 1);
            assert_eq!(rating.sum, sum);
        }
        assert_eq!(store.get("a").await.unwrap().unwrap().average(), 4.0);
    }

    #[tokio::test]
    async fn test_ids_do_not_interfere() {
        let store = InMemoryRatingStore::new();
        store.add("a", 10.0).await.unwrap();
        store.add("a", 10.0).await.unwrap();
        let b = store.add("b", 1.0).await.unwrap();

        assert_eq!(b, Rating { count: 1, sum: 1.0 });
        assert_eq!(store.get("a").await.unwrap().unwrap().count, 2);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let store = InMemoryRatingStore::new();
        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.add("shared", 2.0).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let rating = store.get("shared").await.unwrap().unwrap();
        assert_eq!(rating, Rating { count: 50, sum: 100.0 });
    }
}
