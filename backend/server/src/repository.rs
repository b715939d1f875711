//! # Repository
//!
//! Storage contract the routes talk to. Handlers never see which store sits behind it.
//!
//! - [`MemoryRepository`]: process-local map, default backend and the one tests run against
//! - [`RedisRepository`](crate::database::RedisRepository): hash-per-catalog in Redis
//!
//! Every operation is a single store call. Concurrent updates to one id race and the last
//! write wins.
use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::sauce::HotSauce;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored record is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait HotSauceRepository: Send + Sync {
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<HotSauce>, RepositoryError>;

    /// Ascending id, which is also insertion order.
    async fn find_all(&self) -> Result<Vec<HotSauce>, RepositoryError>;

    /// Id 0 inserts under the next free id, anything else replaces (or creates) that id.
    async fn save(&self, sauce: HotSauce) -> Result<HotSauce, RepositoryError>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;
}

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, HotSauce>,
}

#[derive(Default)]
pub struct MemoryRepository {
    table: Mutex<Table>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HotSauceRepository for MemoryRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.table.lock().await.rows.contains_key(&id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HotSauce>, RepositoryError> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<HotSauce>, RepositoryError> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn save(&self, mut sauce: HotSauce) -> Result<HotSauce, RepositoryError> {
        let mut table = self.table.lock().await;

        if sauce.id == 0 {
            table.next_id += 1;
            sauce.id = table.next_id;
        } else if sauce.id > table.next_id {
            table.next_id = sauce.id;
        }

        table.rows.insert(sauce.id, sauce.clone());

        Ok(sauce)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.table.lock().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.table.lock().await.rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sauce(brand_name: &str, heat: i32) -> HotSauce {
        HotSauce {
            brand_name: brand_name.to_string(),
            heat,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repository = MemoryRepository::new();

        let first = repository.save(sauce("Truff", 2500)).await.unwrap();
        let second = repository.save(sauce("Cholula", 3600)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repository.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn save_with_id_replaces_in_place() {
        let repository = MemoryRepository::new();
        let mut saved = repository.save(sauce("Truff", 2500)).await.unwrap();

        saved.heat = 4000;
        repository.save(saved.clone()).await.unwrap();

        assert_eq!(repository.count().await.unwrap(), 1);
        assert_eq!(repository.find_by_id(saved.id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn explicit_id_advances_the_sequence() {
        let repository = MemoryRepository::new();
        let mut explicit = sauce("Mad Dog", 357_000);
        explicit.id = 10;

        repository.save(explicit).await.unwrap();
        let next = repository.save(sauce("Truff", 2500)).await.unwrap();

        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn find_all_returns_insertion_order() {
        let repository = MemoryRepository::new();
        for (brand, heat) in [("C", 3), ("A", 1), ("B", 2)] {
            repository.save(sauce(brand, heat)).await.unwrap();
        }

        let brands: Vec<String> = repository
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.brand_name)
            .collect();

        assert_eq!(brands, ["C", "A", "B"]);
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repository = MemoryRepository::new();
        let saved = repository.save(sauce("Truff", 2500)).await.unwrap();

        assert!(repository.exists_by_id(saved.id).await.unwrap());
        assert!(repository.delete_by_id(saved.id).await.unwrap());
        assert!(!repository.delete_by_id(saved.id).await.unwrap());
        assert!(!repository.exists_by_id(saved.id).await.unwrap());
        assert_eq!(repository.find_by_id(saved.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repository = MemoryRepository::new();
        let first = repository.save(sauce("Truff", 2500)).await.unwrap();
        repository.delete_by_id(first.id).await.unwrap();

        let second = repository.save(sauce("Truff", 2500)).await.unwrap();

        assert_ne!(first.id, second.id);
    }
}
