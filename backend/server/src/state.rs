use std::sync::Arc;

use tracing::info;

use super::{
    config::{Config, StoreBackend},
    database::RedisRepository,
    error::StartupError,
    repository::{HotSauceRepository, MemoryRepository},
    seed::load_seed,
};

pub struct AppState {
    pub config: Config,
    pub repository: Arc<dyn HotSauceRepository>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Arc<Self>, StartupError> {
        let repository: Arc<dyn HotSauceRepository> = match config.store_backend {
            StoreBackend::Memory => {
                info!("Using in-memory store");
                Arc::new(MemoryRepository::new())
            }
            StoreBackend::Redis => {
                info!("Connecting to Redis at {}", config.redis_url);
                Arc::new(RedisRepository::connect(&config.redis_url).await?)
            }
        };

        if config.seed_data {
            load_seed(repository.as_ref()).await?;
        }

        Ok(Self::with_repository(config, repository))
    }

    pub fn with_repository(config: Config, repository: Arc<dyn HotSauceRepository>) -> Arc<Self> {
        Arc::new(Self { config, repository })
    }
}
