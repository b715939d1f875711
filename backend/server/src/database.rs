//! # Redis
//!
//! Persistent backend, selected with `STORE_BACKEND=redis`.
//!
//! ## Implementation
//!
//! - Redis hash `hotsauces`: 1 big key, then id to JSON record pairs
//! - Counter `hotsauces:next_id`: `INCR` hands out ids, never reused after a delete
//! - Saving under an explicit id raises the counter to at least that id, same as the memory store
//! - Reads and writes are single commands, so each one is atomic on its own
//! - `HGETALL` has no order, records are sorted by id before returning
use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use redis::{
    AsyncCommands, Client, RedisResult, Script,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::{
    repository::{HotSauceRepository, RepositoryError},
    sauce::HotSauce,
};

pub const SAUCE_HASH: &str = "hotsauces";

/// Raises `KEYS[1]` to `ARGV[1]` when it is lower. Never lowers it.
const RAISE_SEQUENCE: &str = r"
local current = tonumber(redis.call('GET', KEYS[1]) or '0')
local floor = tonumber(ARGV[1])
if floor > current then
    redis.call('SET', KEYS[1], floor)
end
return 0
";

pub async fn init_redis(redis_url: &str) -> RedisResult<ConnectionManager> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url)?;

    client.get_connection_manager_with_config(config).await
}

#[derive(Clone)]
pub struct RedisRepository {
    connection: ConnectionManager,
    hash: String,
    sequence: String,
}

impl RedisRepository {
    pub async fn connect(redis_url: &str) -> Result<Self, RepositoryError> {
        Self::connect_with_hash(redis_url, SAUCE_HASH).await
    }

    /// Stores records under `hash` and the id counter under `{hash}:next_id`.
    pub async fn connect_with_hash(redis_url: &str, hash: &str) -> Result<Self, RepositoryError> {
        Ok(Self {
            connection: init_redis(redis_url).await?,
            hash: hash.to_string(),
            sequence: format!("{hash}:next_id"),
        })
    }
}

#[async_trait]
impl HotSauceRepository for RedisRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut connection = self.connection.clone();

        Ok(connection.hexists(&self.hash, id).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HotSauce>, RepositoryError> {
        let mut connection = self.connection.clone();
        let raw: Option<String> = connection.hget(&self.hash, id).await?;

        Ok(raw.map(|json| serde_json::from_str(&json)).transpose()?)
    }

    async fn find_all(&self) -> Result<Vec<HotSauce>, RepositoryError> {
        let mut connection = self.connection.clone();
        let raw: HashMap<i64, String> = connection.hgetall(&self.hash).await?;

        let mut sauces = raw
            .values()
            .map(|json| serde_json::from_str::<HotSauce>(json))
            .collect::<Result<Vec<_>, _>>()?;
        sauces.sort_by_key(|sauce| sauce.id);

        Ok(sauces)
    }

    async fn save(&self, mut sauce: HotSauce) -> Result<HotSauce, RepositoryError> {
        let mut connection = self.connection.clone();

        if sauce.id == 0 {
            sauce.id = connection.incr(&self.sequence, 1).await?;
        } else {
            let _: i64 = Script::new(RAISE_SEQUENCE)
                .key(&self.sequence)
                .arg(sauce.id)
                .invoke_async(&mut connection)
                .await?;
        }

        let json = serde_json::to_string(&sauce)?;
        let _: () = connection.hset(&self.hash, sauce.id, json).await?;

        Ok(sauce)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut connection = self.connection.clone();
        let removed: u64 = connection.hdel(&self.hash, id).await?;

        Ok(removed > 0)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let mut connection = self.connection.clone();

        Ok(connection.hlen(&self.hash).await?)
    }
}
