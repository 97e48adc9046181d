//! Redis 기반 세션 저장소
//!
//! 키 형식: `session:<sha256 hex>`. TTL은 `SETEX`로 Redis가 관리합니다.

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::core::{AppError, AppResult};
use crate::domain::entities::sessions::SessionRecord;
use crate::repositories::sessions::SessionStore;
use crate::repositories::with_timeout;

const KEY_PREFIX: &str = "session:";

pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
    timeout: Duration,
}

impl RedisSessionStore {
    pub fn new(redis: Arc<RedisClient>, timeout: Duration) -> Self {
        Self { redis, timeout }
    }

    fn redis_key(key: &str) -> String {
        format!("{}{}", KEY_PREFIX, key)
    }
}

fn session_store_error(e: redis::RedisError) -> AppError {
    AppError::SessionStoreError(e.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    fn backend_name(&self) -> &'static str {
        "redis"
    }

    async fn put(&self, key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()> {
        let redis_key = Self::redis_key(key);
        with_timeout(self.timeout, "session put", AppError::SessionStoreError, async {
            self.redis
                .set_with_expiry(&redis_key, record, ttl_seconds)
                .await
                .map_err(session_store_error)
        })
        .await
    }

    async fn get(&self, key: &str) -> AppResult<Option<SessionRecord>> {
        let redis_key = Self::redis_key(key);
        with_timeout(self.timeout, "session get", AppError::SessionStoreError, async {
            self.redis
                .get::<SessionRecord>(&redis_key)
                .await
                .map_err(session_store_error)
        })
        .await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let redis_key = Self::redis_key(key);
        with_timeout(self.timeout, "session delete", AppError::SessionStoreError, async {
            self.redis.del(&redis_key).await.map_err(session_store_error)
        })
        .await
    }
}
