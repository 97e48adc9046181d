//! # 세션 저장소
//!
//! 세션 키(세션 ID의 다이제스트)에서 [`SessionRecord`]로의 매핑을 TTL과 함께 저장합니다.
//! 만료된 레코드는 `get`에서 보이지 않아야 합니다.

pub mod redis_session_store;
pub mod memory_session_store;

pub use redis_session_store::RedisSessionStore;
pub use memory_session_store::InMemorySessionStore;

use async_trait::async_trait;
use crate::core::AppResult;
use crate::domain::entities::sessions::SessionRecord;

#[async_trait]
pub trait SessionStore: Send + Sync {
    fn backend_name(&self) -> &'static str;

    async fn put(&self, key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()>;

    async fn get(&self, key: &str) -> AppResult<Option<SessionRecord>>;

    /// 키가 없어도 성공으로 처리합니다.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
