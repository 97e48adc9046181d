//! # Redis 클라이언트 구현
//!
//! 세션 레코드를 저장하는 Redis 클라이언트를 제공합니다.
//! 값은 JSON으로 직렬화되어 문자열로 저장되며, 세션 TTL은 `SETEX`로 관리합니다.
//!
//! ## 연결 관리
//!
//! `ConnectionManager`는 멀티플렉싱된 단일 연결을 공유하며,
//! 연결이 끊기면 자동으로 재연결합니다. 복제 비용이 작으므로
//! 명령마다 복제해서 사용합니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// 주어진 URL로 연결하고 `PING`으로 서버 가용성을 확인합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let redis = RedisClient::new(&StoreConfig::redis_url()).await?;
    /// ```
    pub async fn new(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;
        let mut manager = client.get_connection_manager().await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;
        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    /// JSON으로 저장된 값을 읽어 역직렬화합니다.
    ///
    /// 키가 없으면 `Ok(None)`을 반환합니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json).map_err(|e| {
                    redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string()))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 만료 시간과 함께 값을 저장합니다.
    ///
    /// 기존 키가 있으면 값과 TTL 모두 덮어씁니다.
    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string()))
        })?;
        conn.set_ex(key, json, seconds).await
    }

    /// 지정된 키를 삭제합니다. 키가 없어도 성공으로 처리합니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }
}
