//! 캐싱 계층 모듈
//!
//! Redis 연결과 JSON 기반 값 직렬화를 제공합니다.
//! 이 서비스에서는 서버 측 세션 레코드 저장에 사용됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new("redis://localhost:6379").await?;
//! redis.set_with_expiry("session:abc", &record, 3600).await?;
//! let record: Option<SessionRecord> = redis.get("session:abc").await?;
//! redis.del("session:abc").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
