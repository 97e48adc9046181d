//! # Repository Layer
//!
//! 영속 저장소에 대한 접근을 트레이트 뒤로 숨깁니다.
//!
//! | 트레이트 | 운영 구현 | 메모리 구현 |
//! |----------|-----------|-------------|
//! | [`UserStore`](users::UserStore) | [`UserRepository`](users::UserRepository) (MongoDB) | [`InMemoryUserStore`](users::InMemoryUserStore) |
//! | [`SessionStore`](sessions::SessionStore) | [`RedisSessionStore`](sessions::RedisSessionStore) | [`InMemorySessionStore`](sessions::InMemorySessionStore) |
//!
//! 모든 변경 연산은 즉시 영속화되며, 부분 적용되지 않는 단일 문서 연산입니다.
//! 외부 저장소 호출에는 [`with_timeout`]으로 상한 시간을 둡니다.

pub mod users;
pub mod sessions;

use std::future::Future;
use std::time::Duration;
use crate::core::{AppError, AppResult};

/// 저장소 호출에 타임아웃을 적용합니다.
///
/// 시간이 초과되면 `on_timeout`으로 만든 에러를 반환합니다.
/// 취소된 호출은 재시도하지 않습니다.
///
/// # 예제
///
/// ```rust,ignore
/// let user = with_timeout(timeout, "find_by_id", AppError::StoreError, async {
///     collection.find_one(filter).await.map_err(|e| AppError::StoreError(e.to_string()))
/// }).await?;
/// ```
pub async fn with_timeout<T, F>(
    timeout: Duration,
    operation: &str,
    on_timeout: fn(String) -> AppError,
    fut: F,
) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match actix_web::rt::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => {
            log::error!("저장소 호출 타임아웃: {} ({}ms)", operation, timeout.as_millis());
            Err(on_timeout(format!("{} timed out after {}ms", operation, timeout.as_millis())))
        }
    }
}
