//! # 사용자 저장소 (Credential Store)
//!
//! 사용자 레코드를 영속화하는 저장소 계약과 구현체입니다.
//!
//! ## 계약
//!
//! - 모든 변경 연산은 즉시 영속화됩니다.
//! - 실패는 `AppError::StoreError`로 드러나며, 변경이 부분 적용되지 않습니다.
//! - `find_or_create_by_provider`는 같은 `(provider, subject_id)`로 동시에 호출되어도
//!   정확히 하나의 레코드만 만듭니다.
//! - `remove_secret`은 일치하는 값을 **모두** 제거합니다.

pub mod user_repo;
pub mod memory_store;

pub use user_repo::UserRepository;
pub use memory_store::InMemoryUserStore;

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::core::AppResult;
use crate::domain::entities::users::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 로그와 헬스 체크에 표시할 백엔드 이름
    fn backend_name(&self) -> &'static str;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 형식이 잘못된 ID는 존재하지 않는 것으로 취급합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 새 레코드를 저장하고 ID가 채워진 레코드를 반환합니다.
    ///
    /// 사용자명이 이미 있으면 `AppError::UsernameTaken`을 반환하고 아무것도 저장하지 않습니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 프로바이더 식별자로 레코드를 찾고, 없으면 원자적으로 생성합니다.
    async fn find_or_create_by_provider(&self, provider: AuthProvider, subject_id: &str) -> AppResult<User>;

    /// 레코드가 없으면 `AppError::NotFound`
    async fn append_secret(&self, id: &str, text: &str) -> AppResult<()>;

    /// 정확히 일치하는 값을 모두 제거합니다. 레코드가 없으면 `AppError::NotFound`
    async fn remove_secret(&self, id: &str, text: &str) -> AppResult<()>;

    /// 시크릿이 하나 이상 있는 레코드 목록
    async fn list_with_any_secret(&self) -> AppResult<Vec<User>>;

    async fn count(&self) -> AppResult<u64>;
}
