//! # Secret Service
//!
//! 사용자별 시크릿의 추가, 삭제, 공개 목록 조회를 담당합니다.
//!
//! 변경 연산은 [`CurrentUser`]를 요구하므로 익명 요청에서는 호출될 수 없으며,
//! 대상 레코드는 항상 세션의 사용자 ID로 정해집니다. 다른 사용자의 ID를
//! 인자로 받는 경로는 없습니다.

use std::sync::Arc;
use crate::core::{AppError, AppResult};
use crate::domain::dto::secrets::SecretHolderView;
use crate::domain::models::auth::CurrentUser;
use crate::repositories::users::UserStore;

pub struct SecretService {
    users: Arc<dyn UserStore>,
}

impl SecretService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 세션이 유효한 동안 레코드가 사라졌으면 인증되지 않은 것으로 취급합니다.
    fn missing_user_as_unauthorized(error: AppError) -> AppError {
        match error {
            AppError::NotFound(detail) => {
                log::warn!("세션 사용자의 레코드가 없음: {}", detail);
                AppError::Unauthorized
            }
            other => other,
        }
    }

    /// 현재 사용자의 시크릿 목록 끝에 추가합니다.
    ///
    /// 앞뒤 공백을 제거한 뒤 비어 있으면 `ValidationError`입니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// secret_service.submit_secret(&current_user, &form.secret).await?;
    /// ```
    pub async fn submit_secret(&self, current_user: &CurrentUser, text: &str) -> AppResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::ValidationError("시크릿 내용이 비어 있습니다".to_string()));
        }

        self.users
            .append_secret(&current_user.user_id, text)
            .await
            .map_err(Self::missing_user_as_unauthorized)?;

        log::info!("시크릿 추가 - user_id: {}, len: {}", current_user.user_id, text.chars().count());
        Ok(())
    }

    /// 현재 사용자의 시크릿 중 `text`와 정확히 일치하는 항목을 모두 제거합니다.
    pub async fn remove_secret(&self, current_user: &CurrentUser, text: &str) -> AppResult<()> {
        self.users
            .remove_secret(&current_user.user_id, text)
            .await
            .map_err(Self::missing_user_as_unauthorized)?;

        log::info!("시크릿 삭제 - user_id: {}", current_user.user_id);
        Ok(())
    }

    /// 시크릿을 하나 이상 가진 사용자들의 공개 뷰 목록
    pub async fn list_secret_holders(&self) -> AppResult<Vec<SecretHolderView>> {
        let holders = self.users.list_with_any_secret().await?;
        log::debug!("시크릿 보유자 {}명 조회", holders.len());

        Ok(holders.iter().map(SecretHolderView::from).collect())
    }
}
