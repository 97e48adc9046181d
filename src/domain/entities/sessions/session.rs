//! 서버 측 세션 레코드
//!
//! 클라이언트는 불투명한 세션 ID만 쿠키로 보관하고,
//! 서버는 ID의 SHA-256 다이제스트를 키로 이 레코드를 저장합니다.
//! 레코드에는 사용자 ID만 들어 있으며, 사용자 정보는 요청마다 다시 조회합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 세션을 수립한 인증 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Local,
    Google,
    Facebook,
}

impl From<AuthProvider> for AuthMethod {
    fn from(provider: AuthProvider) -> Self {
        match provider {
            AuthProvider::Google => AuthMethod::Google,
            AuthProvider::Facebook => AuthMethod::Facebook,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    pub auth_method: AuthMethod,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(user_id: String, auth_method: AuthMethod) -> Self {
        Self {
            user_id,
            auth_method,
            created_at: Utc::now(),
        }
    }
}
