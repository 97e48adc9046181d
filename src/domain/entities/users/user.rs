//! # 사용자 엔티티
//!
//! 로컬 자격 증명, OAuth 프로바이더 식별자, 시크릿 목록을 하나로 묶는
//! 유일한 영속 엔티티입니다. MongoDB `users` 컬렉션의 문서 구조와 같습니다.
//!
//! ## 불변 조건
//!
//! - `username`은 존재할 경우 전체에서 유일합니다 (저장소가 보장).
//! - `provider_ids.<provider>`는 전체에서 유일합니다 (find-or-create가 보장).
//! - 로컬 자격 증명, Google ID, Facebook ID 중 최소 하나가 있어야 로그인할 수 있습니다.
//! - `secrets`는 추가 순서만 유지되는 불투명 문자열 목록입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 프로바이더별 고유 사용자 식별자(subject)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl ProviderIds {
    pub fn get(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Google => self.google.as_deref(),
            AuthProvider::Facebook => self.facebook.as_deref(),
        }
    }

    pub fn set(&mut self, provider: AuthProvider, subject_id: String) {
        match provider {
            AuthProvider::Google => self.google = Some(subject_id),
            AuthProvider::Facebook => self.facebook = Some(subject_id),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    /// MongoDB ObjectId (생성 전에는 None)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 로컬 로그인 키. OAuth 전용 계정에는 없음
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// bcrypt 해시. 로컬 계정에만 존재하며 클라이언트로 절대 반환하지 않음
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    #[serde(default)]
    pub provider_ids: ProviderIds,

    #[serde(default)]
    pub secrets: Vec<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 로컬 계정 생성용 팩토리
    ///
    /// `password_hash`는 이미 해싱된 값이어야 합니다.
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: Some(username),
            password_hash: Some(password_hash),
            provider_ids: ProviderIds::default(),
            secrets: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// OAuth 계정 생성용 팩토리. 비밀번호는 설정되지 않습니다.
    pub fn new_oauth(provider: AuthProvider, subject_id: String) -> Self {
        let now = DateTime::now();
        let mut provider_ids = ProviderIds::default();
        provider_ids.set(provider, subject_id);

        Self {
            id: None,
            username: None,
            password_hash: None,
            provider_ids,
            secrets: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 화면 표시용 이름. 로컬 계정은 사용자명, OAuth 계정은 프로바이더 이름
    pub fn display_name(&self) -> String {
        if let Some(username) = &self.username {
            return username.clone();
        }
        if self.provider_ids.google.is_some() {
            return "Google user".to_string();
        }
        if self.provider_ids.facebook.is_some() {
            return "Facebook user".to_string();
        }
        "Anonymous".to_string()
    }
}

// 비밀번호 해시가 로그에 남지 않도록 직접 구현
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id_string())
            .field("username", &self.username)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<redacted>"))
            .field("provider_ids", &self.provider_ids)
            .field("secrets", &self.secrets.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_oauth_user_has_no_password() {
        let user = User::new_oauth(AuthProvider::Facebook, "fb-123".to_string());

        assert!(user.password_hash.is_none());
        assert!(user.username.is_none());
        assert_eq!(user.provider_ids.get(AuthProvider::Facebook), Some("fb-123"));
        assert_eq!(user.provider_ids.get(AuthProvider::Google), None);
    }

    #[test]
    fn test_debug_output_redacts_password_hash() {
        let user = User::new_local("alice@example.com".to_string(), "$2b$04$abcdef".to_string());
        let debug = format!("{:?}", user);

        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("$2b$04$abcdef"));
    }

    #[test]
    fn test_missing_optional_fields_deserialize_with_defaults() {
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "provider_ids": { "google": "g-1" },
            "created_at": DateTime::now(),
            "updated_at": DateTime::now(),
        };
        let user: User = mongodb::bson::from_document(doc).unwrap();

        assert!(user.secrets.is_empty());
        assert!(user.username.is_none());
        assert_eq!(user.provider_ids.google.as_deref(), Some("g-1"));
    }
}
