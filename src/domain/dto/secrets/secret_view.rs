//! 시크릿 화면용 뷰 데이터
//!
//! 템플릿 변수 이름(`usersWithSecrets`)은 기존 화면과 호환되도록 유지합니다.
//! 이 모듈의 어떤 타입도 비밀번호 해시나 프로바이더 ID를 담지 않으므로,
//! 뷰 계층으로 자격 증명이 새어 나갈 경로가 없습니다.

use serde::Serialize;
use crate::domain::dto::users::ViewerResponse;
use crate::domain::entities::users::User;

/// 시크릿을 가진 사용자 한 명의 공개 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecretHolderView {
    pub secrets: Vec<String>,
}

impl From<&User> for SecretHolderView {
    fn from(user: &User) -> Self {
        Self {
            secrets: user.secrets.clone(),
        }
    }
}

/// 익명 사용자용 `secrets` 뷰 데이터
#[derive(Debug, Clone, Serialize)]
pub struct PublicSecretsView {
    #[serde(rename = "usersWithSecrets")]
    pub users_with_secrets: Vec<SecretHolderView>,
}

/// 인증된 사용자용 `usersecrets` 뷰 데이터
#[derive(Debug, Clone, Serialize)]
pub struct UserSecretsView {
    #[serde(rename = "usersWithSecrets")]
    pub users_with_secrets: Vec<SecretHolderView>,
    pub viewer: ViewerResponse,
}

/// `profile` 뷰 데이터 (본인의 시크릿 목록)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    #[serde(rename = "usersWithSecrets")]
    pub secrets: Vec<String>,
    pub viewer: ViewerResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;

    #[test]
    fn test_holder_view_never_serializes_credentials() {
        let mut user = User::new_local("alice@example.com".to_string(), "$2b$04$hash".to_string());
        user.provider_ids.set(AuthProvider::Google, "google-sub-1".to_string());
        user.secrets.push("I like pineapple pizza".to_string());

        let view = PublicSecretsView {
            users_with_secrets: vec![SecretHolderView::from(&user)],
        };
        let json = serde_json::to_string(&view).unwrap();

        assert!(json.contains("usersWithSecrets"));
        assert!(json.contains("I like pineapple pizza"));
        assert!(!json.contains("$2b$04$hash"));
        assert!(!json.contains("google-sub-1"));
        assert!(!json.contains("password"));
    }
}
