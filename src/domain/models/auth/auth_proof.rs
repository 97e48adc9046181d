use crate::config::AuthProvider;

/// 로그인 시도 하나가 제시하는 인증 증명
///
/// 세 가지 로그인 방식(로컬, Google, Facebook)을 두 가지 형태로 정규화하여
/// [`IdentityResolver::resolve`](crate::services::auth::IdentityResolver::resolve) 하나로 처리합니다.
#[derive(Clone)]
pub enum AuthProof {
    /// 사용자명과 평문 비밀번호
    Local { username: String, password: String },
    /// OAuth 핸드셰이크가 끝난 뒤 프로바이더가 알려준 사용자 식별자
    OAuth { provider: AuthProvider, subject_id: String },
}

// 평문 비밀번호가 로그에 남지 않도록 직접 구현
impl std::fmt::Debug for AuthProof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthProof::Local { username, .. } => f
                .debug_struct("Local")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            AuthProof::OAuth { provider, subject_id } => f
                .debug_struct("OAuth")
                .field("provider", provider)
                .field("subject_id", subject_id)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let proof = AuthProof::Local {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", proof);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
