use serde::Serialize;
use crate::domain::entities::sessions::AuthMethod;
use crate::domain::entities::users::User;

/// 인증된 사용자 본인에게 보여주는 최소 정보
///
/// 비밀번호 해시와 프로바이더 ID는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct ViewerResponse {
    pub display_name: String,
    pub auth_method: AuthMethod,
    pub secret_count: usize,
}

impl ViewerResponse {
    pub fn new(user: &User, auth_method: AuthMethod) -> Self {
        Self {
            display_name: user.display_name(),
            auth_method,
            secret_count: user.secrets.len(),
        }
    }
}
