//! 인증 요청 관련 DTO
//!
//! 로그인/회원가입 폼과 OAuth 콜백 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로컬 로그인 및 회원가입 폼
///
/// 두 폼은 같은 필드(`username`, `password`)를 사용합니다.
/// 사용자명은 이메일 주소 형태가 일반적이지만 형식을 강제하지 않습니다.
/// 누락된 필드는 빈 문자열이 되어 추출 단계가 아닌 검증 단계에서 거부됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 254, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 1024, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl CredentialsForm {
    /// 앞뒤 공백을 제거한 사용자명. 비밀번호는 그대로 둡니다.
    pub fn normalized_username(&self) -> String {
        self.username.trim().to_string()
    }
}

/// OAuth 콜백 쿼리 파라미터
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 전달됩니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
