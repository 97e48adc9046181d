//! 시크릿 요청 폼
use serde::Deserialize;
use validator::Validate;

/// `/submit` POST 폼
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSecretForm {
    #[validate(length(max = 10000, message = "시크릿은 10000자를 넘을 수 없습니다"))]
    pub secret: String,
}

/// `/profile` POST 폼
///
/// 프로필 화면의 삭제 버튼 값이 곧 삭제할 시크릿 원문입니다.
#[derive(Debug, Deserialize)]
pub struct RemoveSecretForm {
    pub button: String,
}
