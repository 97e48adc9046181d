use serde::Deserialize;

/// 인가 코드 교환 응답
///
/// Google과 Facebook 모두 이 형태로 응답합니다.
/// Google은 `scope`, `id_token` 등을 추가로 보내지만 사용하지 않습니다.
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}
