//! Facebook Graph API `/me` 응답 모델

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FacebookUserInfo {
    /// 앱 범위(app-scoped) 사용자 ID
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}
