use serde::Serialize;

/// `POST /jwt` 응답
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
