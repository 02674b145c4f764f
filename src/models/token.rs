//! Token endpoint models.

use serde::{Deserialize, Serialize};

/// Body of `POST /token/get`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest<'a> {
    pub api_key: String,
    pub api_secret: &'a str,
    pub user_name: &'a str,
}

/// Response of `POST /token/get`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_field_names() {
        let body = TokenRequest {
            api_key: "k".to_string(),
            api_secret: "s",
            user_name: "u",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"apiKey": "k", "apiSecret": "s", "userName": "u"})
        );
    }

    #[test]
    fn test_token_response_snake_case() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{"access_token":"abc","token_type":"bearer","expires_in":10800}"#,
        )
        .unwrap();
        assert_eq!(parsed.access_token, "abc");
        assert_eq!(parsed.expires_in, 10800);
    }
}
