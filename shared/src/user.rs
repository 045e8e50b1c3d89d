use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub token: String,
    #[serde(default)]
    pub expire_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_blank_credentials_rejected() {
        let req = LoginRequest {
            username: String::new(),
            password: "secret".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_decode_login_response() {
        let raw = r#"{"userId":12,"username":"alice","nickname":"Alice","token":"jwt-abc","expireTime":1700000000000}"#;
        let resp: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.token, "jwt-abc");
        assert_eq!(resp.user_id, 12);
    }
}
