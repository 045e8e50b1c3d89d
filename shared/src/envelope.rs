use serde::{Deserialize, Serialize};

pub const CODE_SUCCESS: i32 = 200;
pub const CODE_UNAUTHORIZED: i32 = 401;

/// Response envelope every endpoint wraps its payload in:
/// `{ "code": 200, "message": "...", "data": ... }`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let raw = r#"{"code":200,"message":"ok","data":"abc123"}"#;
        let resp: ApiResponse<String> = serde_json::from_str(raw).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.data.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_decode_error_envelope_without_data() {
        let raw = r#"{"code":2002,"message":"out of stock"}"#;
        let resp: ApiResponse<String> = serde_json::from_str(raw).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.data, None);
        assert_eq!(resp.message, "out of stock");
    }

    #[test]
    fn test_decode_null_data() {
        let raw = r#"{"code":200,"message":"paid","data":null}"#;
        let resp: ApiResponse<()> = serde_json::from_str(raw).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.data, None);
    }
}
