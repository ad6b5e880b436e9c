//! The uniform `{ success, data?, error? }` envelope used by every API outcome.

use serde::{Deserialize, Serialize};

/// Standard API response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_omits_data() {
        let body = serde_json::to_value(ApiResponse::failure("Post not found")).unwrap();
        assert_eq!(body, json!({ "success": false, "error": "Post not found" }));
    }

    #[test]
    fn ok_omits_error() {
        let body = serde_json::to_value(ApiResponse::ok(json!({ "id": 7 }))).unwrap();
        assert_eq!(body, json!({ "success": true, "data": { "id": 7 } }));
    }
}
