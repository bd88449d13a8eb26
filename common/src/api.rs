//! JSON envelope shared by every API endpoint.
//!
//! The backend wraps all responses as `{ status, data, message }`. The client
//! treats `status: false` as a logical failure regardless of the HTTP status
//! code, and `message` carries the human-readable reason when present.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Collapses the envelope into the carried payload, or the server's
    /// message when `status` is false or `data` is absent.
    pub fn into_data(self) -> Result<T, String> {
        if !self.status {
            return Err(self
                .message
                .unwrap_or_else(|| "Request rejected by server".to_string()));
        }
        self.data
            .ok_or_else(|| "Response carried no data".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_envelope_yields_message() {
        let env: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"status":false,"message":"No such record"}"#).unwrap();
        assert_eq!(env.into_data().unwrap_err(), "No such record");
    }

    #[test]
    fn rejected_envelope_without_message_uses_default() {
        let env: ApiResponse<u32> = serde_json::from_str(r#"{"status":false}"#).unwrap();
        assert!(env.into_data().is_err());
    }

    #[test]
    fn accepted_envelope_yields_data() {
        let env: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"status":true,"data":["a","b"]}"#).unwrap();
        assert_eq!(env.into_data().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn accepted_envelope_without_data_is_an_error() {
        let env: ApiResponse<u32> = serde_json::from_str(r#"{"status":true}"#).unwrap();
        assert!(env.into_data().is_err());
    }
}
