//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post as sent by clients.
///
/// `id` and `timeStamp` are server-assigned; clients may omit them (they are
/// ignored on create).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub body: String,
    pub poster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<DateTime<Utc>>,
}

/// A persisted post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub poster: String,
    pub time_stamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_decodes_without_server_fields() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"title":"A","body":"B","poster":"C"}"#).unwrap();
        assert!(payload.id.is_none());
        assert!(payload.time_stamp.is_none());
        assert_eq!(payload.poster, "C");
    }

    #[test]
    fn response_uses_camel_case_timestamp() {
        let response = PostResponse {
            id: Uuid::new_v4(),
            title: "A".into(),
            body: "B".into(),
            poster: "C".into(),
            time_stamp: Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("timeStamp").is_some());
        assert!(json.get("time_stamp").is_none());
    }
}
