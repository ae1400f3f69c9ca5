//! Care-team message record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message between two users in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_by_default() {
        let message: Message = serde_json::from_str(
            r#"{
                "id": "m1",
                "conversationId": "c1",
                "senderId": "u1",
                "recipientId": "u2",
                "content": "Medication reminder sent",
                "timestamp": "2024-03-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(!message.read);
    }
}
