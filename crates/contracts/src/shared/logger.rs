use serde::{Deserialize, Serialize};

/// Body of `POST /api/logs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String, // "client" или "server"
    pub category: String,
    pub message: String,
}

impl CreateLogRequest {
    /// Log record originating from the browser
    pub fn client(category: &str, message: impl Into<String>) -> Self {
        Self {
            source: "client".to_string(),
            category: category.to_string(),
            message: message.into(),
        }
    }
}
