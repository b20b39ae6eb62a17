use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: uuid::Uuid,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl User {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            username,
            password_hash,
            created_at: None,
        }
    }
}

/// Boundary-resolved proof of who is calling. The core never parses or
/// validates tokens; it only ever sees this.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub user_id: uuid::Uuid,
    pub username: String,
}
