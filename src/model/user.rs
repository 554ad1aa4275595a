//! Registered shop user.
//!
//! Authentication lives at the HTTP boundary and is not modelled here; the
//! store only guarantees email uniqueness (enforced by
//! [`UserClient::create_user`](crate::clients::UserClient::create_user)).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

fn default_role() -> String {
    "customer".to_string()
}

/// Payload for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

/// Sparse partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
