use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authenticated user as seen by the rest of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
}

/// Entry of the account directory, as served by `accounts.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "cliente".into()
}

impl AccountRecord {
    pub fn to_user(&self) -> UserRecord {
        UserRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsPayload {
    pub accounts: Vec<AccountRecord>,
}

#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected status {0} while loading accounts")]
    Status(u16),
    #[error("Failed to parse accounts: {0}")]
    Decode(String),
}
