use super::types::{AccountRecord, AccountsError, AccountsPayload};
use crate::state::auth::AccountDirectory;

#[derive(Clone, Default)]
pub struct AccountsClient {
    http: reqwest::Client,
}

impl AccountsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<AccountRecord>, AccountsError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AccountsError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AccountsError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AccountsError::Request(e.to_string()))?;
        parse_accounts(&body)
    }

    /// Replaces the directory contents with the accounts served at `url`.
    /// The directory is left untouched on failure.
    pub async fn load_into(
        &self,
        url: &str,
        directory: &AccountDirectory,
    ) -> Result<usize, AccountsError> {
        let accounts = self.fetch(url).await?;
        let count = accounts.len();
        directory.replace(accounts);
        Ok(count)
    }
}

/// Accepts either a bare array or `{ "accounts": [...] }`.
pub fn parse_accounts(body: &str) -> Result<Vec<AccountRecord>, AccountsError> {
    if let Ok(list) = serde_json::from_str::<Vec<AccountRecord>>(body) {
        return Ok(list);
    }
    serde_json::from_str::<AccountsPayload>(body)
        .map(|payload| payload.accounts)
        .map_err(|e| AccountsError::Decode(e.to_string()))
}
