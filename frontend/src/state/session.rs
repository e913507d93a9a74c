use crate::api::UserRecord;
use leptos::*;
use thiserror::Error;

pub const SESSION_STORAGE_KEY: &str = "tienda.session";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] crate::utils::storage::StorageError),
    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The signed-in user, mirrored into localStorage on wasm builds.
#[derive(Clone, Copy, Debug)]
pub struct SessionState {
    pub current_user: RwSignal<Option<UserRecord>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: create_rw_signal(restore()),
        }
    }

    pub fn establish(&self, user: UserRecord) {
        if let Err(err) = persist(Some(&user)) {
            log::warn!("could not persist session: {}", err);
        }
        log::info!("session established for role {}", user.role);
        self.current_user.set(Some(user));
    }

    pub fn clear(&self) {
        if let Err(err) = persist(None) {
            log::warn!("could not clear stored session: {}", err);
        }
        self.current_user.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.with(Option::is_some)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn encode_session(user: &UserRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(user)
}

/// Corrupt payloads are treated as "no session".
pub fn decode_session(raw: &str) -> Option<UserRecord> {
    serde_json::from_str(raw).ok()
}

#[cfg(target_arch = "wasm32")]
fn persist(user: Option<&UserRecord>) -> Result<(), SessionError> {
    use crate::utils::storage;
    match user {
        Some(user) => storage::write(SESSION_STORAGE_KEY, &encode_session(user)?)?,
        None => storage::remove(SESSION_STORAGE_KEY)?,
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(_user: Option<&UserRecord>) -> Result<(), SessionError> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn restore() -> Option<UserRecord> {
    match crate::utils::storage::read(SESSION_STORAGE_KEY) {
        Ok(raw) => raw.as_deref().and_then(decode_session),
        Err(err) => {
            log::debug!("no stored session: {}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn restore() -> Option<UserRecord> {
    None
}
