use crate::{api::UserRecord, router::HOME_PATH, state::session::SessionState};

/// Where to go after signing in. `next` is honoured only when it is a
/// same-origin absolute path.
pub fn landing_path(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_string(),
        _ => HOME_PATH.to_string(),
    }
}

/// Records the signed-in user and returns the path to navigate to.
pub fn complete_login(session: SessionState, user: UserRecord, next: Option<&str>) -> String {
    session.establish(user);
    landing_path(next)
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains("://")
}
