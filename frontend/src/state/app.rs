use super::{
    auth::{AccountDirectory, AuthHandle},
    session::SessionState,
};
use leptos::*;

pub const STORE_NAME: &str = "Tienda";

/// Everything the app root shares with pages. Components take only the
/// pieces they need as props.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub auth: AuthHandle,
    pub session: SessionState,
    pub store_name: &'static str,
}

impl AppContext {
    pub fn new(auth: AuthHandle) -> Self {
        Self {
            auth,
            session: SessionState::new(),
            store_name: STORE_NAME,
        }
    }
}

pub fn provide_app_context(auth: AuthHandle) -> AppContext {
    let ctx = AppContext::new(auth);
    provide_context(ctx.clone());
    ctx
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| {
        provide_app_context(AuthHandle::new(AccountDirectory::with_demo_accounts()))
    })
}
