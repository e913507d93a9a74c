mod api;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
mod test_support;
pub mod utils;

pub use api::{AccountRecord, UserRecord};
pub use pages::login::components::form::LoginForm;
pub use state::auth::{AccountDirectory, AuthHandle, Authenticator};

use std::rc::Rc;

#[cfg_attr(not(test), wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("Starting Tienda frontend (wasm)");

    let directory = Rc::new(AccountDirectory::with_demo_accounts());
    log::debug!("{} bundled demo accounts", directory.len());
    let loader = Rc::clone(&directory);
    leptos::spawn_local(async move {
        let url = config::await_accounts_url().await;
        match api::AccountsClient::new().load_into(&url, &loader).await {
            Ok(count) => log::info!("Loaded {} accounts from {}", count, url),
            Err(err) => log::warn!("Keeping bundled demo accounts: {}", err),
        }
        if loader.is_empty() {
            log::warn!("Account directory is empty; every login will be rejected");
        }
    });

    router::mount_app(AuthHandle::from(directory));
}
