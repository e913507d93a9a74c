use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    pages::{home::HomePage, login::LoginPage},
    state::{app::provide_app_context, auth::AuthHandle},
};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, LOGIN_PATH];

pub fn mount_app(auth: AuthHandle) {
    mount_to_body(move || app_root(auth));
}

pub fn app_root(auth: AuthHandle) -> impl IntoView {
    provide_meta_context();
    provide_app_context(auth);
    view! {
        <Router>
            <Routes>
                <Route path=HOME_PATH view=HomePage/>
                <Route path=LOGIN_PATH view=LoginPage/>
            </Routes>
        </Router>
    }
}
