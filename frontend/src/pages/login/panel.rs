use crate::{
    api::UserRecord,
    pages::login::{components::form::LoginForm, utils},
    state::app::use_app_context,
};
use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, use_query_map};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    let query = use_query_map();
    let navigate = use_navigate();

    let on_authenticated = Callback::new(move |user: UserRecord| {
        let next = query.with_untracked(|params| params.get("next").cloned());
        let target = utils::complete_login(session, user, next.as_deref());
        navigate(&target, Default::default());
    });

    view! {
        <Title text=format!("Ingresar | {}", ctx.store_name) />
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {ctx.store_name}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {"Ingresa con tu cuenta"}
                    </p>
                </div>
                <LoginForm auth=ctx.auth.clone() on_authenticated=on_authenticated />
            </div>
        </div>
    }
}
