use crate::{router::LOGIN_PATH, state::app::use_app_context};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    let current_user = session.current_user;

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        {ctx.store_name}
                    </h1>
                    {move || match current_user.get() {
                        Some(user) => view! {
                            <div class="mt-5 space-y-4">
                                <p class="text-base text-fg-muted sm:text-lg">
                                    {format!("Hola, {}", user.name)}
                                </p>
                                <button
                                    type="button"
                                    class="px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                                    on:click=move |_| session.clear()
                                >
                                    {"Cerrar sesión"}
                                </button>
                            </div>
                        }
                        .into_view(),
                        None => view! {
                            <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                                <div class="rounded-md shadow">
                                    <a
                                        href=LOGIN_PATH
                                        class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover lg:py-4 lg:text-lg lg:px-10"
                                    >
                                        {"Ingresar"}
                                    </a>
                                </div>
                            </div>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}
