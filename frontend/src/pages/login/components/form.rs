use crate::{
    api::UserRecord,
    pages::login::{
        components::messages::ErrorAlert,
        view_model::{use_login_view_model, LoginViewModel},
    },
    state::auth::AuthHandle,
};
use leptos::{ev::SubmitEvent, *};

/// Credential form. The authenticator is injected; a successful login is
/// reported through `on_authenticated` and nothing else.
#[component]
pub fn LoginForm(
    auth: AuthHandle,
    #[prop(optional)] on_authenticated: Option<Callback<UserRecord>>,
) -> impl IntoView {
    let vm = use_login_view_model(auth, on_authenticated);
    view! { <LoginFormFields vm=vm /> }
}

#[component]
pub fn LoginFormFields(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;
    let status = vm.status;

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="mt-8 space-y-6" novalidate on:submit=handle_submit>
            <div class="space-y-4">
                <div>
                    <label for="email" class="block text-sm font-medium text-fg">
                        {"Email"}
                    </label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                        placeholder="nombre@correo.cl"
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.on_email_change(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-fg">
                        {"Contraseña"}
                    </label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                        prop:value=move || form.password.get()
                        on:input=move |ev| form.on_password_change(event_target_value(&ev))
                    />
                </div>
            </div>

            <ErrorAlert status=status />

            <div>
                <button
                    type="submit"
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus"
                >
                    {"Ingresar"}
                </button>
            </div>
        </form>
    }
}
