use crate::pages::login::view_model::LoginStatus;
use leptos::*;

#[component]
pub fn ErrorAlert(#[prop(into)] status: Signal<LoginStatus>) -> impl IntoView {
    view! {
        <Show when=move || status.with(LoginStatus::is_error) fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded"
            >
                {move || status.with(|s| s.message().unwrap_or_default().to_string())}
            </div>
        </Show>
    }
}
