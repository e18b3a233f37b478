//! Login page storing the operator's API token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Minimal token entry — the token lands in `localStorage` and every
/// subsequent request carries it as a `Bearer` header.
#[component]
pub fn LoginPage() -> impl IntoView {
    let token = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |_| {
        let value = token.get();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        crate::util::auth_token::store(value);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <h1>"Mailboard"</h1>
            <p>"Email campaign administration"</p>
            <label class="login-page__label">
                "API token"
                <input
                    type="password"
                    prop:value=move || token.get()
                    on:input=move |ev| token.set(event_target_value(&ev))
                />
            </label>
            <button class="login-button" on:click=on_submit>
                "Sign in"
            </button>
        </div>
    }
}
