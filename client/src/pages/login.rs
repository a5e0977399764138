//! Login page with username/password authentication.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::toast::Toasts;
use crate::net::auth;
use crate::net::gateway::Gateway;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Login page: on success the session is persisted and the browser does a
/// full navigation to the `callbackUrl` target (default `/dashboard`) so the
/// route guard re-evaluates the fresh cookie.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gateway = expect_context::<Gateway>();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |_: ()| {
        if busy.get_untracked() {
            return;
        }
        let username_value = username.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.is_empty() {
            toasts.update(|t| {
                t.push_error("Enter both username and password.");
            });
            return;
        }

        busy.set(true);
        let target = query
            .get_untracked()
            .get("callbackUrl")
            .unwrap_or_else(|| "/dashboard".to_owned());
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let request = LoginRequest { username: username_value, password: password_value };
            match auth::login(&gateway, &request).await {
                Ok(response) => {
                    auth_state.update(|a| {
                        a.user = Some(response.user());
                        a.loading = false;
                    });
                    crate::util::nav::redirect_to(&target);
                }
                Err(err) => {
                    busy.set(false);
                    toasts.update(|t| {
                        t.push_error(err.user_message());
                    });
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <Toasts/>
            <div class="auth-card">
                <span class="auth-card__logo">"TB"</span>
                <h1>"Talachi Bank"</h1>
                <p class="auth-card__subtitle">"Post-Quantum Secure Access"</p>

                <form
                    class="auth-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
