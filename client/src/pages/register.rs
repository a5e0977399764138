//! Registration page.

use leptos::prelude::*;

use crate::components::toast::Toasts;
use crate::net::auth;
use crate::net::gateway::Gateway;
use crate::net::types::SignupRequest;
use crate::state::toast::ToastState;
use crate::util::validate;

/// Registration page: validates locally, registers, then sends the user to
/// the login page. Registration never signs the new account in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gateway = expect_context::<Gateway>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |_: ()| {
        if busy.get_untracked() {
            return;
        }
        let username_value = username.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        if let Err(message) =
            validate::check_signup(&username_value, &email_value, &password_value, &confirm_value)
        {
            toasts.update(|t| {
                t.push_error(message);
            });
            return;
        }

        busy.set(true);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let request = SignupRequest {
                username: username_value,
                email: email_value,
                password: password_value,
            };
            match auth::register(&gateway, &request).await {
                Ok(ack) => {
                    toasts.update(|t| {
                        t.push_success(ack.message);
                    });
                    crate::util::nav::redirect_to("/login");
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
                <h1>"Open an Account"</h1>
                <p class="auth-card__subtitle">"A signing key pair is provisioned on registration"</p>

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
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
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
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already a customer? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
