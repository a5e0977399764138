//! Fixed top bar with branding, identity, and sign-out.

use leptos::prelude::*;

use crate::session::SessionStore;
use crate::state::auth::AuthState;

/// Top bar: shows the signed-in identity and a sign-out action.
#[component]
pub fn TopBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();

    let on_logout = move |_| {
        store.clear();
        auth.update(|a| a.user = None);
        crate::util::nav::redirect_to("/login");
    };

    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let role = move || {
        auth.get()
            .user
            .map(|user| user.display_role())
            .unwrap_or_default()
    };

    view! {
        <header class="topbar">
            <a class="topbar__brand" href="/dashboard">
                <span class="topbar__logo">"TB"</span>
                <span class="topbar__name">"Talachi Bank"</span>
            </a>

            <span class="topbar__spacer"></span>

            <Show when=move || auth.get().is_authenticated()>
                <div class="topbar__identity">
                    <span class="topbar__username">{username}</span>
                    <span class="topbar__role">{role}</span>
                </div>
                <button class="topbar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}
