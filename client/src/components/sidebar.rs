//! Fixed navigation sidebar for the authenticated area.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

/// Section links, in display order.
const NAVIGATION: [(&str, &str); 6] = [
    ("Dashboard", "/dashboard"),
    ("New Transaction", "/sign-transaction"),
    ("Transaction History", "/transactions"),
    ("Recharge Balance", "/account/recharge"),
    ("Verify Transaction", "/verify-transaction"),
    ("Security Settings", "/settings/security"),
];

/// Sidebar: section navigation with the active route highlighted and a
/// compact identity footer.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let initials = move || {
        auth.get()
            .user
            .map(|user| user.username.chars().take(2).collect::<String>().to_uppercase())
            .unwrap_or_default()
    };
    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    view! {
        <nav class="sidebar">
            <ul class="sidebar__nav">
                {NAVIGATION
                    .into_iter()
                    .map(|(name, href)| {
                        view! {
                            <li>
                                <a
                                    href=href
                                    class="sidebar__link"
                                    class=("sidebar__link--active", move || pathname.get() == href)
                                >
                                    {name}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <Show when=move || auth.get().is_authenticated()>
                <div class="sidebar__footer">
                    <span class="sidebar__avatar">{initials}</span>
                    <span class="sidebar__username">{username}</span>
                </div>
            </Show>
        </nav>
    }
}
