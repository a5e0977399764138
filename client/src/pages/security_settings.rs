//! Security settings: password change and signing-key inventory.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::toast::Toasts;
use crate::components::topbar::TopBar;
use crate::net::bank;
use crate::net::gateway::Gateway;
use crate::net::types::SigningKey;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::validate;

/// Security settings page.
#[component]
pub fn SecuritySettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let keys = RwSignal::new(Vec::<SigningKey>::new());

    // Load the key inventory once for the overview panel.
    let fetched_keys = RwSignal::new(false);
    {
        let gateway = gateway.clone();
        Effect::new(move || {
            if fetched_keys.get() {
                return;
            }
            fetched_keys.set(true);
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match bank::keys(&gateway).await {
                    Ok(inventory) => keys.set(inventory),
                    Err(err) => leptos::logging::warn!("key inventory fetch failed: {err}"),
                }
            });
        });
    }

    let submit = Callback::new(move |_: ()| {
        if busy.get_untracked() {
            return;
        }
        let old_value = old_password.get_untracked();
        let new_value = new_password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        if let Err(message) = validate::check_new_password(&new_value, &confirm_value) {
            toasts.update(|t| {
                t.push_error(message);
            });
            return;
        }

        busy.set(true);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match bank::change_password(&gateway, &old_value, &new_value).await {
                Ok(_) => {
                    toasts.update(|t| {
                        t.push_success("Password updated successfully.");
                    });
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => toasts.update(|t| {
                    t.push_error(err.user_message());
                }),
            }
            busy.set(false);
        });
    });

    view! {
        <div class="page">
            <TopBar/>
            <Sidebar/>
            <Toasts/>
            <main class="page__main">
                <div class="page__heading">
                    <a class="page__back" href="/dashboard">
                        "Back to Dashboard"
                    </a>
                    <h1>"Security Settings"</h1>
                    <p class="page__subtitle">"Manage your account protection and credentials."</p>
                </div>

                <div class="settings">
                    <form
                        class="settings__form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <h2>"Change Password"</h2>
                        <label class="settings__label">
                            "Current Password"
                            <input
                                class="settings__input"
                                type="password"
                                required
                                prop:value=move || old_password.get()
                                on:input=move |ev| old_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="settings__label">
                            "New Password"
                            <input
                                class="settings__input"
                                type="password"
                                required
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="settings__label">
                            "Confirm New Password"
                            <input
                                class="settings__input"
                                type="password"
                                required
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Updating..." } else { "Update Password" }}
                        </button>
                    </form>

                    <aside class="settings__overview">
                        <h3>"Signing Keys"</h3>
                        <Show
                            when=move || !keys.get().is_empty()
                            fallback=move || view! { <p>"No signing keys provisioned."</p> }
                        >
                            <ul class="settings__keys">
                                {move || {
                                    keys.get()
                                        .into_iter()
                                        .map(|key| {
                                            let level = key
                                                .security_level
                                                .unwrap_or_else(|| "unknown level".to_owned());
                                            let usage = key.usage_count.unwrap_or(0);
                                            view! {
                                                <li class="settings__key">
                                                    <span class="settings__key-id">{format!("Key #{}", key.id)}</span>
                                                    <span class="settings__key-level">{level}</span>
                                                    <span class="settings__key-status">{key.status}</span>
                                                    <span class="settings__key-usage">
                                                        {format!("{usage} signatures")}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </aside>
                </div>
            </main>
        </div>
    }
}
