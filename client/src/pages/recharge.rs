//! Balance-recharge page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::toast::Toasts;
use crate::components::topbar::TopBar;
use crate::net::bank;
use crate::net::gateway::Gateway;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::format_amount;
use crate::util::validate;

/// Recharge page: adds funds and folds the returned balance into the
/// cached profile.
#[component]
pub fn RechargePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let amount = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |_: ()| {
        if busy.get_untracked() {
            return;
        }
        let amount_value = match validate::parse_amount(&amount.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                toasts.update(|t| {
                    t.push_error(message);
                });
                return;
            }
        };

        busy.set(true);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match bank::recharge(&gateway, amount_value).await {
                Ok(response) => {
                    auth.update(|a| {
                        if let Some(user) = &mut a.user {
                            user.balance = Some(response.balance);
                        }
                    });
                    if let Some(user) = auth.get_untracked().user {
                        gateway.store().update_user(&user);
                    }
                    toasts.update(|t| {
                        t.push_success(format!("Recharged €{}.", format_amount(amount_value)));
                    });
                    amount.set(String::new());
                }
                Err(err) => toasts.update(|t| {
                    t.push_error(err.user_message());
                }),
            }
            busy.set(false);
        });
    });

    let current_balance = move || {
        auth.get()
            .user
            .and_then(|user| user.balance)
            .map(format_amount)
            .unwrap_or_else(|| "0.00".to_owned())
    };
    let account_number = move || {
        auth.get()
            .user
            .and_then(|user| user.account_number)
            .unwrap_or_else(|| "-".to_owned())
    };

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
                    <h1>"Account Recharge"</h1>
                    <p class="page__subtitle">"Add funds to your Talachi Bank account."</p>
                </div>

                <div class="recharge">
                    <form
                        class="recharge__form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <label class="recharge__label">
                            "Amount to Recharge (EUR)"
                            <input
                                class="recharge__input"
                                type="text"
                                placeholder="0.00"
                                prop:value=move || amount.get()
                                on:input=move |ev| amount.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Processing..." } else { "Confirm Deposit" }}
                        </button>
                    </form>

                    <aside class="recharge__summary">
                        <h3>"Account Summary"</h3>
                        <p class="recharge__balance-label">"Current Balance"</p>
                        <p class="recharge__balance">"€" {current_balance}</p>
                        <p class="recharge__account-label">"Account Number"</p>
                        <p class="recharge__account">{account_number}</p>
                    </aside>
                </div>
            </main>
        </div>
    }
}
