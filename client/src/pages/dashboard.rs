//! Dashboard page with balance and recent activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it fetches the
//! transaction history and refreshes the balance, two independent requests
//! with no ordering between them.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::balance_card::BalanceCard;
use crate::components::recent_transactions::RecentTransactions;
use crate::components::sidebar::Sidebar;
use crate::components::toast::Toasts;
use crate::components::topbar::TopBar;
use crate::net::bank;
use crate::net::gateway::Gateway;
use crate::net::types::Transaction;
use crate::state::auth::AuthState;

/// Dashboard page: balance card, recent transactions, quick actions.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(true);

    let fetched = RwSignal::new(false);
    {
        let gateway = gateway.clone();
        Effect::new(move || {
            if fetched.get() {
                return;
            }
            fetched.set(true);

            let list_gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match bank::transactions(&list_gateway).await {
                    Ok(items) => transactions.set(items),
                    Err(err) => leptos::logging::warn!("transactions fetch failed: {err}"),
                }
                loading.set(false);
            });

            let balance_gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match bank::balance(&balance_gateway).await {
                    Ok(refresh) => {
                        auth.update(|a| a.apply_balance(&refresh));
                        if let Some(user) = auth.get_untracked().user {
                            balance_gateway.store().update_user(&user);
                        }
                    }
                    Err(err) => leptos::logging::warn!("balance refresh failed: {err}"),
                }
            });
        });
    }

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="page">
                <TopBar/>
                <Sidebar/>
                <Toasts/>
                <main class="page__main">
                    <div class="page__heading">
                        <h1>"Dashboard"</h1>
                        <a class="btn btn--primary" href="/sign-transaction">
                            "New Wire Transfer"
                        </a>
                    </div>

                    {move || {
                        let user = auth.get().user;
                        view! {
                            <BalanceCard
                                balance=user.as_ref().and_then(|u| u.balance)
                                account_number=user.and_then(|u| u.account_number)
                            />
                        }
                    }}

                    {move || {
                        view! {
                            <RecentTransactions transactions=transactions.get() loading=loading.get()/>
                        }
                    }}

                    <div class="quick-actions">
                        <h3>"Quick Actions"</h3>
                        <a class="quick-actions__item" href="/sign-transaction">
                            "New Transaction"
                        </a>
                        <a class="quick-actions__item" href="/verify-transaction">
                            "Verify Signature"
                        </a>
                        <a class="quick-actions__item" href="/account/recharge">
                            "Recharge Balance"
                        </a>
                    </div>
                </main>
            </div>
        </Show>
    }
}
