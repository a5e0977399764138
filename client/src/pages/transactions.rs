//! Transaction history page with client-side search and status filtering.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::recent_transactions::transaction_row;
use crate::components::sidebar::Sidebar;
use crate::components::toast::Toasts;
use crate::components::topbar::TopBar;
use crate::net::bank;
use crate::net::gateway::Gateway;
use crate::net::types::Transaction;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Statuses offered by the filter dropdown. `ALL` disables the filter.
const STATUS_FILTERS: [&str; 5] = ["ALL", "PENDING", "SIGNED", "EXECUTED", "REJECTED"];

/// Apply the search box and status dropdown to the fetched history.
///
/// Search matches id, beneficiary, or destination account,
/// case-insensitively; an empty search matches everything.
pub(crate) fn filter_transactions(items: &[Transaction], search: &str, status: &str) -> Vec<Transaction> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|tx| {
            let matches_search = needle.is_empty()
                || tx.transaction_id.to_lowercase().contains(&needle)
                || tx.beneficiary_name.to_lowercase().contains(&needle)
                || tx.to_account_number.to_lowercase().contains(&needle);
            let matches_status = status == "ALL" || tx.status == status;
            matches_search && matches_status
        })
        .cloned()
        .collect()
}

/// Transaction history page.
#[component]
pub fn TransactionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let items = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new("ALL".to_owned());

    let fetched = RwSignal::new(false);
    {
        let gateway = gateway.clone();
        Effect::new(move || {
            if fetched.get() {
                return;
            }
            fetched.set(true);
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match bank::transactions(&gateway).await {
                    Ok(history) => items.set(history),
                    Err(err) => toasts.update(|t| {
                        t.push_error(err.user_message());
                    }),
                }
                loading.set(false);
            });
        });
    }

    let visible = move || filter_transactions(&items.get(), &search.get(), &status.get());

    view! {
        <div class="page">
            <TopBar/>
            <Sidebar/>
            <Toasts/>
            <main class="page__main">
                <div class="page__heading">
                    <h1>"Transaction History"</h1>
                </div>

                <div class="tx-filters">
                    <input
                        class="tx-filters__search"
                        type="text"
                        placeholder="Search ID, Account..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="tx-filters__status"
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {STATUS_FILTERS
                            .into_iter()
                            .map(|option| view! { <option value=option>{option}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p class="tx-panel__loading">"Loading transactions..."</p> }
                >
                    <table class="tx-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Type"</th>
                                <th>"Beneficiary"</th>
                                <th>"Amount"</th>
                                <th>"Status"</th>
                                <th>"Risk"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible().iter().map(transaction_row).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </Show>
            </main>
        </div>
    }
}
