//! Dashboard balance card.

use leptos::prelude::*;

use crate::util::format::format_amount;

/// Placeholder shown until the first balance refresh lands.
const PLACEHOLDER_ACCOUNT: &str = "TAL-0000000000";

/// Balance card: headline balance plus account number.
#[component]
pub fn BalanceCard(balance: Option<f64>, account_number: Option<String>) -> impl IntoView {
    let headline = format_amount(balance.unwrap_or(0.0));
    let account = account_number.unwrap_or_else(|| PLACEHOLDER_ACCOUNT.to_owned());

    view! {
        <div class="balance-card">
            <p class="balance-card__label">"Main Savings Account"</p>
            <p class="balance-card__amount">"€" {headline} <span class="balance-card__currency">"EUR"</span></p>
            <div class="balance-card__meta">
                <div>
                    <p class="balance-card__meta-label">"Account Number"</p>
                    <p class="balance-card__account">{account}</p>
                </div>
                <span class="balance-card__badge">"Post-Quantum Protected"</span>
            </div>
        </div>
    }
}
