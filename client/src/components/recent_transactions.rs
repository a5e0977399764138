//! Recent-transactions table for the dashboard.

#[cfg(test)]
#[path = "recent_transactions_test.rs"]
mod recent_transactions_test;

use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::util::format::{currency_symbol, format_amount, short_id};

/// CSS modifier for a transaction lifecycle status badge.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "SIGNED" => "status-badge status-badge--signed",
        "PENDING" => "status-badge status-badge--pending",
        "EXECUTED" => "status-badge status-badge--executed",
        "REJECTED" | "FAILED" => "status-badge status-badge--rejected",
        _ => "status-badge",
    }
}

/// One table row for a transaction.
pub(crate) fn transaction_row(tx: &Transaction) -> impl IntoView + use<> {
    let symbol = currency_symbol(&tx.currency).to_owned();
    view! {
        <tr>
            <td class="tx-table__id">{short_id(&tx.transaction_id)}</td>
            <td>{tx.transaction_type.clone()}</td>
            <td>
                {tx.beneficiary_name.clone()}
                <span class="tx-table__account">{tx.to_account_number.clone()}</span>
            </td>
            <td class="tx-table__amount">{symbol} {format_amount(tx.amount)}</td>
            <td>
                <span class=status_class(&tx.status)>{tx.status.clone()}</span>
            </td>
            <td class="tx-table__risk">{tx.risk_score.unwrap_or(0)}</td>
        </tr>
    }
}

/// Recent-transactions table with loading and empty states.
#[component]
pub fn RecentTransactions(transactions: Vec<Transaction>, loading: bool) -> impl IntoView {
    view! {
        <div class="tx-panel">
            <div class="tx-panel__header">
                <h3>"Recent Transactions"</h3>
                <a href="/transactions" class="tx-panel__view-all">
                    "View all"
                </a>
            </div>
            {if loading {
                view! { <p class="tx-panel__loading">"Loading transactions..."</p> }.into_any()
            } else if transactions.is_empty() {
                view! {
                    <div class="tx-panel__empty">
                        <h4>"No Transactions Yet"</h4>
                        <p>"Your recent activity will appear here once you start making transfers."</p>
                        <a href="/sign-transaction">"Create your first transaction"</a>
                    </div>
                }
                    .into_any()
            } else {
                view! {
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
                            {transactions.iter().map(transaction_row).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </div>
    }
}
