//! Multi-step wire-transfer wizard: create, sign, execute.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard drives three backend calls (create, sign, execute) through the
//! step machine in `state::transfer`. Execution is triggered automatically
//! after a successful signature; a failure in either call regresses to the
//! confirmation step with the prepared transaction intact.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::toast::Toasts;
use crate::components::topbar::TopBar;
use crate::net::bank;
use crate::net::gateway::Gateway;
use crate::net::types::{CreateTransactionRequest, SigningKey, Transaction};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::state::transfer::TransferStep;
use crate::util::format::{currency_symbol, format_amount};
use crate::util::validate;

/// Transaction-signing wizard page.
#[component]
pub fn SignTransactionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let step = RwSignal::new(TransferStep::Form);
    let tx = RwSignal::new(None::<Transaction>);
    let keys = RwSignal::new(Vec::<SigningKey>::new());
    let selected_key = RwSignal::new(None::<i64>);

    // Form state.
    let to_account = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let beneficiary = RwSignal::new(String::new());
    let currency = RwSignal::new("EUR".to_owned());

    // Load the signing-key inventory once; preselect the first key.
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
                    Ok(inventory) => {
                        selected_key.set(inventory.first().map(|key| key.id));
                        keys.set(inventory);
                    }
                    Err(err) => leptos::logging::warn!("key inventory fetch failed: {err}"),
                }
            });
        });
    }

    let handle_create = {
        let gateway = gateway.clone();
        Callback::new(move |_: ()| {
            let amount_value = match validate::parse_amount(&amount.get_untracked()) {
                Ok(value) => value,
                Err(message) => {
                    toasts.update(|t| {
                        t.push_error(message);
                    });
                    return;
                }
            };
            let balance = auth.get_untracked().user.and_then(|user| user.balance);
            if let Err(message) = validate::check_funds(amount_value, balance) {
                toasts.update(|t| {
                    t.push_error(message);
                });
                return;
            }

            let request = CreateTransactionRequest {
                to_account_number: to_account.get_untracked().trim().to_owned(),
                amount: amount_value,
                description: description.get_untracked(),
                beneficiary_name: beneficiary.get_untracked().trim().to_owned(),
                transaction_type: "WIRE_TRANSFER".to_owned(),
                currency: currency.get_untracked(),
            };
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match bank::create_transaction(&gateway, &request).await {
                    Ok(created) => {
                        tx.set(Some(created));
                        step.set(TransferStep::Sign);
                        toasts.update(|t| {
                            t.push_success("Transaction prepared. Ready for SDitH signature.");
                        });
                    }
                    Err(err) => toasts.update(|t| {
                        t.push_error(err.user_message());
                    }),
                }
            });
        })
    };

    let handle_sign = {
        let gateway = gateway.clone();
        Callback::new(move |_: ()| {
            let Some(current) = tx.get_untracked() else {
                return;
            };
            let Some(key_id) = selected_key.get_untracked() else {
                toasts.update(|t| {
                    t.push_error("Select a signing key first.");
                });
                return;
            };

            step.set(TransferStep::Hashing);
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                #[cfg(feature = "hydrate")]
                gloo_timers::future::sleep(std::time::Duration::from_millis(800)).await;
                step.set(TransferStep::Signing);

                let signed = match bank::sign_transaction(&gateway, &current.transaction_id, key_id).await {
                    Ok(signed) => signed,
                    Err(err) => {
                        step.set(step.get_untracked().on_failure());
                        toasts.update(|t| {
                            t.push_error(err.user_message());
                        });
                        return;
                    }
                };
                tx.set(Some(signed));
                toasts.update(|t| {
                    t.push_success("SDitH signature generated.");
                });
                step.set(TransferStep::Executing);

                #[cfg(feature = "hydrate")]
                gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
                match bank::execute_transaction(&gateway, &current.transaction_id).await {
                    Ok(executed) => {
                        tx.set(Some(executed));
                        step.set(TransferStep::Complete);
                        toasts.update(|t| {
                            t.push_success("Transaction executed. Funds transferred.");
                        });
                        // Reflect the moved funds in the cached profile.
                        if let Ok(refresh) = bank::balance(&gateway).await {
                            auth.update(|a| a.apply_balance(&refresh));
                            if let Some(user) = auth.get_untracked().user {
                                gateway.store().update_user(&user);
                            }
                        }
                    }
                    Err(err) => {
                        step.set(step.get_untracked().on_failure());
                        toasts.update(|t| {
                            t.push_error(err.user_message());
                        });
                    }
                }
            });
        })
    };

    view! {
        <div class="page">
            <TopBar/>
            <Sidebar/>
            <Toasts/>
            <main class="page__main">
                <div class="wizard">
                    <div class="wizard__header">
                        <h1>{move || step.get().label()}</h1>
                        <div class="wizard__bar">
                            <div
                                class="wizard__bar-fill"
                                style:width=move || format!("{}%", step.get().progress())
                            ></div>
                        </div>
                    </div>

                    {move || match step.get() {
                        TransferStep::Form => {
                            view! {
                                <form
                                    class="wizard__form"
                                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                                        ev.prevent_default();
                                        handle_create.run(());
                                    }
                                >
                                    <label class="wizard__label">
                                        "Beneficiary Name"
                                        <input
                                            class="wizard__input"
                                            type="text"
                                            required
                                            prop:value=move || beneficiary.get()
                                            on:input=move |ev| beneficiary.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="wizard__label">
                                        "Destination Account"
                                        <input
                                            class="wizard__input"
                                            type="text"
                                            required
                                            placeholder="TAL-0000000000"
                                            prop:value=move || to_account.get()
                                            on:input=move |ev| to_account.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="wizard__label">
                                        "Amount"
                                        <input
                                            class="wizard__input"
                                            type="text"
                                            required
                                            placeholder="0.00"
                                            prop:value=move || amount.get()
                                            on:input=move |ev| amount.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="wizard__label">
                                        "Currency"
                                        <select
                                            class="wizard__input"
                                            on:change=move |ev| currency.set(event_target_value(&ev))
                                        >
                                            <option value="EUR">"EUR"</option>
                                            <option value="USD">"USD"</option>
                                        </select>
                                    </label>
                                    <label class="wizard__label">
                                        "Description"
                                        <input
                                            class="wizard__input"
                                            type="text"
                                            prop:value=move || description.get()
                                            on:input=move |ev| description.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <button class="btn btn--primary" type="submit">
                                        "Prepare Transaction"
                                    </button>
                                </form>
                            }
                                .into_any()
                        }
                        TransferStep::Sign => {
                            let Some(current) = tx.get() else {
                                return view! { <p>"No transaction prepared."</p> }.into_any();
                            };
                            let symbol = currency_symbol(&current.currency).to_owned();
                            view! {
                                <div class="wizard__confirm">
                                    <dl class="wizard__summary">
                                        <dt>"Beneficiary"</dt>
                                        <dd>{current.beneficiary_name.clone()}</dd>
                                        <dt>"Destination"</dt>
                                        <dd>{current.to_account_number.clone()}</dd>
                                        <dt>"Amount"</dt>
                                        <dd>{symbol} {format_amount(current.amount)}</dd>
                                        <dt>"Risk Score"</dt>
                                        <dd>{current.risk_score.unwrap_or(0)}</dd>
                                    </dl>

                                    <label class="wizard__label">
                                        "Signing Key"
                                        <select
                                            class="wizard__input"
                                            on:change=move |ev| {
                                                selected_key.set(event_target_value(&ev).parse::<i64>().ok());
                                            }
                                        >
                                            {move || {
                                                keys.get()
                                                    .into_iter()
                                                    .map(|key| {
                                                        let label = format!(
                                                            "Key #{} ({})",
                                                            key.id,
                                                            key.security_level.unwrap_or_else(|| key.status.clone()),
                                                        );
                                                        view! {
                                                            <option value=key.id.to_string()>{label}</option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            }}
                                        </select>
                                    </label>

                                    <button class="btn btn--primary" on:click=move |_| handle_sign.run(())>
                                        "Generate SDitH Signature"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        TransferStep::Hashing | TransferStep::Signing | TransferStep::Executing => {
                            view! {
                                <div class="wizard__busy">
                                    <div class="spinner"></div>
                                    <p>{move || step.get().label()}</p>
                                </div>
                            }
                                .into_any()
                        }
                        TransferStep::Complete => {
                            let Some(current) = tx.get() else {
                                return view! { <p>"No transaction available."</p> }.into_any();
                            };
                            let symbol = currency_symbol(&current.currency).to_owned();
                            view! {
                                <div class="wizard__receipt">
                                    <h2>"Funds Transferred"</h2>
                                    <dl class="wizard__summary">
                                        <dt>"Transaction"</dt>
                                        <dd class="wizard__tx-id">{current.transaction_id.clone()}</dd>
                                        <dt>"Amount"</dt>
                                        <dd>{symbol} {format_amount(current.amount)}</dd>
                                        <dt>"Status"</dt>
                                        <dd>{current.status.clone()}</dd>
                                        <dt>"Executed"</dt>
                                        <dd>{current.executed_at.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                                    </dl>
                                    <div class="wizard__actions">
                                        <a class="btn" href="/transactions">
                                            "View History"
                                        </a>
                                        <a class="btn btn--primary" href="/dashboard">
                                            "Back to Dashboard"
                                        </a>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </main>
        </div>
    }
}
