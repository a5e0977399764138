//! Signature-verification page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::toast::Toasts;
use crate::components::topbar::TopBar;
use crate::net::bank;
use crate::net::gateway::Gateway;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Outcome of the last lookup: the queried id and the backend's verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Verdict {
    tx_id: String,
    valid: bool,
}

/// Verify-transaction page: look a transaction up by id and render whether
/// its signature still validates.
#[component]
pub fn VerifyTransactionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let tx_id = RwSignal::new(String::new());
    let verifying = RwSignal::new(false);
    let verdict = RwSignal::new(None::<Verdict>);

    let submit = Callback::new(move |_: ()| {
        let id = tx_id.get_untracked().trim().to_owned();
        if id.is_empty() || verifying.get_untracked() {
            return;
        }
        verifying.set(true);
        verdict.set(None);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match bank::verify_transaction(&gateway, &id).await {
                Ok(valid) => {
                    if valid {
                        toasts.update(|t| {
                            t.push_success("Post-quantum signature verified.");
                        });
                    } else {
                        toasts.update(|t| {
                            t.push_error("Invalid signature detected.");
                        });
                    }
                    verdict.set(Some(Verdict { tx_id: id, valid }));
                }
                Err(err) => toasts.update(|t| {
                    t.push_error(err.user_message());
                }),
            }
            verifying.set(false);
        });
    });

    view! {
        <div class="page">
            <TopBar/>
            <Sidebar/>
            <Toasts/>
            <main class="page__main">
                <div class="page__heading">
                    <h1>"Signature Verification"</h1>
                    <p class="page__subtitle">
                        "Validate the authenticity of any transaction using its post-quantum signature."
                    </p>
                </div>

                <form
                    class="verify-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <input
                        class="verify-form__input"
                        type="text"
                        placeholder="Enter Full Transaction UUID..."
                        prop:value=move || tx_id.get()
                        on:input=move |ev| tx_id.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || verifying.get() || tx_id.get().trim().is_empty()
                    >
                        {move || if verifying.get() { "Verifying..." } else { "Verify Transaction" }}
                    </button>
                </form>

                {move || {
                    verdict
                        .get()
                        .map(|result| {
                            let class = if result.valid {
                                "verify-result verify-result--valid"
                            } else {
                                "verify-result verify-result--invalid"
                            };
                            let headline = if result.valid {
                                "Signature Authenticated"
                            } else {
                                "Verification Failed"
                            };
                            let detail = if result.valid {
                                "The transaction signature was validated against the bank's post-quantum identity provider."
                            } else {
                                "The signature does not match the transaction data or has been tampered with. Do not proceed with this transaction."
                            };
                            view! {
                                <div class=class>
                                    <h2>{headline}</h2>
                                    <p class="verify-result__tx-id">{result.tx_id}</p>
                                    <p>{detail}</p>
                                </div>
                            }
                        })
                }}
            </main>
        </div>
    }
}
