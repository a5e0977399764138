//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::gateway::Gateway;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, recharge::RechargePage,
    register::RegisterPage, security_settings::SecuritySettingsPage,
    sign_transaction::SignTransactionPage, transactions::TransactionsPage,
    verify_transaction::VerifyTransactionPage,
};
use crate::session::SessionStore;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, the configured gateway, and shared state
/// contexts, then sets up client-side routing. The store is created at
/// this composition root and injected into the gateway rather than reached
/// for globally.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore;
    let gateway = Gateway::new(store);
    provide_context(store);
    provide_context(gateway);

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    // Hydrate auth state from the session store once, client-side.
    let restored = RwSignal::new(false);
    Effect::new(move || {
        if restored.get() {
            return;
        }
        restored.set(true);
        let user = store.user();
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/talachi-bank.css"/>
        <Title text="Talachi Bank"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("transactions") view=TransactionsPage/>
                <Route path=StaticSegment("sign-transaction") view=SignTransactionPage/>
                <Route path=StaticSegment("verify-transaction") view=VerifyTransactionPage/>
                <Route
                    path=(StaticSegment("account"), StaticSegment("recharge"))
                    view=RechargePage
                />
                <Route
                    path=(StaticSegment("settings"), StaticSegment("security"))
                    view=SecuritySettingsPage
                />
            </Routes>
        </Router>
    }
}
