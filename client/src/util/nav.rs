//! Full-page navigation helper.
//!
//! Used where a hard reload is wanted (post-login, forced logout) so the
//! light-token cookie is re-evaluated by the server-side route guard instead
//! of being skipped by client-side routing. SSR paths safely no-op.

pub fn redirect_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
