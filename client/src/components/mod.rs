//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the banking chrome (top bar, sidebar, toasts) and the
//! dashboard surfaces while reading shared state from Leptos context
//! providers.

pub mod balance_card;
pub mod recent_transactions;
pub mod sidebar;
pub mod toast;
pub mod topbar;
