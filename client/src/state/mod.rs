//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`, `transfer`) so individual
//! components can depend on small focused models. Each is held in an
//! `RwSignal` provided via context at the composition root.

pub mod auth;
pub mod toast;
pub mod transfer;
