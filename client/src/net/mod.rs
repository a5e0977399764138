//! Networking modules for the banking REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns request construction (base URL, bearer credential, timeout,
//! 401 policy); `auth` and `bank` are the typed operation surfaces built on
//! it; `types` defines the wire schema validated at the API boundary.

pub mod auth;
pub mod bank;
pub mod error;
pub mod gateway;
pub mod types;
