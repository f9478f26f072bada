//! Business logic for the marketing site.
//!
//! This crate owns everything between the web surface and the outside
//! world: the savings arithmetic behind the calculator page, checkout
//! session orchestration against the payment provider, trial-signup and
//! guide-request capture, and the HTTP gateway clients those features
//! talk through. The `web` crate depends on this crate but never on the
//! HTTP client underneath it.

pub mod checkout;
pub mod error;
pub mod pricing;
pub mod signup;

pub mod gateway;
