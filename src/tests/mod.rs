//! Crate-level tests: shared fixtures, property tests and end-to-end flows
//! through the dashboard state.

mod common;
mod integration;
mod property;
