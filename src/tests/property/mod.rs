//! Property-based tests for FinanceAI
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `aggregate_props`: total balance and flagged count
//!   - Total equals the arithmetic sum, zero when empty
//!   - Only `Some(true)` counts as flagged
//!   - Credits and debits partition the transaction amounts
//!
//! - `money_props`: dollar formatting
//!   - Grouped and fixed renderings agree once commas are removed
//!   - Always exactly two decimals
//!
//! - `advisor_props`: conversation state machine and reply selection
//!   - Blank submissions never grow the log
//!   - Accepted submissions append exactly one user message
//!   - At most one request outstanding
//!   - Picked replies always come from the configured set
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod advisor_props;
mod aggregate_props;
mod money_props;
