/// FinanceAI - Smart Banking (TUI Edition)
///
/// Core library providing the static account ledger, spending aggregates,
/// the simulated financial advisor, and the terminal dashboard.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
