pub mod advisor;
pub mod aggregate;
pub mod ledger;
pub mod logging;
pub mod money;
