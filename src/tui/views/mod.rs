pub mod advisor;
pub mod overview;
pub mod spending;
pub mod transactions;
