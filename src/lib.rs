pub mod models;
pub mod reports;
pub mod snapshot;
pub mod types;

pub use models::Transaction;
pub use reports::Report;
pub use snapshot::Snapshot;
