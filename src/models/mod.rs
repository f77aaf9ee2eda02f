mod errors;
mod transaction;

pub use errors::RecordError;
pub use transaction::Transaction;
