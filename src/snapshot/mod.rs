mod loader;

pub use loader::Snapshot;
