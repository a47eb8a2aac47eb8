pub mod commands;
pub mod store;

pub use store::ResultsStore;
