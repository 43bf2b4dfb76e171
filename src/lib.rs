//! bookdb — function-calling dispatch over an in-memory book catalog.
//!
//! A language model picks one of a fixed set of lookup operations and
//! supplies its arguments; this crate validates that tool call against the
//! declared schema and runs it against the catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod executor;
pub mod invoker;
pub mod query;
pub mod report;
pub mod tools;
pub mod types;

pub use catalog::Catalog;
pub use error::DispatchError;
pub use executor::CallExecutor;
