//! Storage layer for the Sunrise intake service
//!
//! In-memory, append-only tables of accepted submissions:
//! - Table: one sharded table per entity kind
//! - SubmissionStore: the three tables, built once and shared by handle
//!
//! Nothing is written to disk.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;
pub mod table;

pub use store::{StoreOptions, StoredIn, SubmissionStore};
pub use table::Table;
