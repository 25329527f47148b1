//! Content access layer for the marketing site API.
//! - `store`: schemaless document store abstraction and its backends.
//! - `content`: list, inquiry and seeding use cases on top of a store.
//! - `diagnostics`: store health probe that never fails.

pub mod errors;
pub mod store;
pub mod content;
pub mod diagnostics;
#[cfg(test)]
pub mod test_support;

pub use content::service::ContentService;
pub use store::{open_store, Document, DocumentStore, Filter};
