//! Target-independent core of the enrollment administration front-end.
//!
//! Everything that decides *what* the UI shows lives here: the wire models,
//! form drafts and their validation, the REST route table, the `Api` seam the
//! browser client implements, the store of mirrored collections, and the
//! sync layer that sequences a mutation with its cascade of reloads.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod model;
pub mod requests;
pub mod store;
pub mod sync;
