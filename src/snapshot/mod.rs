//! Bundled pricing snapshot: CSV decoding and the derived option indexes.

pub mod csv;
pub mod catalog;

pub use catalog::SnapshotCatalog;
pub use csv::{decode_offers, decode_offers_at, split_line};
