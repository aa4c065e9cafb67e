//! Output serialization.
//!
//! The scraper's only product is one JSON array written to stdout. See
//! [`json`] for the serializer that guarantees a valid array on every path.

pub mod json;
