//! JSON decoding for catalog responses.
//!
//! Decoding is lenient about extra data: fields the catalog adds that the
//! DTOs do not declare are ignored.

mod json;

pub use json::*;
