//! CSV input and output for member tables.
//!
//! Columns: `id,name,active,subscription_end`, with RFC 3339 timestamps.

pub mod member_reader;
pub mod member_writer;
