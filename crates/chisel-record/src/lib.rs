//! Plain records for the chisel toolkit.
//!
//! - [`Rectangle`] - a width/height value with a computed area
//! - [`encode_record`] - serialize a record to JSON text
//! - [`decode_record`] - rebuild a record from JSON text by positional fields

/// Encoding and positional decoding of records.
pub mod codec;
/// Record errors.
pub mod error;
/// The rectangle value type.
pub mod rectangle;

pub use codec::{FromFields, decode_record, encode_record, field};
pub use error::RecordError;
pub use rectangle::{Rectangle, make_rectangle};
