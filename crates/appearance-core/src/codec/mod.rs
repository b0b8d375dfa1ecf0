//! Codec module: the byte-level encoding of the settings record.

pub mod json;

pub use json::{decode_record, encode_record, CodecError};
