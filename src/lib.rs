//! Immutable binary payloads tagged with an optional media type, with
//! conversion to and from `data:` URIs.

pub mod binary_value;
pub mod datauri;
pub mod error;
pub mod primitive_type;

pub use binary_value::BinaryValue;
pub use error::{Error, Result};
pub use primitive_type::PrimitiveType;
