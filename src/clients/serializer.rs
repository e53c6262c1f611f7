//! Body encoding and response decoding.
//!
//! The [`Serializer`] trait is the swappable codec seam; [`JsonSerializer`]
//! is the default implementation on top of `serde_json`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::SerializerError;

/// Converts between typed values and byte payloads.
pub trait Serializer: Send + Sync {
    /// Encodes a value into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SerializerError::Encoding`] if the value cannot be represented.
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializerError>;

    /// Decodes bytes into a value of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializerError::Decoding`] for malformed input, for input
    /// that does not match the shape of `T`, and for an empty byte slice.
    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializerError>;
}

/// JSON [`Serializer`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializerError> {
        serde_json::to_vec(value).map_err(|e| SerializerError::Encoding(Box::new(e)))
    }

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializerError> {
        serde_json::from_slice(bytes).map_err(|e| SerializerError::Decoding(Box::new(e)))
    }
}
