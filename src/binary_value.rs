use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use bytes::Bytes;

use crate::datauri;
use crate::error::{Error, Result};
use crate::primitive_type::PrimitiveType;

/// Binary data such as images, documents or sounds, optionally labelled with
/// a media type.
///
/// This is meant for fixed-size data only, it is not suitable for streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryValue {
    content: Bytes,
    media_type: Option<String>,
}

impl BinaryValue {
    pub fn new(content: impl Into<Bytes>, media_type: impl Into<Option<String>>) -> Self {
        Self {
            content: content.into(),
            media_type: media_type.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a `data:<media type>;base64,<payload>` string.
    ///
    /// Anything that does not look like a data uri at all yields the empty
    /// value; only an undecodable payload is an error.
    pub fn from_data_uri<'a>(value: impl Into<Option<&'a str>>) -> Result<Self> {
        let (content, media_type) = datauri::parse(value)?;

        Ok(Self {
            content,
            media_type,
        })
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn bytes(&self) -> Bytes {
        self.content.clone()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_parts(self) -> (Bytes, Option<String>) {
        (self.content, self.media_type)
    }

    pub fn to_compact_string(&self) -> String {
        self.to_string()
    }

    pub fn to_data_uri(&self) -> String {
        datauri::render(&self.content, self.media_type())
    }

    /// Always renders the data uri, `pattern` is ignored.
    pub fn format(&self, _pattern: &str) -> String {
        self.to_data_uri()
    }
}

// Only the content takes part in the hash. Values that differ by media type
// alone collide but still compare unequal.
impl Hash for BinaryValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
    }
}

impl Display for BinaryValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "raw type ({}): {} bytes",
            self.media_type().unwrap_or("unknown"),
            self.content.len()
        )
    }
}

impl PrimitiveType for BinaryValue {
    fn format(&self, pattern: &str) -> String {
        BinaryValue::format(self, pattern)
    }

    fn to_full_string(&self) -> String {
        self.to_data_uri()
    }
}

impl FromStr for BinaryValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_data_uri(s)
    }
}

impl From<Bytes> for BinaryValue {
    fn from(value: Bytes) -> Self {
        Self::new(value, None)
    }
}

impl From<Vec<u8>> for BinaryValue {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value, None)
    }
}

impl From<&[u8]> for BinaryValue {
    fn from(value: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(value), None)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BinaryValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_data_uri())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BinaryValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_data_uri(value.as_str()).map_err(serde::de::Error::custom)
    }
}
