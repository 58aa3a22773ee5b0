use serde_json::Number;

/// A JSON-shaped value that can hold raw byte sequences anywhere a string
/// could appear.
///
/// This is the encoder's input tree. It mirrors `serde_json::Value` with
/// two additions: a [`BytesValue::Bytes`] leaf, and a [`BytesValue::Set`]
/// variant for set-like collections, which encode as JSON arrays.
#[derive(Clone, Debug, PartialEq)]
pub enum BytesValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Bytes(Vec<u8>),
    Seq(Vec<BytesValue>),
    /// A set-like collection. Encoded as a JSON array, elements converted
    /// like any sequence.
    Set(Vec<BytesValue>),
    /// Ordered key-value pairs. Keys may be text or bytes.
    Map(Vec<(MapKey, BytesValue)>),
}

/// A mapping key: JSON object keys must be strings, so byte keys are
/// decoded during encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapKey {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<bool> for BytesValue {
    fn from(v: bool) -> Self {
        BytesValue::Bool(v)
    }
}

impl From<i64> for BytesValue {
    fn from(v: i64) -> Self {
        BytesValue::Number(Number::from(v))
    }
}

impl From<u64> for BytesValue {
    fn from(v: u64) -> Self {
        BytesValue::Number(Number::from(v))
    }
}

impl From<&str> for BytesValue {
    fn from(v: &str) -> Self {
        BytesValue::Text(v.to_string())
    }
}

impl From<String> for BytesValue {
    fn from(v: String) -> Self {
        BytesValue::Text(v)
    }
}

impl From<&[u8]> for BytesValue {
    fn from(v: &[u8]) -> Self {
        BytesValue::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for BytesValue {
    fn from(v: Vec<u8>) -> Self {
        BytesValue::Bytes(v)
    }
}

impl From<&str> for MapKey {
    fn from(v: &str) -> Self {
        MapKey::Text(v.to_string())
    }
}

impl From<&[u8]> for MapKey {
    fn from(v: &[u8]) -> Self {
        MapKey::Bytes(v.to_vec())
    }
}
