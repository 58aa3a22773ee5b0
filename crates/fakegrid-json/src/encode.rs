use serde_json::{Map, Value};

use crate::error::EncodeError;
use crate::value::{BytesValue, MapKey};

/// How byte sequences that are not valid UTF-8 are handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Non-UTF-8 bytes fail the encoding.
    Strict,
    /// Non-UTF-8 bytes are escaped as `\xNN` text.
    Lenient,
}

/// Convert a byte-carrying tree into a plain `serde_json::Value`,
/// decoding every byte sequence encountered at any depth.
pub fn to_value(value: &BytesValue, mode: Mode) -> Result<Value, EncodeError> {
    match value {
        BytesValue::Null => Ok(Value::Null),
        BytesValue::Bool(b) => Ok(Value::Bool(*b)),
        BytesValue::Number(n) => Ok(Value::Number(n.clone())),
        BytesValue::Text(s) => Ok(Value::String(s.clone())),
        BytesValue::Bytes(b) => Ok(Value::String(decode_bytes(b, mode)?)),
        // Sequences and set-like collections both fold to JSON arrays.
        BytesValue::Seq(items) | BytesValue::Set(items) => items
            .iter()
            .map(|item| to_value(item, mode))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        BytesValue::Map(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, val) in entries {
                let key = match key {
                    MapKey::Text(s) => s.clone(),
                    MapKey::Bytes(b) => decode_bytes(b, mode)?,
                };
                map.insert(key, to_value(val, mode)?);
            }
            Ok(Value::Object(map))
        }
    }
}

/// Encode a byte-carrying tree to JSON text.
pub fn dumps(value: &BytesValue, mode: Mode) -> Result<String, EncodeError> {
    let converted = to_value(value, mode)?;
    Ok(serde_json::to_string(&converted)?)
}

/// Encode to JSON text, then to UTF-8 bytes.
pub fn dumps_bytes(value: &BytesValue, mode: Mode) -> Result<Vec<u8>, EncodeError> {
    dumps(value, mode).map(String::into_bytes)
}

fn decode_bytes(bytes: &[u8], mode: Mode) -> Result<String, EncodeError> {
    match mode {
        Mode::Strict => match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_string()),
            Err(e) => Err(EncodeError::NonUtf8 {
                offset: e.valid_up_to(),
            }),
        },
        Mode::Lenient => Ok(decode_backslashreplace(bytes)),
    }
}

/// Decode UTF-8, replacing each byte of every invalid sequence with a
/// `\xNN` escape.
fn decode_backslashreplace(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(s) => {
                out.push_str(s);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // `valid` is UTF-8 by construction.
                out.push_str(std::str::from_utf8(valid).expect("validated prefix"));
                let bad_len = e.error_len().unwrap_or(rest.len());
                for byte in &rest[..bad_len] {
                    out.push_str(&format!("\\x{byte:02x}"));
                }
                bytes = &rest[bad_len..];
            }
        }
    }
}
