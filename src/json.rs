//! This module exports the JSON helpers used to encode parameters and decode Bot API responses.

use serde::de::DeserializeOwned;

pub use serde_json::json;
pub use serde_json::Error as JsonError;

use crate::error::DecodeError;
use crate::internal::prelude::*;

/// The envelope every successful Bot API response is wrapped in.
///
/// Only `result` is of interest on success; transports report `ok: false` replies as errors
/// before decoding gets a chance to run.
#[derive(Deserialize)]
struct Envelope<T> {
    result: T,
}

/// Decodes the `result` of a response envelope, wrapping any failure in a [`DecodeError`] that
/// names the Bot API method.
pub(crate) fn decode_result<T>(method: &'static str, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.result)
        .map_err(|e| Error::Decode(DecodeError::new(method, e)))
}

#[cfg(test)]
pub(crate) fn from_value<T>(v: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(v)?)
}

#[cfg(test)]
pub(crate) fn to_value<T>(value: T) -> Result<Value>
where
    T: serde::Serialize,
{
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
#[track_caller]
pub(crate) fn assert_json<T>(data: &T, json: Value)
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    // test serialization
    let serialized = to_value(data).unwrap();
    assert!(
        serialized == json,
        "data->JSON serialization failed\nexpected: {json:?}\n     got: {serialized:?}"
    );

    // test deserialization
    let deserialized = from_value::<T>(json).unwrap();
    assert!(
        &deserialized == data,
        "JSON->data deserialization failed\nexpected: {data:?}\n     got: {deserialized:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::{decode_result, json};
    use crate::error::Error;

    #[test]
    fn decodes_the_result_field() {
        let body = json!({"ok": true, "result": ["a", "b"]}).to_string();

        let decoded: Vec<String> = decode_result("getThings", body.as_bytes()).unwrap();
        assert_eq!(decoded, ["a", "b"]);
    }

    #[test]
    fn wraps_malformed_bodies() {
        let err = decode_result::<bool>("deleteStickerSet", b"<html>").unwrap_err();

        assert!(err.is_decode());
        assert!(matches!(err, Error::Decode(ref e) if e.method == "deleteStickerSet"));
    }

    #[test]
    fn missing_result_is_a_decode_error() {
        let err = decode_result::<bool>("setStickerSetTitle", br#"{"ok":true}"#).unwrap_err();

        assert!(err.is_decode());
    }
}
