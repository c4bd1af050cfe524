use std::collections::btree_map::{BTreeMap, Iter};

use serde::ser::{Serialize, Serializer};

use crate::internal::prelude::*;

/// The string fields of a Bot API request.
///
/// Every value is already in its wire form: strings as-is, numbers and booleans in decimal /
/// `true` / `false`, and structured values as JSON text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a struct into request fields, one field per top-level member.
    ///
    /// Members that serialize to `null` are left out. Members that have to travel as JSON text
    /// should be marked with `#[serde(serialize_with = "json_text")]`; any other array or object
    /// is JSON-encoded as well.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if the value does not serialize to a JSON object.
    pub fn from_fields<T: Serialize + ?Sized>(fields: &T) -> Result<Self> {
        let map = match serde_json::to_value(fields)? {
            Value::Object(map) => map,
            other => {
                return Err(Error::Json(serde::ser::Error::custom(format!(
                    "request fields must be a JSON object, got {other}"
                ))))
            },
        };

        let mut params = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => {},
                Value::Bool(inner) => params.insert(key, inner.to_string()),
                Value::Number(inner) => params.insert(key, inner.to_string()),
                Value::String(inner) => params.insert(key, inner),
                value @ (Value::Array(_) | Value::Object(_)) => {
                    params.insert(key, serde_json::to_string(&value)?);
                },
            }
        }

        Ok(params)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Serializes a member as a JSON string holding its direct JSON encoding.
///
/// # Errors
///
/// Fails if the value itself fails to serialize.
pub fn json_text<T, S>(value: &T, serializer: S) -> StdResult<S::Ok, S::Error>
where
    T: Serialize + ?Sized,
    S: Serializer,
{
    let text = serde_json::to_string(value).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Fields<'a> {
        name: &'a str,
        position: u32,
        needs_repainting: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<&'a str>,
        thumbnail: Option<&'a str>,
        #[serde(serialize_with = "json_text")]
        emoji_list: &'a [&'a str],
    }

    #[test]
    fn fields_are_flattened_to_strings() {
        let params = Params::from_fields(&Fields {
            name: "cats_by_bot",
            position: 3,
            needs_repainting: false,
            title: None,
            thumbnail: None,
            emoji_list: &[],
        })
        .unwrap();

        assert_eq!(params.get("name"), Some("cats_by_bot"));
        assert_eq!(params.get("position"), Some("3"));
        assert_eq!(params.get("needs_repainting"), Some("false"));
        assert_eq!(params.get("emoji_list"), Some("[]"));
        assert_eq!(params.get("title"), None);
        assert_eq!(params.get("thumbnail"), None);
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(matches!(Params::from_fields(&[1, 2]), Err(Error::Json(_))));
    }
}
