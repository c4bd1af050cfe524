/// A file ready to be downloaded, as returned by [`uploadStickerFile`].
///
/// [`uploadStickerFile`]: crate::client::StickerSetClient::upload_sticker_file
///
/// [Bot API docs](https://core.telegram.org/bots/api#file).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct File {
    /// Identifier for this file, which can be used to download or reuse the file.
    pub file_id: String,
    /// Unique identifier for this file, which is supposed to be the same over time and for
    /// different bots. Can't be used to download or reuse the file.
    pub file_unique_id: String,
    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// File path. Use `https://api.telegram.org/file/bot<token>/<file_path>` to get the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// One size of a photo or a file / sticker thumbnail.
///
/// [Bot API docs](https://core.telegram.org/bots/api#photosize).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn file_optional_fields_are_omitted() {
        let value = File {
            file_id: "BQACAgIAAxkBAAIB".to_string(),
            file_unique_id: "AgADVQ4AAk".to_string(),
            file_size: None,
            file_path: None,
        };

        assert_json(&value, json!({"file_id": "BQACAgIAAxkBAAIB", "file_unique_id": "AgADVQ4AAk"}));
    }
}
