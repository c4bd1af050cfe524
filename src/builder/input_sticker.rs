use super::InputFile;
use crate::http::Attachment;
use crate::model::prelude::*;

/// A builder for a sticker to be added to a set, when creating it or later on.
///
/// These are used by:
///
/// - [`StickerSetClient::create_sticker_set`]
/// - [`StickerSetClient::add_sticker_to_set`]
/// - [`StickerSetClient::replace_sticker_in_set`]
///
/// [`StickerSetClient::create_sticker_set`]: crate::client::StickerSetClient::create_sticker_set
/// [`StickerSetClient::add_sticker_to_set`]: crate::client::StickerSetClient::add_sticker_to_set
/// [`StickerSetClient::replace_sticker_in_set`]: crate::client::StickerSetClient::replace_sticker_in_set
///
/// [Bot API docs](https://core.telegram.org/bots/api#inputsticker).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[must_use]
pub struct InputSticker {
    sticker: InputFile,
    format: StickerFormat,
    emoji_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mask_position: Option<MaskPosition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    keywords: Vec<String>,
}

impl InputSticker {
    /// Creates a new builder with the sticker file, its format and its emoji. All three are
    /// required.
    ///
    /// **Note**: The Bot API expects between 1 and 20 emoji.
    pub fn new<It>(sticker: InputFile, format: StickerFormat, emoji_list: It) -> Self
    where
        It: IntoIterator,
        It::Item: Into<String>,
    {
        Self {
            sticker,
            format,
            emoji_list: emoji_list.into_iter().map(Into::into).collect(),
            mask_position: None,
            keywords: Vec::new(),
        }
    }

    /// Set the sticker file, replacing the current value as set in [`Self::new`].
    pub fn sticker(mut self, sticker: InputFile) -> Self {
        self.sticker = sticker;
        self
    }

    /// Set the format of the sticker file, replacing the current value as set in [`Self::new`].
    pub fn format(mut self, format: StickerFormat) -> Self {
        self.format = format;
        self
    }

    /// Replace the emoji associated with the sticker.
    pub fn emoji_list<It>(mut self, emoji_list: It) -> Self
    where
        It: IntoIterator,
        It::Item: Into<String>,
    {
        self.emoji_list = emoji_list.into_iter().map(Into::into).collect();
        self
    }

    /// Set the position where the mask should be placed on faces. For mask stickers only.
    pub fn mask_position(mut self, mask_position: MaskPosition) -> Self {
        self.mask_position = Some(mask_position);
        self
    }

    /// Set the search keywords for the sticker. For regular and custom emoji stickers only.
    ///
    /// **Note**: 0-20 keywords, with a total length of up to 64 characters.
    pub fn keywords<It>(mut self, keywords: It) -> Self
    where
        It: IntoIterator,
        It::Item: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// The sticker file.
    #[must_use]
    pub fn file(&self) -> &InputFile {
        &self.sticker
    }

    /// The format of the sticker file.
    #[must_use]
    pub fn file_format(&self) -> StickerFormat {
        self.format
    }

    /// The emoji associated with the sticker.
    #[must_use]
    pub fn emojis(&self) -> &[String] {
        &self.emoji_list
    }

    /// The search keywords, in order.
    #[must_use]
    pub fn search_keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Stickers ready for the wire, with every file that needs uploading moved out into an
/// attachment.
#[derive(Debug)]
pub(crate) struct AttachedStickers {
    pub stickers: Vec<InputSticker>,
    pub files: Vec<Attachment>,
}

/// The attachment name for the sticker at `index` within a request.
fn attachment_name(index: usize) -> String {
    format!("sticker{index}")
}

/// Rewrites every sticker that needs uploading to reference an attachment of its own.
///
/// The sticker at position `i` uploads under [`attachment_name`]`(i)`, so names never collide
/// within a request. Stickers referenced by string are left untouched, and `files` stays empty
/// when nothing needs uploading.
pub(crate) fn attach_stickers(stickers: &[InputSticker]) -> AttachedStickers {
    let mut files = Vec::new();
    let stickers = stickers
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let mut input = input.clone();

            if input.sticker.needs_upload() {
                let name = attachment_name(index);
                let file = std::mem::replace(&mut input.sticker, InputFile::Attach(name.clone()));
                files.push(Attachment::new(name, file));
            }

            input
        })
        .collect();

    AttachedStickers {
        stickers,
        files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn keywords_keep_their_order() {
        let sticker =
            InputSticker::new(InputFile::remote("CAAC1"), StickerFormat::Static, ["😺"])
                .keywords(["a", "b"]);

        assert_json(
            &sticker,
            json!({"sticker": "CAAC1", "format": "static", "emoji_list": ["😺"], "keywords": ["a", "b"]}),
        );
        assert_eq!(sticker.search_keywords(), ["a", "b"]);
    }

    #[test]
    fn optional_fields_are_sent_when_set() {
        let sticker = InputSticker::new(InputFile::remote("CAAC2"), StickerFormat::Video, ["🎭"])
            .format(StickerFormat::Animated)
            .mask_position(MaskPosition::new(MaskFeature::Forehead));

        assert_json(
            &sticker,
            json!({
                "sticker": "CAAC2",
                "format": "animated",
                "emoji_list": ["🎭"],
                "mask_position": {"point": "forehead", "x_shift": 0.0, "y_shift": 0.0, "scale": 1.0},
            }),
        );
        assert_eq!(sticker.file_format(), StickerFormat::Animated);
    }

    #[test]
    fn format_is_required_on_decode() {
        let missing = serde_json::from_value::<InputSticker>(json!({
            "sticker": "CAAC3",
            "emoji_list": ["🐈"],
        }));

        assert!(missing.is_err());
    }

    #[test]
    fn remote_stickers_need_no_attachments() {
        let stickers = vec![
            InputSticker::new(InputFile::remote("a"), StickerFormat::Static, ["1️⃣"]),
            InputSticker::new(InputFile::remote("https://example.com/b.webp"), StickerFormat::Static, ["2️⃣"]),
        ];

        let attached = attach_stickers(&stickers);

        assert!(attached.files.is_empty());
        assert_eq!(attached.stickers, stickers);
    }

    #[test]
    fn local_stickers_get_distinct_attachments() {
        let stickers = vec![
            InputSticker::new(InputFile::path("./one.webp"), StickerFormat::Static, ["1️⃣"]),
            InputSticker::new(InputFile::remote("two"), StickerFormat::Static, ["2️⃣"]),
            InputSticker::new(InputFile::bytes(vec![0], "three.webp"), StickerFormat::Static, ["3️⃣"]),
        ];

        let attached = attach_stickers(&stickers);

        let names: Vec<_> = attached.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["sticker0", "sticker2"]);
        assert_eq!(attached.files[0].file, InputFile::path("./one.webp"));
        assert_eq!(attached.stickers[0].file(), &InputFile::Attach("sticker0".into()));
        assert_eq!(attached.stickers[1].file(), &InputFile::remote("two"));
        assert_eq!(attached.stickers[2].file(), &InputFile::Attach("sticker2".into()));

        // The caller's stickers are left alone.
        assert_eq!(stickers[0].file(), &InputFile::path("./one.webp"));
    }
}
