use super::{MaskPosition, Sticker, StickerFormat, StickerType};
use crate::model::file::PhotoSize;

/// A named, ordered collection of stickers owned by a bot.
///
/// The operations that create or mutate a set only read a few fields of it (the [`name`] in
/// most cases, plus [`title`] and [`kind`] on creation), so [`StickerSet::new`] is enough to
/// build one for them.
///
/// **Note**: The `name` must be unique across Telegram. This is enforced by the server only.
///
/// [`name`]: Self::name
/// [`title`]: Self::title
/// [`kind`]: Self::kind
///
/// [Bot API docs](https://core.telegram.org/bots/api#stickerset).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[non_exhaustive]
pub struct StickerSet {
    /// Type of stickers in the set.
    #[serde(rename = "sticker_type")]
    pub kind: StickerType,
    /// Sticker set name, used in `t.me/addstickers/` URLs.
    pub name: String,
    /// Sticker set title.
    pub title: String,
    /// Whether the set contains animated stickers.
    #[serde(default)]
    pub is_animated: bool,
    /// Whether the set contains video stickers.
    #[serde(default)]
    pub is_video: bool,
    /// The stickers of the set, in order. Empty unless the set was fetched from the server.
    #[serde(default)]
    pub stickers: Vec<Sticker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumbnail: Option<PhotoSize>,
    #[serde(default, rename = "thumb", skip_serializing)]
    legacy_thumbnail: Option<PhotoSize>,
    /// Default placement of the masks. Only meaningful for [`StickerType::Mask`] sets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    /// Whether the stickers must be repainted to a text color in messages. Only meaningful for
    /// [`StickerType::CustomEmoji`] sets.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub needs_repainting: bool,
}

impl StickerSet {
    /// Builds a local description of a set, carrying what the mutating operations need.
    pub fn new(kind: StickerType, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Marks every sticker of the set as a video sticker.
    #[must_use]
    pub fn video(mut self, is_video: bool) -> Self {
        self.is_video = is_video;
        self
    }

    /// Marks every sticker of the set as an animated sticker.
    #[must_use]
    pub fn animated(mut self, is_animated: bool) -> Self {
        self.is_animated = is_animated;
        self
    }

    /// Sets whether custom emoji in the set are repainted to the text color.
    #[must_use]
    pub fn needs_repainting(mut self, needs_repainting: bool) -> Self {
        self.needs_repainting = needs_repainting;
        self
    }

    /// The format of the set's stickers, derived from its flags.
    ///
    /// The video flag wins over the animated flag; a set with neither is static.
    #[must_use]
    pub fn format(&self) -> StickerFormat {
        if self.is_video {
            StickerFormat::Video
        } else if self.is_animated {
            StickerFormat::Animated
        } else {
            StickerFormat::Static
        }
    }

    /// Sticker set thumbnail in the `.WEBP`, `.TGS`, or `.WEBM` format.
    ///
    /// Falls back to the `thumb` key sent by servers older than Bot API 6.6.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&PhotoSize> {
        self.thumbnail.as_ref().or(self.legacy_thumbnail.as_ref())
    }

    /// The `t.me` link that adds the set to a user's collection.
    #[must_use]
    pub fn share_url(&self) -> String {
        let path = match self.kind {
            StickerType::CustomEmoji => "addemoji",
            StickerType::Regular | StickerType::Mask => "addstickers",
        };

        format!("https://t.me/{path}/{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn format_follows_flags() {
        let set = StickerSet::new(StickerType::Regular, "cats_by_bot", "Cats");
        assert_eq!(set.format(), StickerFormat::Static);
        assert_eq!(set.clone().animated(true).format(), StickerFormat::Animated);
        assert_eq!(set.clone().video(true).format(), StickerFormat::Video);
        assert_eq!(set.animated(true).video(true).format(), StickerFormat::Video);
    }

    #[test]
    fn legacy_thumb_key_is_accepted() {
        let set: StickerSet = serde_json::from_value(json!({
            "sticker_type": "regular",
            "name": "cats_by_bot",
            "title": "Cats",
            "is_animated": false,
            "is_video": false,
            "stickers": [],
            "thumb": {"file_id": "a", "file_unique_id": "b", "width": 100, "height": 100},
        }))
        .unwrap();

        assert_eq!(set.thumbnail().map(|t| t.width), Some(100));
    }

    #[test]
    fn both_thumbnail_keys_decode() {
        let set: StickerSet = serde_json::from_value(json!({
            "sticker_type": "regular",
            "name": "cats_by_bot",
            "title": "Cats",
            "stickers": [],
            "thumbnail": {"file_id": "new", "file_unique_id": "b", "width": 100, "height": 100},
            "thumb": {"file_id": "old", "file_unique_id": "b", "width": 100, "height": 100},
        }))
        .unwrap();

        assert_eq!(set.thumbnail().map(|t| t.file_id.as_str()), Some("new"));
    }

    #[test]
    fn minimal_set_json() {
        let set = StickerSet::new(StickerType::CustomEmoji, "emoji_by_bot", "Emoji")
            .needs_repainting(true);

        assert_json(
            &set,
            json!({
                "sticker_type": "custom_emoji",
                "name": "emoji_by_bot",
                "title": "Emoji",
                "is_animated": false,
                "is_video": false,
                "stickers": [],
                "needs_repainting": true,
            }),
        );
        assert_eq!(set.share_url(), "https://t.me/addemoji/emoji_by_bot");
    }
}
