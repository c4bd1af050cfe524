use super::{MaskPosition, StickerType};
use crate::model::file::{File, PhotoSize};

/// A sticker, as stored in a [`StickerSet`] or returned by [`getCustomEmojiStickers`].
///
/// [`StickerSet`]: super::StickerSet
/// [`getCustomEmojiStickers`]: crate::client::StickerSetClient::get_custom_emoji_stickers
///
/// [Bot API docs](https://core.telegram.org/bots/api#sticker).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[non_exhaustive]
pub struct Sticker {
    /// Identifier for this file, which can be used to download or reuse the file.
    pub file_id: String,
    /// Unique identifier for this file, which is supposed to be the same over time and for
    /// different bots.
    pub file_unique_id: String,
    /// The type of sticker. Independent of the sticker's format.
    #[serde(rename = "type")]
    pub kind: StickerType,
    /// Sticker width.
    pub width: u32,
    /// Sticker height.
    pub height: u32,
    /// Whether the sticker is [animated](https://telegram.org/blog/animated-stickers).
    #[serde(default)]
    pub is_animated: bool,
    /// Whether the sticker is a [video sticker](https://telegram.org/blog/video-stickers-better-reactions).
    #[serde(default)]
    pub is_video: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumbnail: Option<PhotoSize>,
    #[serde(default, rename = "thumb", skip_serializing)]
    legacy_thumbnail: Option<PhotoSize>,
    /// Emoji associated with the sticker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Name of the sticker set to which the sticker belongs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    /// For premium regular stickers, premium animation for the sticker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_animation: Option<File>,
    /// For mask stickers, the position where the mask should be placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    /// For custom emoji stickers, unique identifier of the custom emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
    /// Whether the sticker must be repainted to a text color in messages.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub needs_repainting: bool,
    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl Sticker {
    /// Sticker thumbnail in the `.WEBP` or `.JPG` format.
    ///
    /// Servers older than Bot API 6.6 only send the `thumb` key, which is used as a fallback.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&PhotoSize> {
        self.thumbnail.as_ref().or(self.legacy_thumbnail.as_ref())
    }
}
