//! Stickers, sticker sets and the metadata attached to them.

mod mask_position;
#[allow(clippy::module_inception)]
mod sticker;
mod sticker_set;

pub use self::mask_position::*;
pub use self::sticker::*;
pub use self::sticker_set::*;

enum_str! {
    /// Differentiates between sticker types. A sticker set only holds stickers of its own type.
    ///
    /// [Bot API docs](https://core.telegram.org/bots/api#stickerset).
    #[derive(Default)]
    StickerType {
        /// A plain sticker.
        #[default]
        Regular = "regular",
        /// A mask placed on faces in photos.
        Mask = "mask",
        /// A custom emoji, usable inline in message text.
        CustomEmoji = "custom_emoji",
    }
}

enum_str! {
    /// The encoding of a sticker file.
    ///
    /// [Bot API docs](https://core.telegram.org/bots/api#inputsticker).
    #[derive(Default)]
    StickerFormat {
        /// A `.WEBP` or `.PNG` image.
        #[default]
        Static = "static",
        /// A `.TGS` animation.
        Animated = "animated",
        /// A `.WEBM` video.
        Video = "video",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn sticker_type_strings() {
        assert_json(&StickerType::CustomEmoji, json!("custom_emoji"));
        assert_json(&StickerType::Mask, json!("mask"));
        assert_eq!(StickerType::Regular.to_string(), "regular");
    }

    #[test]
    fn unknown_sticker_format_is_rejected() {
        assert!(serde_json::from_value::<StickerFormat>(json!("gif")).is_err());
        assert_eq!("video".parse::<StickerFormat>(), Ok(StickerFormat::Video));
    }
}
