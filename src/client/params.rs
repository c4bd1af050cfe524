//! The fields of every sticker set method, one struct per [`Route`].
//!
//! Each struct is flattened into [`Params`] by [`Params::from_fields`]. Members typed as lists
//! or objects go through [`json_text`] so they travel as JSON text of their direct encoding.
//!
//! [`Route`]: crate::http::Route
//! [`Params`]: crate::http::Params
//! [`Params::from_fields`]: crate::http::Params::from_fields

use std::ops::Not;

use crate::builder::InputSticker;
use crate::http::json_text;
use crate::model::prelude::*;

#[derive(Serialize)]
pub(super) struct UploadStickerFile {
    pub user_id: UserId,
    pub sticker_format: StickerFormat,
}

#[derive(Serialize)]
pub(super) struct GetStickerSet<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
pub(super) struct GetCustomEmojiStickers<'a> {
    #[serde(serialize_with = "json_text")]
    pub custom_emoji_ids: &'a [&'a str],
}

#[derive(Serialize)]
pub(super) struct CreateNewStickerSet<'a> {
    pub user_id: UserId,
    pub name: &'a str,
    pub title: &'a str,
    pub sticker_type: StickerType,
    #[serde(serialize_with = "json_text")]
    pub stickers: &'a [InputSticker],
    #[serde(skip_serializing_if = "Not::not")]
    pub needs_repainting: bool,
}

#[derive(Serialize)]
pub(super) struct AddStickerToSet<'a> {
    pub user_id: UserId,
    pub name: &'a str,
    #[serde(serialize_with = "json_text")]
    pub sticker: &'a InputSticker,
}

#[derive(Serialize)]
pub(super) struct ReplaceStickerInSet<'a> {
    pub user_id: UserId,
    pub name: &'a str,
    pub old_sticker: &'a str,
    #[serde(serialize_with = "json_text")]
    pub sticker: &'a InputSticker,
}

#[derive(Serialize)]
pub(super) struct SetStickerPositionInSet<'a> {
    pub sticker: &'a str,
    pub position: u32,
}

#[derive(Serialize)]
pub(super) struct DeleteStickerFromSet<'a> {
    pub sticker: &'a str,
}

#[derive(Serialize)]
pub(super) struct SetStickerEmojiList<'a> {
    pub sticker: &'a str,
    #[serde(serialize_with = "json_text")]
    pub emoji_list: &'a [&'a str],
}

#[derive(Serialize)]
pub(super) struct SetStickerKeywords<'a> {
    pub sticker: &'a str,
    #[serde(serialize_with = "json_text")]
    pub keywords: &'a [&'a str],
}

#[derive(Serialize)]
pub(super) struct SetStickerMaskPosition<'a> {
    pub sticker: &'a str,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "json_text")]
    pub mask_position: Option<&'a MaskPosition>,
}

#[derive(Serialize)]
pub(super) struct SetStickerSetTitle<'a> {
    pub name: &'a str,
    pub title: &'a str,
}

#[derive(Serialize)]
pub(super) struct SetStickerSetThumbnail<'a> {
    pub name: &'a str,
    pub user_id: UserId,
    pub format: StickerFormat,
}

#[derive(Serialize)]
pub(super) struct SetCustomEmojiStickerSetThumbnail<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<&'a str>,
}

#[derive(Serialize)]
pub(super) struct DeleteStickerSet<'a> {
    pub name: &'a str,
}
