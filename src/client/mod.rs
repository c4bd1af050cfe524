//! The [`StickerSetClient`], translating typed sticker set operations into Bot API calls.
//!
//! A client is a thin wrapper over an [`Invoker`]: it shapes the request fields of each method,
//! decides whether the call needs a multipart body, and decodes the typed result. It keeps no
//! state of its own, so a single client can be shared between tasks freely.
//!
//! # Uploading local files
//!
//! Methods taking [`InputSticker`]s accept files needing an upload ([`InputFile::LocalPath`] or
//! [`InputFile::Bytes`]) alongside files Telegram already knows. Each sticker needing an upload
//! is sent as a multipart part named `sticker<index>`, with its `sticker` field pointing at
//! `attach://sticker<index>`. When no sticker needs an upload the call is a plain form request.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tg_stickers::builder::{InputFile, InputSticker};
//! use tg_stickers::client::StickerSetClient;
//! use tg_stickers::model::prelude::*;
//!
//! # async fn run() -> tg_stickers::Result<()> {
//! let client = StickerSetClient::with_token("123456:ABC-DEF");
//!
//! let set = StickerSet::new(StickerType::Regular, "cats_by_my_bot", "Cats");
//! let stickers = [
//!     InputSticker::new(InputFile::path("./stickers/tabby.webp"), StickerFormat::Static, ["😺"]),
//!     InputSticker::new(InputFile::remote("CAACAgIAAxkBAAEKd"), StickerFormat::Static, ["😸"])
//!         .keywords(["grin"]),
//! ];
//!
//! client.create_sticker_set(UserId(42), &stickers, &set).await?;
//! let created = client.get_sticker_set("cats_by_my_bot").await?;
//! assert_eq!(created.stickers.len(), 2);
//! # Ok(())
//! # }
//! ```

mod params;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::builder::{attach_stickers, InputFile, InputSticker};
#[cfg(feature = "http")]
use crate::http::Http;
use crate::http::{Attachment, Invoker, Params, Route};
use crate::internal::prelude::*;
use crate::json;
use crate::model::prelude::*;

/// Performs the sticker set methods of the Bot API through an [`Invoker`].
///
/// Every method maps to exactly one remote call. Transport errors are returned as they are, and
/// a successful response that fails to decode is reported as an [`Error::Decode`].
#[derive(Clone, Debug)]
pub struct StickerSetClient<I> {
    invoker: I,
}

#[cfg(feature = "http")]
impl StickerSetClient<Http> {
    /// A client over the default [`Http`] transport.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self::new(Http::new(token))
    }
}

impl<I: Invoker> StickerSetClient<I> {
    /// A client sending every call through `invoker`.
    pub fn new(invoker: I) -> Self {
        Self {
            invoker,
        }
    }

    /// The transport calls go through.
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Consumes the client, giving back its transport.
    #[must_use]
    pub fn into_invoker(self) -> I {
        self.invoker
    }

    /// Uploads a sticker file for later use in [`Self::create_sticker_set`],
    /// [`Self::add_sticker_to_set`] or [`Self::replace_sticker_in_set`]. The file can be used
    /// multiple times.
    ///
    /// The file is always sent as a multipart part named `sticker`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the upload fails, or [`Error::Decode`] if the uploaded
    /// [`File`] could not be decoded.
    pub async fn upload_sticker_file(
        &self,
        user_id: impl Into<UserId>,
        format: StickerFormat,
        sticker: InputFile,
    ) -> Result<File> {
        let fields = Params::from_fields(&params::UploadStickerFile {
            user_id: user_id.into(),
            sticker_format: format,
        })?;
        let files = vec![Attachment::new("sticker", sticker)];

        self.call_with_files(Route::UploadStickerFile, files, fields).await
    }

    /// Gets a sticker set, with all of its stickers.
    ///
    /// # Errors
    ///
    /// Returns a transport error if no set with that name exists.
    pub async fn get_sticker_set(&self, name: &str) -> Result<StickerSet> {
        let fields = Params::from_fields(&params::GetStickerSet {
            name,
        })?;

        self.call(Route::GetStickerSet, fields).await
    }

    /// Gets information about custom emoji stickers by their identifiers.
    ///
    /// The stickers are returned in the order the server sends them, which is the order of `ids`.
    ///
    /// **Note**: At most 200 identifiers can be given.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn get_custom_emoji_stickers<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Sticker>> {
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        let fields = Params::from_fields(&params::GetCustomEmojiStickers {
            custom_emoji_ids: &ids,
        })?;

        self.call(Route::GetCustomEmojiStickers, fields).await
    }

    /// Creates a new sticker set owned by a user, filled with `stickers`.
    ///
    /// Only the [`kind`], [`name`] and [`title`] of `set` are read. For custom emoji sets,
    /// [`needs_repainting`] is read too. Each sticker carries its own format.
    ///
    /// Stickers needing an upload are attached to the request, see the [module docs](self).
    ///
    /// **Note**: The name must end in `_by_<bot_username>` and be unique across Telegram.
    ///
    /// [`kind`]: StickerSet::kind
    /// [`name`]: StickerSet::name
    /// [`title`]: StickerSet::title
    /// [`needs_repainting`]: StickerSet::needs_repainting
    ///
    /// # Errors
    ///
    /// Returns a transport error if the name is taken or any sticker is rejected, and
    /// [`Error::Io`] if a local sticker file cannot be read.
    pub async fn create_sticker_set(
        &self,
        user_id: impl Into<UserId>,
        stickers: &[InputSticker],
        set: &StickerSet,
    ) -> Result<()> {
        let attached = attach_stickers(stickers);
        let fields = Params::from_fields(&params::CreateNewStickerSet {
            user_id: user_id.into(),
            name: &set.name,
            title: &set.title,
            sticker_type: set.kind,
            stickers: &attached.stickers,
            needs_repainting: set.kind == StickerType::CustomEmoji && set.needs_repainting,
        })?;

        self.call_unit(Route::CreateNewStickerSet, attached.files, fields).await
    }

    /// Adds a sticker to a set created by the bot. Only the [`name`] of `set` is read.
    ///
    /// A sticker needing an upload is attached as `sticker0`.
    ///
    /// [`name`]: StickerSet::name
    ///
    /// # Errors
    ///
    /// Returns a transport error if the set is full or not owned by the bot.
    pub async fn add_sticker_to_set(
        &self,
        user_id: impl Into<UserId>,
        sticker: &InputSticker,
        set: &StickerSet,
    ) -> Result<()> {
        let attached = attach_stickers(std::slice::from_ref(sticker));
        let fields = Params::from_fields(&params::AddStickerToSet {
            user_id: user_id.into(),
            name: &set.name,
            sticker: &attached.stickers[0],
        })?;

        self.call_unit(Route::AddStickerToSet, attached.files, fields).await
    }

    /// Replaces `old_sticker` in the set `name` with a new one, keeping its position.
    ///
    /// A sticker needing an upload is attached as `sticker0`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if `old_sticker` is not in the set.
    pub async fn replace_sticker_in_set(
        &self,
        user_id: impl Into<UserId>,
        name: &str,
        old_sticker: &str,
        sticker: &InputSticker,
    ) -> Result<()> {
        let attached = attach_stickers(std::slice::from_ref(sticker));
        let fields = Params::from_fields(&params::ReplaceStickerInSet {
            user_id: user_id.into(),
            name,
            old_sticker,
            sticker: &attached.stickers[0],
        })?;

        self.call_unit(Route::ReplaceStickerInSet, attached.files, fields).await
    }

    /// Moves a sticker in a set created by the bot to a specific, zero-based, position.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn set_sticker_position_in_set(&self, sticker: &str, position: u32) -> Result<()> {
        let fields = Params::from_fields(&params::SetStickerPositionInSet {
            sticker,
            position,
        })?;

        self.call_unit(Route::SetStickerPositionInSet, Vec::new(), fields).await
    }

    /// Deletes a sticker from a set created by the bot.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn delete_sticker_from_set(&self, sticker: &str) -> Result<()> {
        let fields = Params::from_fields(&params::DeleteStickerFromSet {
            sticker,
        })?;

        self.call_unit(Route::DeleteStickerFromSet, Vec::new(), fields).await
    }

    /// Replaces the emoji associated with a regular or custom emoji sticker.
    ///
    /// The list is always sent, as `[]` when empty.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn set_sticker_emoji_list<S: AsRef<str>>(
        &self,
        sticker: &str,
        emojis: &[S],
    ) -> Result<()> {
        let emoji_list: Vec<&str> = emojis.iter().map(AsRef::as_ref).collect();
        let fields = Params::from_fields(&params::SetStickerEmojiList {
            sticker,
            emoji_list: &emoji_list,
        })?;

        self.call_unit(Route::SetStickerEmojiList, Vec::new(), fields).await
    }

    /// Replaces the search keywords of a regular or custom emoji sticker.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn set_sticker_keywords<S: AsRef<str>>(
        &self,
        sticker: &str,
        keywords: &[S],
    ) -> Result<()> {
        let keywords: Vec<&str> = keywords.iter().map(AsRef::as_ref).collect();
        let fields = Params::from_fields(&params::SetStickerKeywords {
            sticker,
            keywords: &keywords,
        })?;

        self.call_unit(Route::SetStickerKeywords, Vec::new(), fields).await
    }

    /// Changes the mask position of a mask sticker. Passing `None` removes it.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn set_sticker_mask_position(
        &self,
        sticker: &str,
        mask_position: Option<&MaskPosition>,
    ) -> Result<()> {
        let fields = Params::from_fields(&params::SetStickerMaskPosition {
            sticker,
            mask_position,
        })?;

        self.call_unit(Route::SetStickerMaskPosition, Vec::new(), fields).await
    }

    /// Sets the title of a set created by the bot.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn set_sticker_set_title(&self, title: &str, name: &str) -> Result<()> {
        let fields = Params::from_fields(&params::SetStickerSetTitle {
            name,
            title,
        })?;

        self.call_unit(Route::SetStickerSetTitle, Vec::new(), fields).await
    }

    /// Sets the thumbnail of a regular or mask set. Only the [`name`] of `set` is read, and the
    /// thumbnail format is taken from [`StickerSet::format`].
    ///
    /// The thumbnail is always sent as a multipart part named `thumbnail`.
    ///
    /// **Note**: A `.WEBP` or `.PNG` thumbnail must be exactly 100x100 and at most 128 KB. A
    /// `.TGS` or `.WEBM` thumbnail must be at most 32 KB.
    ///
    /// [`name`]: StickerSet::name
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails, and [`Error::Io`] if a local thumbnail file
    /// cannot be read.
    pub async fn set_sticker_set_thumbnail(
        &self,
        user_id: impl Into<UserId>,
        thumbnail: InputFile,
        set: &StickerSet,
    ) -> Result<()> {
        let fields = Params::from_fields(&params::SetStickerSetThumbnail {
            name: &set.name,
            user_id: user_id.into(),
            format: set.format(),
        })?;
        let files = vec![Attachment::new("thumbnail", thumbnail)];

        self.call_with_files::<bool>(Route::SetStickerSetThumbnail, files, fields).await?;
        Ok(())
    }

    /// Sets the thumbnail of a custom emoji set to one of its emoji. Passing `None` drops the
    /// thumbnail, so the first sticker is used instead.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn set_custom_emoji_sticker_set_thumbnail(
        &self,
        name: &str,
        custom_emoji_id: Option<&str>,
    ) -> Result<()> {
        let fields = Params::from_fields(&params::SetCustomEmojiStickerSetThumbnail {
            name,
            custom_emoji_id,
        })?;

        self.call_unit(Route::SetCustomEmojiStickerSetThumbnail, Vec::new(), fields).await
    }

    /// Deletes a sticker set created by the bot.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call fails.
    pub async fn delete_sticker_set(&self, name: &str) -> Result<()> {
        let fields = Params::from_fields(&params::DeleteStickerSet {
            name,
        })?;

        self.call_unit(Route::DeleteStickerSet, Vec::new(), fields).await
    }

    async fn call<T: DeserializeOwned>(&self, route: Route, fields: Params) -> Result<T> {
        let body = self.invoker.invoke(route, fields).await?;
        json::decode_result(route.method(), &body)
    }

    async fn call_with_files<T: DeserializeOwned>(
        &self,
        route: Route,
        files: Vec<Attachment>,
        fields: Params,
    ) -> Result<T> {
        let body = self.invoker.invoke_with_files(route, files, fields).await?;
        json::decode_result(route.method(), &body)
    }

    /// Calls a method answering `true` on success, as a multipart request only when there is
    /// something to upload.
    async fn call_unit(&self, route: Route, files: Vec<Attachment>, fields: Params) -> Result<()> {
        if files.is_empty() {
            self.call::<bool>(route, fields).await?;
        } else {
            debug!("{route} carries {} attachment(s), sending as multipart", files.len());
            self.call_with_files::<bool>(route, files, fields).await?;
        }

        Ok(())
    }
}
