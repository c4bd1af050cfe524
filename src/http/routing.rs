use std::fmt;

/// A macro for defining routes. Takes as input a list of route definitions, and generates a
/// definition for the `Route` enum and implements methods on it.
macro_rules! routes {
    ({
        $(
            $(#[$attr:meta])*
            $name:ident, $method:literal;
        )+
    }) => {
        /// A Bot API method of the sticker set family.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum Route {
            $(
                $(#[$attr])*
                $name,
            )+
        }

        impl Route {
            /// Every route, in declaration order.
            pub const ALL: &'static [Route] = &[$(Self::$name,)+];

            /// The Bot API method name, as it appears in the request path.
            #[must_use]
            pub const fn method(self) -> &'static str {
                match self {
                    $(
                        Self::$name => $method,
                    )+
                }
            }
        }
    };
}

routes! ({
    /// [Bot API docs](https://core.telegram.org/bots/api#uploadstickerfile).
    UploadStickerFile, "uploadStickerFile";
    /// [Bot API docs](https://core.telegram.org/bots/api#getstickerset).
    GetStickerSet, "getStickerSet";
    /// [Bot API docs](https://core.telegram.org/bots/api#getcustomemojistickers).
    GetCustomEmojiStickers, "getCustomEmojiStickers";
    /// [Bot API docs](https://core.telegram.org/bots/api#createnewstickerset).
    CreateNewStickerSet, "createNewStickerSet";
    /// [Bot API docs](https://core.telegram.org/bots/api#addstickertoset).
    AddStickerToSet, "addStickerToSet";
    /// [Bot API docs](https://core.telegram.org/bots/api#setstickerpositioninset).
    SetStickerPositionInSet, "setStickerPositionInSet";
    /// [Bot API docs](https://core.telegram.org/bots/api#deletestickerfromset).
    DeleteStickerFromSet, "deleteStickerFromSet";
    /// [Bot API docs](https://core.telegram.org/bots/api#replacestickerinset).
    ReplaceStickerInSet, "replaceStickerInSet";
    /// [Bot API docs](https://core.telegram.org/bots/api#setstickeremojilist).
    SetStickerEmojiList, "setStickerEmojiList";
    /// [Bot API docs](https://core.telegram.org/bots/api#setstickerkeywords).
    SetStickerKeywords, "setStickerKeywords";
    /// [Bot API docs](https://core.telegram.org/bots/api#setstickermaskposition).
    SetStickerMaskPosition, "setStickerMaskPosition";
    /// [Bot API docs](https://core.telegram.org/bots/api#setstickersettitle).
    SetStickerSetTitle, "setStickerSetTitle";
    /// [Bot API docs](https://core.telegram.org/bots/api#setstickersetthumbnail).
    SetStickerSetThumbnail, "setStickerSetThumbnail";
    /// [Bot API docs](https://core.telegram.org/bots/api#setcustomemojistickersetthumbnail).
    SetCustomEmojiStickerSetThumbnail, "setCustomEmojiStickerSetThumbnail";
    /// [Bot API docs](https://core.telegram.org/bots/api#deletestickerset).
    DeleteStickerSet, "deleteStickerSet";
});

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Route;

    #[test]
    fn method_names_are_unique() {
        let methods: HashSet<_> = Route::ALL.iter().map(|r| r.method()).collect();

        assert_eq!(methods.len(), Route::ALL.len());
        assert_eq!(Route::CreateNewStickerSet.to_string(), "createNewStickerSet");
    }
}
