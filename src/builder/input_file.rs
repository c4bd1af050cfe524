use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{Deserializer, Error as DeError, Visitor};
use serde::ser::{Error as SerError, Serializer};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::constants::ATTACH_PREFIX;
use crate::internal::prelude::*;

/// The content of a sticker or thumbnail handed to the Bot API.
///
/// Files that already live on Telegram's servers (or behind a public URL) are referenced by
/// string. Everything else has to be uploaded as a part of a `multipart/form-data` request, which
/// the client takes care of: see [`StickerSetClient::create_sticker_set`].
///
/// [`StickerSetClient::create_sticker_set`]: crate::client::StickerSetClient::create_sticker_set
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputFile {
    /// A file on the local disk. It is read when the request is sent.
    LocalPath(PathBuf),
    /// A `file_id` of a file already on the Telegram servers, or an HTTP URL Telegram downloads
    /// the file from.
    RemoteId(String),
    /// Raw file content.
    Bytes { data: Vec<u8>, filename: String },
    /// The name of a part of the same multipart request, sent as `attach://<name>`.
    Attach(String),
}

impl InputFile {
    /// Builds an [`InputFile`] referring to a file on the local disk.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::LocalPath(path.into())
    }

    /// Builds an [`InputFile`] from a `file_id` or URL.
    pub fn remote(id: impl Into<String>) -> Self {
        Self::RemoteId(id.into())
    }

    /// Builds an [`InputFile`] from raw file data.
    pub fn bytes(data: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        Self::Bytes {
            data: data.into(),
            filename: filename.into(),
        }
    }

    /// Whether the content has to travel with the request as a multipart file part.
    #[must_use]
    pub fn needs_upload(&self) -> bool {
        matches!(self, Self::LocalPath(_) | Self::Bytes { .. })
    }

    /// The string this file is referenced by in a Bot API field, if it has one.
    ///
    /// Returns `None` for files that need uploading.
    #[must_use]
    pub fn reference(&self) -> Option<String> {
        match self {
            Self::RemoteId(id) => Some(id.clone()),
            Self::Attach(name) => Some(format!("{ATTACH_PREFIX}{name}")),
            Self::LocalPath(_) | Self::Bytes { .. } => None,
        }
    }

    /// The file name sent along with an uploaded part.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if a [`InputFile::LocalPath`] does not end in a file name.
    pub fn filename(&self) -> Result<Option<String>> {
        match self {
            Self::LocalPath(path) => filename_of(path).map(Some),
            Self::Bytes { filename, .. } => Ok(Some(filename.clone())),
            Self::RemoteId(_) | Self::Attach(_) => Ok(None),
        }
    }

    /// Loads the content of a file that needs uploading.
    ///
    /// Returns `None` for files referenced by string.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if reading the local file fails.
    pub async fn data(&self) -> Result<Option<Vec<u8>>> {
        match self {
            Self::LocalPath(path) => {
                let mut file = File::open(path).await?;
                let mut data = Vec::new();
                file.read_to_end(&mut data).await?;

                Ok(Some(data))
            },
            Self::Bytes { data, .. } => Ok(Some(data.clone())),
            Self::RemoteId(_) | Self::Attach(_) => Ok(None),
        }
    }
}

fn filename_of(path: &Path) -> Result<String> {
    let filename = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "attachment path must not be a directory")
    })?;

    Ok(filename.to_string_lossy().to_string())
}

impl serde::Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        match self.reference() {
            Some(reference) => serializer.serialize_str(&reference),
            None => Err(S::Error::custom("local files must be sent as an attachment")),
        }
    }
}

impl<'de> serde::Deserialize<'de> for InputFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        struct InputFileVisitor;

        impl Visitor<'_> for InputFileVisitor {
            type Value = InputFile;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a file_id, URL or attach:// reference")
            }

            fn visit_str<E: DeError>(self, value: &str) -> StdResult<InputFile, E> {
                Ok(match value.strip_prefix(ATTACH_PREFIX) {
                    Some(name) => InputFile::Attach(name.to_string()),
                    None => InputFile::RemoteId(value.to_string()),
                })
            }
        }

        deserializer.deserialize_str(InputFileVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::InputFile;
    use crate::json::json;

    #[test]
    fn upload_classification() {
        assert!(InputFile::path("./cats/tabby.webp").needs_upload());
        assert!(InputFile::bytes(vec![1, 2, 3], "a.png").needs_upload());
        assert!(!InputFile::remote("CAACAgIAAxkBAAE").needs_upload());
        assert!(!InputFile::Attach("sticker0".into()).needs_upload());
    }

    #[test]
    fn references_serialize_as_strings() {
        assert_eq!(serde_json::to_value(InputFile::remote("abc")).unwrap(), json!("abc"));
        assert_eq!(
            serde_json::to_value(InputFile::Attach("sticker3".into())).unwrap(),
            json!("attach://sticker3")
        );
        assert!(serde_json::to_value(InputFile::path("/tmp/a.webp")).is_err());
    }

    #[test]
    fn attach_references_deserialize() {
        let file: InputFile = serde_json::from_value(json!("attach://sticker1")).unwrap();
        assert_eq!(file, InputFile::Attach("sticker1".into()));

        let file: InputFile = serde_json::from_value(json!("https://example.com/a.webp")).unwrap();
        assert_eq!(file, InputFile::remote("https://example.com/a.webp"));
    }

    #[test]
    fn directory_paths_have_no_filename() {
        assert_eq!(InputFile::path("./stickers/cat.webp").filename().unwrap().as_deref(), Some("cat.webp"));
        assert!(InputFile::path("/").filename().is_err());
    }

    #[tokio::test]
    async fn local_data_is_read_from_disk() {
        let path = std::env::temp_dir().join(format!("tg-stickers-{}.webp", std::process::id()));
        tokio::fs::write(&path, b"RIFF").await.unwrap();

        let data = InputFile::path(&path).data().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(data.as_deref(), Some(&b"RIFF"[..]));
        assert_eq!(InputFile::remote("abc").data().await.unwrap(), None);
    }
}
