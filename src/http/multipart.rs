use reqwest::multipart::{Form, Part};

use super::{Attachment, Params};
use crate::internal::prelude::*;

/// Holder for multipart body. Contains files and the multipart text fields sent alongside them.
#[derive(Clone, Debug)]
pub struct Multipart {
    pub files: Vec<Attachment>,
    /// Multipart text fields that are sent with the form data as individual fields.
    pub fields: Params,
}

impl Multipart {
    pub(crate) async fn build_form(self) -> Result<Form> {
        let mut multipart = Form::new();

        for Attachment {
            name,
            file,
        } in self.files
        {
            // Files already known to Telegram travel as plain text fields under the part name.
            if let Some(reference) = file.reference() {
                multipart = multipart.text(name, reference);
                continue;
            }

            let filename = file.filename()?;
            let data = file.data().await?.unwrap_or_default();

            let mut part = Part::bytes(data);
            if let Some(filename) = filename {
                part = guess_mime_str(part, &filename)?;
                part = part.file_name(filename);
            }
            multipart = multipart.part(name, part);
        }

        for (name, value) in self.fields {
            multipart = multipart.text(name, value);
        }

        Ok(multipart)
    }
}

fn guess_mime_str(part: Part, filename: &str) -> Result<Part> {
    // The Bot API sniffs `.webp`, `.tgs` and `.webm` uploads by their content type, so set the
    // same type reqwest would pick for `Part::file()`.
    // https://datatracker.ietf.org/doc/html/rfc7578#section-4.4
    let mime_type = mime_guess::from_path(filename).first_or_octet_stream();
    part.mime_str(mime_type.essence_str()).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::InputFile;

    #[tokio::test]
    async fn missing_local_files_fail_before_sending() {
        let multipart = Multipart {
            files: vec![Attachment::new(
                "sticker0",
                InputFile::path("./this/file/does/not/exist.webp"),
            )],
            fields: Params::new(),
        };

        assert!(matches!(multipart.build_form().await, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn in_memory_and_remote_files_build() {
        let mut fields = Params::new();
        fields.insert("user_id", "42");

        let multipart = Multipart {
            files: vec![
                Attachment::new("sticker0", InputFile::bytes(b"RIFF".to_vec(), "a.webp")),
                Attachment::new("thumbnail", InputFile::remote("AgACAgIAAxkBAAE")),
            ],
            fields,
        };

        let form = multipart.build_form().await.unwrap();
        assert!(!form.boundary().is_empty());
    }
}
