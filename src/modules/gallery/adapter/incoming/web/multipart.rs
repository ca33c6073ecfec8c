use actix_multipart::{Field, Multipart};
use futures::TryStreamExt;

use crate::modules::gallery::domain::entities::MediaInput;

/// Upper bound for plain text parts such as `name`.
const MAX_TEXT_FIELD_BYTES: usize = 4 * 1024;

/// Parts of a gallery create/replace form. Every part is optional here;
/// the use cases decide which ones are required.
#[derive(Debug, Default)]
pub struct GalleryForm {
    pub name: Option<String>,
    pub image: Option<MediaInput>,
    pub video: Option<MediaInput>,
}

#[derive(Debug, thiserror::Error)]
pub enum GalleryFormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Field '{field}' exceeds the maximum size of {limit} bytes")]
    TooLarge { field: String, limit: usize },

    #[error("Field '{0}' must be valid UTF-8 text")]
    InvalidText(String),
}

/// Reads the whole multipart body into memory, enforcing `max_file_bytes`
/// on each file part. Unknown parts are skipped.
pub async fn read_gallery_form(
    mut payload: Multipart,
    max_file_bytes: usize,
) -> Result<GalleryForm, GalleryFormError> {
    let mut form = GalleryForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| GalleryFormError::Malformed(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "name" => {
                let bytes = read_field(&mut field, &field_name, MAX_TEXT_FIELD_BYTES).await?;
                let text = String::from_utf8(bytes)
                    .map_err(|_| GalleryFormError::InvalidText(field_name.clone()))?;
                form.name = Some(text);
            }
            "image" | "video" => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .map(str::to_string);
                let content_type = field.content_type().map(|mime| mime.to_string());
                let bytes = read_field(&mut field, &field_name, max_file_bytes).await?;

                let input = MediaInput {
                    bytes,
                    file_name,
                    content_type,
                };

                if field_name == "image" {
                    form.image = Some(input);
                } else {
                    form.video = Some(input);
                }
            }
            _ => {
                while field
                    .try_next()
                    .await
                    .map_err(|e| GalleryFormError::Malformed(e.to_string()))?
                    .is_some()
                {}
            }
        }
    }

    Ok(form)
}

async fn read_field(
    field: &mut Field,
    field_name: &str,
    limit: usize,
) -> Result<Vec<u8>, GalleryFormError> {
    let mut buf = Vec::new();

    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| GalleryFormError::Malformed(e.to_string()))?
    {
        if buf.len() + chunk.len() > limit {
            return Err(GalleryFormError::TooLarge {
                field: field_name.to_string(),
                limit,
            });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

/// OpenAPI shape of the multipart body accepted by create and replace.
#[derive(utoipa::ToSchema)]
pub struct GalleryUploadForm {
    #[schema(example = "Desk Lamp")]
    pub name: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub video: Option<Vec<u8>>,
}
