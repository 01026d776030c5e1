//! Multipart form parsing for compose/edit submissions.

use actix_multipart::Multipart;
use futures_util::StreamExt;

use quill_shared::dto::{PostSubmission, UploadedFile};

use crate::middleware::error::AppError;

/// Read a compose/edit multipart body. Text fields are `post_title` and
/// `post_body`; `file_field` names the optional file part (`uploaded_file`
/// on compose, `myfile` on edit). Unknown fields are ignored; a file part
/// with no filename or no bytes counts as "no upload".
pub async fn read_post_submission(
    mut payload: Multipart,
    file_field: &str,
) -> Result<PostSubmission, AppError> {
    let mut submission = PostSubmission::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("Multipart error: {}", e)))?;

        let name = field.name().unwrap_or("").to_string();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes =
                chunk.map_err(|e| AppError::BadRequest(format!("Upload read error: {}", e)))?;
            data.extend_from_slice(&bytes);
        }

        if name == "post_title" {
            submission.title = String::from_utf8_lossy(&data).into_owned();
        } else if name == "post_body" {
            submission.content = String::from_utf8_lossy(&data).into_owned();
        } else if name == file_field {
            match filename {
                Some(original_name) if !original_name.is_empty() && !data.is_empty() => {
                    submission.file = Some(UploadedFile {
                        original_name,
                        data,
                    });
                }
                // Browsers submit an empty file part when nothing was picked.
                _ => {}
            }
        }
    }

    Ok(submission)
}
