//! Attachment retrieval handlers.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Content type by file extension.
fn content_type_for(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().map(|e| e.to_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",
        Some("mp4") => "video/mp4",
        Some("mp3") => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

async fn serve(
    state: &AppState,
    filename: &str,
    disposition: DispositionType,
) -> AppResult<HttpResponse> {
    // The store rejects traversal names itself; they come back as absent.
    let Some(data) = state.files.read(filename).await? else {
        return Err(AppError::NotFound(format!("File {} not found", filename)));
    };

    Ok(HttpResponse::Ok()
        .content_type(content_type_for(filename))
        .insert_header(ContentDisposition {
            disposition,
            parameters: vec![DispositionParam::Filename(filename.to_string())],
        })
        .body(data))
}

/// GET /uploads/view/{filename} - serve inline.
pub async fn view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    serve(&state, &path.into_inner(), DispositionType::Inline).await
}

/// GET /uploads/download/{filename} - serve as a forced download.
pub async fn download(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    serve(&state, &path.into_inner(), DispositionType::Attachment).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("1700000000000.PNG"), "image/png");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
        assert_eq!(content_type_for("archive.tar.gz"), "application/octet-stream");
    }
}
