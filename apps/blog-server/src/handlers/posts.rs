//! Post CRUD handlers.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use quill_core::domain::Post;

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

use super::forms::read_post_submission;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Fetch a post and enforce ownership: 404 when absent, 403 when the
/// session user is not the author.
async fn owned_post(state: &AppState, post_id: Uuid, identity: &Identity) -> AppResult<Post> {
    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

    if !post.is_authored_by(identity.user_id) {
        return Err(AppError::Forbidden);
    }

    Ok(post)
}

/// GET / - the session user's posts, or a login prompt when anonymous.
pub async fn home(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let page = match identity.0 {
        Some(identity) => {
            let posts = state.posts.list_by_author(identity.user_id).await?;
            views::home(Some(&identity.username), &posts)
        }
        None => views::home(None, &[]),
    };

    Ok(html(page))
}

/// GET /compose
pub async fn compose_form(_identity: Identity) -> HttpResponse {
    html(views::compose())
}

/// POST /compose (multipart: post_title, post_body, optional uploaded_file)
pub async fn compose(
    state: web::Data<AppState>,
    identity: Identity,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let submission = read_post_submission(payload, "uploaded_file").await?;

    let stored = match submission.file {
        Some(upload) => Some(
            state
                .files
                .store(&upload.original_name, &upload.data)
                .await?,
        ),
        None => None,
    };

    let post = Post::new(identity.user_id, submission.title, submission.content, stored);
    let post = state.posts.insert(post).await?;
    tracing::debug!(post_id = %post.id, "Post created");

    Ok(redirect("/"))
}

/// GET /posts/{post_id}
pub async fn show(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = owned_post(&state, path.into_inner(), &identity).await?;

    Ok(html(views::post_detail(&post)))
}

/// GET /posts/{post_id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = owned_post(&state, path.into_inner(), &identity).await?;

    Ok(html(views::edit(&post)))
}

/// POST /posts/{post_id}/edit (multipart: post_title, post_body, optional myfile)
pub async fn edit(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let mut post = owned_post(&state, post_id, &identity).await?;

    let submission = read_post_submission(payload, "myfile").await?;

    // A replacement upload evicts the previous attachment from disk first.
    if let Some(upload) = submission.file {
        if let Some(old) = &post.file {
            state.files.remove(old).await?;
        }
        post.file = Some(
            state
                .files
                .store(&upload.original_name, &upload.data)
                .await?,
        );
    }

    post.title = submission.title;
    post.content = submission.content;
    post.updated_at = chrono::Utc::now();

    state.posts.update(post).await?;

    Ok(redirect(&format!("/posts/{}", post_id)))
}

/// POST /posts/{post_id}/delete
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = owned_post(&state, path.into_inner(), &identity).await?;

    state.posts.delete(post.id).await?;

    if let Some(file) = &post.file {
        state.files.remove(file).await?;
    }

    tracing::debug!(post_id = %post.id, "Post deleted");

    Ok(redirect("/"))
}
