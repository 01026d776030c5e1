//! Session-based authentication extractors.

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, http::header, web};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use quill_shared::ErrorResponse;

use crate::state::AppState;

/// Name of the cookie carrying the opaque session identifier.
pub const SESSION_COOKIE: &str = "quill_session";

/// Authenticated user identity extractor.
///
/// Resolves the session cookie against the session store. Use this in
/// handlers to require authentication:
/// ```ignore
/// async fn compose_form(identity: Identity) -> impl Responder { ... }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub session_id: Uuid,
}

/// Error type for authentication failures.
///
/// Anonymous clients on guarded routes are redirected to the login form
/// rather than handed a bare 401, since the guarded surface is HTML pages.
#[derive(Debug)]
pub enum AuthenticationError {
    /// No usable session; send the client to the login form.
    Anonymous,
    /// The session store could not be consulted.
    Internal(String),
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticationError::Anonymous => write!(f, "Not authenticated"),
            AuthenticationError::Internal(msg) => write!(f, "Authentication failed: {}", msg),
        }
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            AuthenticationError::Anonymous => actix_web::http::StatusCode::FOUND,
            AuthenticationError::Internal(_) => {
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AuthenticationError::Anonymous => HttpResponse::Found()
                .insert_header((header::LOCATION, "/login"))
                .finish(),
            AuthenticationError::Internal(msg) => {
                tracing::error!("Session lookup failed: {}", msg);
                HttpResponse::InternalServerError().json(ErrorResponse::internal_error())
            }
        }
    }
}

/// Pull the session id out of the request cookie, if any.
fn session_id_from_request(req: &HttpRequest) -> Option<Uuid> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    Uuid::parse_str(cookie.value()).ok()
}

async fn resolve_identity(
    req: HttpRequest,
) -> Result<Identity, AuthenticationError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| {
            tracing::error!("AppState not found in app data");
            AuthenticationError::Internal("Server configuration error".to_string())
        })?
        .clone();

    let session_id =
        session_id_from_request(&req).ok_or(AuthenticationError::Anonymous)?;

    let session = state
        .sessions
        .find_by_id(session_id)
        .await
        .map_err(|e| AuthenticationError::Internal(e.to_string()))?
        .ok_or(AuthenticationError::Anonymous)?;

    let user = state
        .users
        .find_by_id(session.user_id)
        .await
        .map_err(|e| AuthenticationError::Internal(e.to_string()))?
        .ok_or(AuthenticationError::Anonymous)?;

    Ok(Identity {
        user_id: user.id,
        username: user.username,
        session_id,
    })
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(resolve_identity(req))
    }
}

/// Optional identity extractor - doesn't fail if not authenticated.
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve_identity(req).await {
                Ok(identity) => Ok(OptionalIdentity(Some(identity))),
                Err(_) => Ok(OptionalIdentity(None)),
            }
        })
    }
}
