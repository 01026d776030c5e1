//! Authentication handlers: register, login, logout.

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use actix_web::cookie::{Cookie, SameSite};
use uuid::Uuid;

use quill_core::domain::{Session, User};
use quill_core::error::RepoError;
use quill_shared::dto::{LoginForm, RegisterForm};

use crate::middleware::auth::SESSION_COOKIE;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

fn session_cookie(session_id: Uuid) -> Cookie<'static> {
    // Browser-session lifetime: no Max-Age.
    Cookie::build(SESSION_COOKIE, session_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Open a session for the user and redirect home with the cookie set.
async fn establish_session(state: &AppState, user_id: Uuid) -> AppResult<HttpResponse> {
    let session = state.sessions.insert(Session::new(user_id)).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(session_cookie(session.id))
        .finish())
}

/// GET /register
pub async fn register_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::register())
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = body.into_inner();

    if form.username.is_empty() || form.password.is_empty() {
        return Ok(redirect("/register"));
    }

    let password_hash = state.passwords.hash(&form.password)?;
    let user = User::new(form.username, password_hash);

    match state.users.insert(user).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "User registered");
            establish_session(&state, user.id).await
        }
        // Duplicate username: back to the registration form.
        Err(RepoError::Constraint(_)) => Ok(redirect("/register")),
        Err(e) => Err(e.into()),
    }
}

/// GET /login
pub async fn login_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::login())
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = body.into_inner();

    let Some(user) = state.users.find_by_username(&form.username).await? else {
        return Ok(redirect("/login"));
    };

    if !state.passwords.verify(&form.password, &user.password_hash)? {
        return Ok(redirect("/login"));
    }

    tracing::info!(username = %user.username, "User logged in");
    establish_session(&state, user.id).await
}

/// GET /logout
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Ok(session_id) = Uuid::parse_str(cookie.value()) {
            // A stale cookie for an already-deleted session is fine.
            match state.sessions.delete(session_id).await {
                Ok(()) | Err(RepoError::NotFound) => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    removal.make_removal();

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(removal)
        .finish())
}
