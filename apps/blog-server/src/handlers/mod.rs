//! HTTP handlers and route configuration.

mod auth;
mod files;
mod forms;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Posts
        .route("/", web::get().to(posts::home))
        .route("/compose", web::get().to(posts::compose_form))
        .route("/compose", web::post().to(posts::compose))
        .route("/posts/{post_id}", web::get().to(posts::show))
        .route("/posts/{post_id}/edit", web::get().to(posts::edit_form))
        .route("/posts/{post_id}/edit", web::post().to(posts::edit))
        .route("/posts/{post_id}/delete", web::post().to(posts::delete))
        // Auth
        .route("/register", web::get().to(auth::register_form))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::get().to(auth::login_form))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::get().to(auth::logout))
        // Attachments
        .route("/uploads/view/{filename}", web::get().to(files::view))
        .route("/uploads/download/{filename}", web::get().to(files::download))
        // Ops
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}
