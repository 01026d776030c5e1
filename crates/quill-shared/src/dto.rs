//! Data Transfer Objects - the form payloads the routes accept.

use serde::{Deserialize, Serialize};

/// Registration form body (urlencoded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

/// Login form body (urlencoded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// A parsed compose/edit submission. The multipart body carries
/// `post_title`, `post_body` and an optional file part; the file part is
/// already read to bytes by the time this exists.
#[derive(Debug, Clone, Default)]
pub struct PostSubmission {
    pub title: String,
    pub content: String,
    pub file: Option<UploadedFile>,
}

/// An uploaded file pulled out of a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub data: Vec<u8>,
}
