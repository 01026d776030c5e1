//! Server-rendered HTML views.
//!
//! The pages are small enough that they are rendered by plain formatting
//! functions; every interpolated value goes through [`escape`].

use quill_core::domain::Post;

/// Escape a string for interpolation into HTML text or attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - Quill</title>\n\
         </head>\n\
         <body>\n\
         <h1><a href=\"/\">Quill</a></h1>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        body = body,
    )
}

/// Home page: the signed-in user's posts, or a login prompt.
pub fn home(username: Option<&str>, posts: &[Post]) -> String {
    let mut body = String::new();

    match username {
        Some(name) => {
            body.push_str(&format!(
                "<p>Signed in as {} | <a href=\"/compose\">Compose</a> | \
                 <a href=\"/logout\">Log out</a></p>\n",
                escape(name)
            ));
            if posts.is_empty() {
                body.push_str("<p>No posts yet.</p>\n");
            } else {
                body.push_str("<ul>\n");
                for post in posts {
                    body.push_str(&format!(
                        "<li><a href=\"/posts/{}\">{}</a></li>\n",
                        post.id,
                        escape(&post.title)
                    ));
                }
                body.push_str("</ul>\n");
            }
        }
        None => {
            body.push_str(
                "<p><a href=\"/login\">Log in</a> or \
                 <a href=\"/register\">register</a> to see your posts.</p>\n",
            );
        }
    }

    layout("Home", &body)
}

/// Compose form.
pub fn compose() -> String {
    let body = "<h2>Compose</h2>\n\
         <form action=\"/compose\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <p><input type=\"text\" name=\"post_title\" placeholder=\"Title\"></p>\n\
         <p><textarea name=\"post_body\" rows=\"10\" cols=\"60\"></textarea></p>\n\
         <p><input type=\"file\" name=\"uploaded_file\"></p>\n\
         <p><button type=\"submit\">Publish</button></p>\n\
         </form>\n";

    layout("Compose", body)
}

/// Post detail page.
pub fn post_detail(post: &Post) -> String {
    let mut body = format!(
        "<h2>{}</h2>\n<p>{}</p>\n",
        escape(&post.title),
        escape(&post.content)
    );

    if let Some(file) = &post.file {
        body.push_str(&format!(
            "<p>Attachment: <a href=\"/uploads/view/{name}\">view</a> | \
             <a href=\"/uploads/download/{name}\">download</a></p>\n",
            name = escape(file)
        ));
    }

    body.push_str(&format!(
        "<p><a href=\"/posts/{id}/edit\">Edit</a></p>\n\
         <form action=\"/posts/{id}/delete\" method=\"post\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n",
        id = post.id
    ));

    layout(&post.title, &body)
}

/// Edit form, pre-filled with the post's current values.
pub fn edit(post: &Post) -> String {
    let mut body = format!(
        "<h2>Edit</h2>\n\
         <form action=\"/posts/{id}/edit\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <p><input type=\"text\" name=\"post_title\" value=\"{title}\"></p>\n\
         <p><textarea name=\"post_body\" rows=\"10\" cols=\"60\">{content}</textarea></p>\n",
        id = post.id,
        title = escape(&post.title),
        content = escape(&post.content),
    );

    if let Some(file) = &post.file {
        body.push_str(&format!(
            "<p>Current attachment: {}</p>\n",
            escape(file)
        ));
    }

    body.push_str(
        "<p><input type=\"file\" name=\"myfile\"></p>\n\
         <p><button type=\"submit\">Save</button></p>\n\
         </form>\n",
    );

    layout("Edit", &body)
}

/// Login form.
pub fn login() -> String {
    let body = "<h2>Log in</h2>\n\
         <form action=\"/login\" method=\"post\">\n\
         <p><input type=\"text\" name=\"username\" placeholder=\"Username\"></p>\n\
         <p><input type=\"password\" name=\"password\" placeholder=\"Password\"></p>\n\
         <p><button type=\"submit\">Log in</button></p>\n\
         </form>\n\
         <p><a href=\"/register\">Register</a></p>\n";

    layout("Log in", body)
}

/// Registration form.
pub fn register() -> String {
    let body = "<h2>Register</h2>\n\
         <form action=\"/register\" method=\"post\">\n\
         <p><input type=\"text\" name=\"username\" placeholder=\"Username\"></p>\n\
         <p><input type=\"password\" name=\"password\" placeholder=\"Password\"></p>\n\
         <p><button type=\"submit\">Register</button></p>\n\
         </form>\n\
         <p><a href=\"/login\">Log in</a></p>\n";

    layout("Register", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_detail_escapes_title_and_links_attachment() {
        let post = Post::new(
            Uuid::new_v4(),
            "<script>".into(),
            "body".into(),
            Some("1700000000000.png".into()),
        );
        let html = post_detail(&post);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("/uploads/view/1700000000000.png"));
        assert!(html.contains("/uploads/download/1700000000000.png"));
    }

    #[test]
    fn test_home_anonymous_offers_login() {
        let html = home(None, &[]);
        assert!(html.contains("/login"));
        assert!(html.contains("/register"));
    }
}
