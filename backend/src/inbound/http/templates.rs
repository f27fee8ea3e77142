//! HTML page rendering.
//!
//! Templates are registered under `.html` names, so minijinja escapes every
//! interpolated value. Handlers pass plain data and never build markup.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::domain::{Comment, Error, User};

const HOME_TEMPLATE: &str = "home.html";
const PROFILE_TEMPLATE: &str = "profile.html";

/// Data shown on a profile page.
#[derive(Debug, Serialize)]
pub struct ProfileView<'a> {
    name: &'a str,
    email: &'a str,
    comments: Vec<&'a str>,
}

impl<'a> ProfileView<'a> {
    /// Collect the fields a profile page displays.
    pub fn new(user: &'a User, comments: &'a [Comment]) -> Self {
        Self {
            name: user.name(),
            email: user.email(),
            comments: comments.iter().map(Comment::text).collect(),
        }
    }
}

/// Compiled page templates.
///
/// # Examples
/// ```
/// use storefront::inbound::http::templates::Templates;
///
/// let templates = Templates::new().expect("bundled templates compile");
/// assert!(templates.home().expect("render").contains("Welcome to the Store"));
/// ```
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compile the bundled templates.
    ///
    /// # Errors
    /// Returns [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(HOME_TEMPLATE, include_str!("../../../templates/home.html"))?;
        env.add_template(
            PROFILE_TEMPLATE,
            include_str!("../../../templates/profile.html"),
        )?;
        Ok(Self { env })
    }

    /// Render the login page.
    pub fn home(&self) -> Result<String, Error> {
        self.render(HOME_TEMPLATE, context! {})
    }

    /// Render a user's profile with the comment list.
    pub fn profile(&self, view: &ProfileView<'_>) -> Result<String, Error> {
        self.render(PROFILE_TEMPLATE, view)
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, Error> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|error| Error::internal(format!("failed to render {name}: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::{fixture, rstest};

    #[fixture]
    fn templates() -> Templates {
        Templates::new().expect("templates compile")
    }

    fn alice() -> User {
        User::new(UserId::random(), "Alice", "alice@example.com", "password1")
    }

    #[rstest]
    fn home_posts_credentials_to_login(templates: Templates) {
        let page = templates.home().expect("home renders");
        assert!(page.contains(r#"<form action="/login" method="post">"#));
        assert!(page.contains(r#"name="email""#));
        assert!(page.contains(r#"name="password""#));
    }

    #[rstest]
    fn profile_lists_comments_in_order(templates: Templates) {
        let user = alice();
        let comments = vec![
            Comment::new("This is a comment").expect("valid"),
            Comment::new("nice shop").expect("valid"),
        ];
        let page = templates
            .profile(&ProfileView::new(&user, &comments))
            .expect("profile renders");

        assert!(page.contains("<p>Name: Alice</p>"));
        assert!(page.contains("<p>Email: alice@example.com</p>"));
        assert!(page.contains("<li>This is a comment</li><li>nice shop</li>"));
        assert!(page.contains("window.location.reload()"));
    }

    #[rstest]
    fn profile_escapes_interpolated_values(templates: Templates) {
        let user = User::new(
            UserId::random(),
            "<script>alert(1)</script>",
            "a&b@example.com",
            "pw",
        );
        let page = templates
            .profile(&ProfileView::new(&user, &[]))
            .expect("profile renders");

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("a&amp;b@example.com"));
    }
}
