//! HTML page templates.
//!
//! Templates live in the configured templates directory and are loaded
//! through a minijinja path loader. `.html` templates are auto-escaped;
//! rendered markdown is inserted with the `safe` filter.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[folio_derive::folio_error]
pub enum RenderError {
    #[error("Template error{}: {source}", format_context(.context))]
    Template { source: minijinja::Error, context: Option<Cow<'static, str>> },

    #[error("Templates directory missing{}: {message}", format_context(.context))]
    MissingDirectory { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Every page the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Full-document shell; loads `start_link` into the content area.
    Index,
    Posts,
    Post,
    Projects,
    Project,
    About,
}

impl Page {
    pub const ALL: [Self; 6] =
        [Self::Index, Self::Posts, Self::Post, Self::Projects, Self::Project, Self::About];

    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Posts => "posts.html",
            Self::Post => "post.html",
            Self::Projects => "projects.html",
            Self::Project => "project.html",
            Self::About => "about.html",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

/// Cheaply cloneable template renderer.
#[derive(Debug, Clone)]
pub struct Renderer {
    env: Arc<Environment<'static>>,
    dir: PathBuf,
}

impl Renderer {
    /// Creates a renderer over `dir` and checks that every [`Page`] template
    /// loads and parses.
    ///
    /// # Errors
    /// [`RenderError::MissingDirectory`] if `dir` is not a directory,
    /// [`RenderError::Template`] for a missing or broken template.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(RenderError::MissingDirectory {
                message: dir.display().to_string().into(),
                context: None,
            });
        }

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_loader(minijinja::path_loader(&dir));

        for page in Page::ALL {
            env.get_template(page.template()).context(format!("loading {page}"))?;
        }
        debug!(dir = %dir.display(), "Templates loaded");

        Ok(Self { env: Arc::new(env), dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Renders `page` with `ctx` as its context.
    ///
    /// # Errors
    /// [`RenderError::Template`] if rendering fails (e.g. an undefined variable).
    pub fn render<S: Serialize>(&self, page: Page, ctx: S) -> Result<String, RenderError> {
        let template = self.env.get_template(page.template()).context(format!("loading {page}"))?;
        template.render(ctx).context(format!("rendering {page}"))
    }
}
