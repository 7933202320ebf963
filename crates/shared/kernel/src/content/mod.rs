//! Read access to the post and project indexes.
//!
//! Indexes and bodies are read from disk on every call so edits show up
//! without a restart. All methods are blocking; async callers should move
//! them onto a blocking thread.

mod markup;

pub use self::markup::{MarkdownMode, render_markdown};

use folio_domain::config::ContentConfig;
use folio_domain::constants::INDEX_FILE;
use folio_domain::content::{Post, PostEntry, PostIndex, Project, ProjectEntry, ProjectIndex};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[folio_derive::folio_error]
pub enum ContentError {
    #[error("Content I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed content index{}: {source}", format_context(.context))]
    Index { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Content not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Markdown rendering failed{}: {message}", format_context(.context))]
    Markdown { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal content error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ContentError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    posts_dir: PathBuf,
    projects_dir: PathBuf,
}

impl ContentStore {
    pub fn new(posts_dir: impl Into<PathBuf>, projects_dir: impl Into<PathBuf>) -> Self {
        Self { posts_dir: posts_dir.into(), projects_dir: projects_dir.into() }
    }

    #[must_use]
    pub fn from_config(cfg: &ContentConfig) -> Self {
        Self::new(cfg.posts_path(), cfg.projects_path())
    }

    /// Raw post index entries, in index order.
    ///
    /// # Errors
    /// Fails if the index is missing or malformed.
    pub fn post_entries(&self) -> Result<Vec<PostEntry>, ContentError> {
        read_index::<PostIndex>(&self.posts_dir).map(|index| index.posts)
    }

    /// Raw project index entries, in index order.
    ///
    /// # Errors
    /// Fails if the index is missing or malformed.
    pub fn project_entries(&self) -> Result<Vec<ProjectEntry>, ContentError> {
        read_index::<ProjectIndex>(&self.projects_dir).map(|index| index.projects)
    }

    /// Every post with its markdown source as content.
    ///
    /// # Errors
    /// Fails on a missing/malformed index or an unreadable body file.
    pub fn posts(&self) -> Result<Vec<Post>, ContentError> {
        self.post_entries()?
            .iter()
            .map(|entry| -> Result<Post, ContentError> {
                Ok(Post::from_entry(entry, self.read_post_body(entry)?))
            })
            .collect()
    }

    /// Posts carrying `tag` (exact match), markdown source as content.
    ///
    /// # Errors
    /// Same as [`ContentStore::posts`]. Bodies of non-matching posts are not read.
    pub fn posts_tagged(&self, tag: &str) -> Result<Vec<Post>, ContentError> {
        self.post_entries()?
            .iter()
            .filter(|entry| entry.has_tag(tag))
            .map(|entry| -> Result<Post, ContentError> {
                Ok(Post::from_entry(entry, self.read_post_body(entry)?))
            })
            .collect()
    }

    /// One post with its body rendered to HTML. Raw HTML in the body is kept.
    ///
    /// # Errors
    /// [`ContentError::NotFound`] for an unknown id, plus the index/body errors.
    pub fn post(&self, id: &str) -> Result<Post, ContentError> {
        let entries = self.post_entries()?;
        let entry = entries.iter().find(|entry| entry.id == id).ok_or_else(|| {
            ContentError::NotFound { message: format!("post '{id}'").into(), context: None }
        })?;

        let source = self.read_post_body(entry)?;
        let html = render_markdown(&source, MarkdownMode::Trusted)
            .context(format!("post '{id}'"))?;
        Ok(Post::from_entry(entry, html))
    }

    /// Every project with its markdown source as content.
    ///
    /// # Errors
    /// Fails on a missing/malformed index or an unreadable body file.
    pub fn projects(&self) -> Result<Vec<Project>, ContentError> {
        self.project_entries()?
            .iter()
            .map(|entry| -> Result<Project, ContentError> {
                Ok(Project::from_entry(entry, self.read_project_body(entry)?))
            })
            .collect()
    }

    /// One project with its body rendered to HTML. Raw HTML in the body is escaped.
    ///
    /// # Errors
    /// [`ContentError::NotFound`] for an unknown id, plus the index/body errors.
    pub fn project(&self, id: &str) -> Result<Project, ContentError> {
        let entries = self.project_entries()?;
        let entry = entries.iter().find(|entry| entry.id == id).ok_or_else(|| {
            ContentError::NotFound { message: format!("project '{id}'").into(), context: None }
        })?;

        let source = self.read_project_body(entry)?;
        let html = render_markdown(&source, MarkdownMode::Standard)
            .context(format!("project '{id}'"))?;
        Ok(Project::from_entry(entry, html))
    }

    fn read_post_body(&self, entry: &PostEntry) -> Result<String, ContentError> {
        read_body(&self.posts_dir, &entry.file)
    }

    fn read_project_body(&self, entry: &ProjectEntry) -> Result<String, ContentError> {
        read_body(&self.projects_dir, &entry.file)
    }
}

fn read_index<T: DeserializeOwned>(dir: &Path) -> Result<T, ContentError> {
    let path = dir.join(INDEX_FILE);
    debug!(path = %path.display(), "Reading content index");

    let raw = fs::read_to_string(&path).context(format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).context(format!("parsing {}", path.display()))
}

fn read_body(dir: &Path, file: &str) -> Result<String, ContentError> {
    let relative = Path::new(file);
    if relative.is_absolute()
        || relative.components().any(|c| matches!(c, std::path::Component::ParentDir))
    {
        return Err(ContentError::NotFound {
            message: format!("body file '{file}' escapes the content directory").into(),
            context: None,
        });
    }

    let path = dir.join(relative);
    fs::read_to_string(&path).context(format!("reading {}", path.display()))
}
