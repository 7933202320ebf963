//! Content index records (`posts/index.json`, `projects/index.json`) and the
//! view models handed to templates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIndex {
    pub posts: Vec<PostEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    pub id: String,
    pub title: String,
    /// Markdown body, relative to the posts directory.
    pub file: String,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    pub publish_date: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIndex {
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub file: String,
    pub github_link: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl PostEntry {
    /// Exact, case-sensitive tag match.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.name == tag)
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }
}

/// A post ready for a template. `content` is raw markdown in list views and
/// rendered HTML in the single-post view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub publish_date: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub github_link: String,
    pub content: String,
    pub thumbnail: Option<String>,
}

impl Post {
    #[must_use]
    pub fn from_entry(entry: &PostEntry, content: String) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            content,
            tags: entry.tag_names().map(str::to_owned).collect(),
            publish_date: entry.publish_date.clone(),
            thumbnail: entry.thumbnail.clone(),
        }
    }
}

impl Project {
    #[must_use]
    pub fn from_entry(entry: &ProjectEntry, content: String) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            github_link: entry.github_link.clone(),
            content,
            thumbnail: entry.thumbnail.clone(),
        }
    }
}
