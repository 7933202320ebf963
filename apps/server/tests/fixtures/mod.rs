use folio_kernel::domain::config::SiteConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The site's real templates, so route tests exercise what ships.
pub fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

pub struct Site {
    pub dir: TempDir,
    pub config: SiteConfig,
}

pub fn site() -> Site {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();

    write(root, "posts/index.json", POSTS_INDEX);
    write(root, "posts/hello.md", "# Hello\n\n<video src=\"/assets/demo.mp4\"></video>\n");
    write(root, "posts/second.md", "Second body");
    write(root, "projects/index.json", PROJECTS_INDEX);
    write(root, "projects/folio.md", "Folio <script>alert(1)</script>");
    write(root, "assets/site.css", "body { margin: 0; }");

    let mut config = SiteConfig::default();
    config.content.root = root.to_path_buf();
    config.content.templates_dir = templates_dir();

    Site { dir, config }
}

pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, contents).expect("write fixture");
}

const POSTS_INDEX: &str = r#"{
    "posts": [
        {
            "id": "hello",
            "title": "Hello Folio",
            "file": "hello.md",
            "tags": [{ "name": "rust" }],
            "publish_date": "2024-03-01"
        },
        {
            "id": "second",
            "title": "Second Post",
            "file": "second.md",
            "tags": [{ "name": "web" }],
            "publish_date": "2024-04-01",
            "thumbnail": "/assets/second.png"
        }
    ]
}"#;

const PROJECTS_INDEX: &str = r#"{
    "projects": [
        {
            "id": "folio",
            "title": "Folio Project",
            "file": "folio.md",
            "github_link": "https://github.com/folio-site/folio"
        }
    ]
}"#;
