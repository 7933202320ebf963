use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Site {
    dir: TempDir,
}

impl Site {
    fn new(style: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let site = Self { dir };

        site.write("templates/index.html", r#"<main class="font-sans"></main>"#);
        site.write("templates/posts.html", r#"<section class="space-y-8"></section>"#);
        site.write("templates/notes.txt", "not a template");
        site.write(
            "posts/index.json",
            r#"{ "posts": [{ "id": "hello", "title": "Hello", "file": "hello.md", "publish_date": "2024-03-01" }] }"#,
        );
        site.write("posts/hello.md", "# Hello");
        site.write(
            "projects/index.json",
            r#"{ "projects": [{ "id": "folio", "title": "Folio", "file": "folio.md", "github_link": "https://example.com" }] }"#,
        );
        site.write("projects/folio.md", "Folio");

        let config = format!(
            "[content]\nroot = {root:?}\n\n[logging]\nconsole = \"off\"\n\n{style}",
            root = site.root().display().to_string(),
        );
        site.write("folio.toml", &config);
        site
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn config(&self) -> PathBuf {
        self.root().join("folio.toml")
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(path, contents).expect("write fixture");
    }

    fn folio(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("Failed to locate folio binary");
        cmd.current_dir(self.root());
        cmd
    }
}

const DEFAULT_STYLE: &str = r#"
[style]
content = ["./templates/*.html"]
plugins = []

[style.theme.extend.fontFamily]
sans = ["Chakra Petch"]
"#;

#[test]
fn no_arguments_prints_help() {
    Command::cargo_bin("folio")
        .expect("Failed to locate folio binary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn style_check_lists_matched_templates() {
    let site = Site::new(DEFAULT_STYLE);

    site.folio()
        .args(["style", "check", "--config"])
        .arg(site.config())
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"))
        .stdout(predicate::str::contains("posts.html"))
        .stdout(predicate::str::contains("notes.txt").not())
        .stdout(predicate::str::contains("2 file(s) matched by 1 pattern(s)"));
}

#[test]
fn style_check_uses_folio_toml_in_working_directory() {
    let site = Site::new(DEFAULT_STYLE);

    site.folio().args(["style", "check"]).assert().success();
}

#[test]
fn numeric_environment_overrides_load() {
    let site = Site::new(DEFAULT_STYLE);

    site.folio()
        .args(["style", "check", "--config"])
        .arg(site.config())
        .env("FOLIO__SERVER__PORT", "8080")
        .env("FOLIO__LOGGING__JSON_FILE", "false")
        .assert()
        .success();

    site.folio()
        .args(["style", "check", "--config"])
        .arg(site.config())
        .env("FOLIO__SERVER__PORT", "not-a-port")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn style_check_rejects_empty_content() {
    let site = Site::new("[style]\ncontent = []\n");

    site.folio()
        .args(["style", "check", "--config"])
        .arg(site.config())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Style configuration is invalid"));
}

#[test]
fn style_export_writes_module_to_stdout() {
    let site = Site::new(DEFAULT_STYLE);

    site.folio()
        .args(["style", "export", "--config"])
        .arg(site.config())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/** @type {import('tailwindcss').Config} */"))
        .stdout(predicate::str::contains("content: ['./templates/*.html'],"))
        .stdout(predicate::str::contains(
            r#"'sans': ['"Chakra Petch"', ...defaultTheme.fontFamily.sans],"#,
        ))
        .stdout(predicate::str::contains("plugins: [],"));
}

#[test]
fn style_export_json_to_file() {
    let site = Site::new(DEFAULT_STYLE);
    let output = site.root().join("style.json");

    site.folio()
        .args(["style", "export", "--format", "json", "--config"])
        .arg(site.config())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).expect("export written");
    let json: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(json["content"][0], "./templates/*.html");
    assert_eq!(json["theme"]["extend"]["fontFamily"]["sans"][0], "Chakra Petch");
    assert_eq!(json["plugins"].as_array().map(Vec::len), Some(0));
}

#[test]
fn style_export_rejects_unknown_format() {
    let site = Site::new(DEFAULT_STYLE);

    site.folio()
        .args(["style", "export", "--format", "yaml", "--config"])
        .arg(site.config())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn content_check_passes_for_valid_site() {
    let site = Site::new(DEFAULT_STYLE);

    site.folio()
        .args(["content", "check", "--config"])
        .arg(site.config())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok    post hello"))
        .stdout(predicate::str::contains("ok    project folio"))
        .stdout(predicate::str::contains("All content OK"));
}

#[test]
fn content_check_reports_missing_body() {
    let site = Site::new(DEFAULT_STYLE);
    fs::remove_file(site.root().join("posts/hello.md")).expect("remove body");

    site.folio()
        .args(["content", "check", "--config"])
        .arg(site.config())
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL  post hello"))
        .stdout(predicate::str::contains("ok    project folio"))
        .stderr(predicate::str::contains("1 content check(s) failed"));
}

#[test]
fn content_check_reports_malformed_index() {
    let site = Site::new(DEFAULT_STYLE);
    site.write("projects/index.json", "{ \"projects\": ");

    site.folio()
        .args(["content", "check", "--config"])
        .arg(site.config())
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL  project index"));
}

#[test]
fn missing_config_file_fails() {
    let site = Site::new(DEFAULT_STYLE);

    site.folio()
        .args(["content", "check", "--config"])
        .arg(site.root().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
