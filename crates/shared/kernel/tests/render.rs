use folio_kernel::render::{Page, RenderError, Renderer};
use minijinja::context;
use std::fs;
use std::path::PathBuf;

fn shipped_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../templates")
}

#[test]
fn shipped_templates_load() {
    let renderer = Renderer::new(shipped_templates()).expect("templates load");
    assert!(renderer.dir().ends_with("templates"));
}

#[test]
fn shell_points_htmx_at_the_start_link() {
    let renderer = Renderer::new(shipped_templates()).expect("templates load");
    let html = renderer.render(Page::Index, context! { start_link => "/projects" }).expect("render");

    // Auto-escaping may encode `/` inside the attribute.
    assert!(html.contains(r#"hx-get="/projects""#) || html.contains(r#"hx-get="&#x2f;projects""#));
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Renderer::new(dir.path().join("nope")).expect_err("missing dir");
    assert!(matches!(err, RenderError::MissingDirectory { .. }));
}

#[test]
fn missing_page_template_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("index.html"), "{{ start_link }}").expect("write template");

    let err = Renderer::new(dir.path()).expect_err("incomplete templates");
    assert!(matches!(err, RenderError::Template { .. }));
    assert!(err.to_string().contains("posts.html"));
}

#[test]
fn undefined_variables_fail_rendering() {
    let renderer = Renderer::new(shipped_templates()).expect("templates load");
    assert!(renderer.render(Page::Post, context! {}).is_err());
}

#[test]
fn titles_are_escaped() {
    let renderer = Renderer::new(shipped_templates()).expect("templates load");
    let posts = vec![context! {
        id => "x",
        title => "<b>bold</b>",
        content => "",
        tags => Vec::<String>::new(),
        publish_date => "2024-01-01",
        thumbnail => (),
    }];

    let html = renderer.render(Page::Posts, context! { posts }).expect("render");
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
}
