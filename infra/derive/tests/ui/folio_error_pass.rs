use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String, DemoError> {
    std::fs::read_to_string(path).context("reading demo file")
}

fn missing() -> Result<(), DemoError> {
    Err(DemoError::NotFound { message: "demo".into(), context: None }).context("lookup")
}

fn main() {
    let err = read("/definitely/not/here").unwrap_err();
    assert!(err.to_string().starts_with("IO error (reading demo file)"));

    let err = missing().unwrap_err();
    assert_eq!(err.to_string(), "Not found (lookup): demo");

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");
}
