use crate::content::ContentError;
use crate::render::RenderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use tracing::{error, warn};

/// Failure while serving a request.
#[folio_derive::folio_error]
pub enum ServerError {
    #[error("Content error{}: {source}", format_context(.context))]
    Content { source: ContentError, context: Option<Cow<'static, str>> },

    #[error("Render error{}: {source}", format_context(.context))]
    Render { source: RenderError, context: Option<Cow<'static, str>> },

    #[error("Background task failed{}: {source}", format_context(.context))]
    Task { source: tokio::task::JoinError, context: Option<Cow<'static, str>> },
}

impl ServerError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Content { source, .. } if source.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        let body = status.canonical_reason().unwrap_or("Error");
        (status, body).into_response()
    }
}
