use crate::content::ContentStore;
use crate::render::{RenderError, Renderer};
use folio_domain::config::SiteConfig;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[folio_derive::folio_error]
pub enum AppStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Template setup failed{}: {source}", format_context(.context))]
    Templates { source: RenderError, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: SiteConfig,
    pub content: ContentStore,
    pub renderer: Renderer,
}

#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<SiteConfig>,
    content: Option<ContentStore>,
    renderer: Option<Renderer>,
}

impl AppStateBuilder {
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the content store derived from the config.
    pub fn content(mut self, content: ContentStore) -> Self {
        self.content = Some(content);
        self
    }

    /// Overrides the renderer derived from the config.
    pub fn renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Finalizes the state. Missing content store and renderer are built
    /// from the config's content section.
    ///
    /// # Errors
    /// [`AppStateError::Validation`] without a config,
    /// [`AppStateError::Templates`] if the templates cannot be loaded.
    pub fn build(self) -> Result<AppState, AppStateError> {
        let config = self.config.ok_or_else(|| AppStateError::Validation {
            message: "SiteConfig not provided".into(),
            context: None,
        })?;

        let content = self.content.unwrap_or_else(|| ContentStore::from_config(&config.content));
        let renderer = match self.renderer {
            Some(renderer) => renderer,
            None => Renderer::new(config.content.templates_path())?,
        };

        Ok(AppState { inner: Arc::new(AppStateInner { config, content, renderer }) })
    }
}
