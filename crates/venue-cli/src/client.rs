//! Catalog sources, the shared HTTP client, and CLI error types.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, anyhow};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use venue_catalog::{CatalogError, EventCatalog, LookupError, decode_catalog, read_catalog_response};

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::Status { .. } => Self::failure(anyhow!(err.to_string())),
            CatalogError::Transport { detail } | CatalogError::Decode { detail } => {
                Self::failure(anyhow!(detail.clone()).context(err.to_string()))
            }
        }
    }
}

impl From<LookupError> for CliError {
    fn from(err: LookupError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Where the catalog document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    Url(Url),
    File(PathBuf),
}

impl CatalogSource {
    /// `http`/`https` inputs are URLs; anything else is a filesystem path.
    pub(crate) fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err("catalog source must not be empty".to_string());
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return trimmed
                .parse::<Url>()
                .map(Self::Url)
                .map_err(|err| format!("invalid URL '{trimmed}': {err}"));
        }
        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl Display for CatalogSource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(formatter, "{url}"),
            Self::File(path) => write!(formatter, "{}", path.display()),
        }
    }
}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) client: Client,
    pub(crate) source: CatalogSource,
}

impl AppContext {
    /// Construct the HTTP client used for URL sources.
    pub(crate) fn new(source: CatalogSource, timeout_secs: u64, trace_id: &str) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, source })
    }

    /// Retrieve and decode the whole catalog, once.
    pub(crate) async fn load_catalog(&self) -> CliResult<EventCatalog> {
        tracing::debug!(source = %self.source, "loading catalog");
        let catalog = match &self.source {
            CatalogSource::Url(url) => self.fetch_catalog(url.clone()).await?,
            CatalogSource::File(path) => {
                let body = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read catalog file '{}'", path.display()))
                    .map_err(CliError::failure)?;
                decode_catalog(&body)?
            }
        };
        tracing::debug!(events = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    async fn fetch_catalog(&self, url: Url) -> Result<EventCatalog, CatalogError> {
        let response = self.client.get(url).send().await.map_err(|err| {
            tracing::error!(error = %err, "catalog request failed");
            CatalogError::transport(err.to_string())
        })?;
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default();
        let body = response
            .text()
            .await
            .map_err(|err| CatalogError::transport(err.to_string()))?;
        read_catalog_response(status.as_u16(), status_text, &body).inspect_err(|err| {
            tracing::error!(detail = %err.detail(), "catalog response rejected");
        })
    }
}
