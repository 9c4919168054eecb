use thiserror::Error;

/// Errors raised while constructing infrastructure adapters.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to register template `{name}`: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: tera::Error,
    },
}
