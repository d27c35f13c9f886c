use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("provider `{provider}` returned a payload that could not be parsed")]
    InvalidPayload {
        provider: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("payload does not match the requested type")]
    PayloadShape(#[source] serde_json::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
