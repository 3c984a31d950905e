use thiserror::Error;

/// Missing platform capabilities. Any of these leaves the page untouched
/// apart from the diagnostic.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas 2d context is unsupported")]
    No2dContext,
    #[error("could not create <{0}>")]
    CreateElement(&'static str),
}
