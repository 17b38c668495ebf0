use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("content manifest is malformed: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("canvas has no 2d rendering context")]
    MissingContext,
    #[error("browser rejected {call}: {detail}")]
    Dom { call: &'static str, detail: String },
}

impl Error {
    /// Wraps a value thrown by a DOM call. `JsValue` is not `Send`, so only its
    /// debug rendering is kept.
    pub fn dom(call: &'static str, detail: impl std::fmt::Debug) -> Self {
        Self::Dom {
            call,
            detail: format!("{detail:?}"),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
