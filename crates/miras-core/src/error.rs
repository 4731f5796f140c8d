use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirasError {
    #[error("fraction denominator is zero")]
    ZeroDenominator,

    #[error("fraction {0}/{1} is out of range")]
    FractionOutOfRange(i64, i64),

    #[error("malformed fraction: {0:?}")]
    MalformedFraction(String),

    #[error("reading session file {path}: {source}")]
    SessionIo {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session JSON parse error: {0}")]
    SessionJson(#[from] serde_json::Error),
}
