//! Errors raised while loading configs and reading or writing result files

use tiered_engine::UnknownDifficulty;

#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Engine(#[from] UnknownDifficulty),
}

impl TournamentError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        TournamentError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
