use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid value `{value}` for `{name}` environment variable")]
    InvalidEnvVar { name: String, value: String },

    #[error("Failed to read `{path}`: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write `{path}`: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
