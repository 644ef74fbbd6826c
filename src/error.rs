use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to scan directory {path}: {source}")]
    DirScan {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create report file {path}: {source}")]
    ReportCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to append to report file {path}: {source}")]
    ReportAppend {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read back report file {path}: {source}")]
    ReportRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot build match pattern for model '{model}': {source}")]
    Pattern { model: String, source: regex::Error },

    #[error("maximum report number (999) reached for model '{0}'")]
    VersionExhausted(String),

    #[error("'{0}' command not found")]
    ToolMissing(String),

    #[error("failed to run {tool}: {source}")]
    ToolSpawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("{tool} failed: {status}")]
    ToolStatus {
        tool: String,
        status: std::process::ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
