#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("failed to read hook payload from stdin: {source}")]
    ReadInput {
        #[source]
        source: std::io::Error,
    },
    #[error("failed to resolve home directory for hook log path")]
    HomeDirectoryUnavailable,
    #[error("failed to resolve current working directory: {source}")]
    CurrentDirUnavailable {
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to append to log file {path}: {source}")]
    WriteLog {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode log envelope: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected failure: {0}")]
    Panicked(String),
}
