use crate::environment::HookEnvironment;
use crate::shared::errors::RecorderError;
use crate::shared::logging::RECORDER_LOG_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR: &str = ".claude/hooks-logs";
pub const LOG_FILE_EXTENSION: &str = "jsonl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookLogPaths {
    pub root: PathBuf,
}

impl HookLogPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_home(home: &Path) -> Self {
        Self::new(home.join(DEFAULT_LOG_DIR))
    }

    pub fn from_env(env: &HookEnvironment) -> Result<Self, RecorderError> {
        let home = env
            .home_dir
            .as_deref()
            .ok_or(RecorderError::HomeDirectoryUnavailable)?;
        Ok(Self::from_home(home))
    }

    pub fn log_file(&self, date_stamp: &str) -> PathBuf {
        self.root.join(log_file_name(date_stamp))
    }

    pub fn recorder_log_path(&self) -> PathBuf {
        self.root.join(RECORDER_LOG_FILE_NAME)
    }

    pub fn ensure_root(&self) -> Result<(), RecorderError> {
        fs::create_dir_all(&self.root).map_err(|source| RecorderError::CreateDir {
            path: self.root.display().to_string(),
            source,
        })
    }
}

pub fn log_file_name(date_stamp: &str) -> String {
    format!("{date_stamp}.{LOG_FILE_EXTENSION}")
}

pub fn resolve_log_file(env: &HookEnvironment) -> Result<PathBuf, RecorderError> {
    let paths = HookLogPaths::from_env(env)?;
    paths.ensure_root()?;
    Ok(paths.log_file(&env.date_stamp()))
}
