use crate::shared::errors::RecorderError;
use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use std::path::PathBuf;

/// Ambient process state the recorder depends on, captured once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookEnvironment {
    pub home_dir: Option<PathBuf>,
    pub cwd: PathBuf,
    pub now: DateTime<FixedOffset>,
}

impl HookEnvironment {
    pub fn new(
        home_dir: Option<PathBuf>,
        cwd: impl Into<PathBuf>,
        now: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            home_dir,
            cwd: cwd.into(),
            now,
        }
    }

    pub fn from_process() -> Result<Self, RecorderError> {
        let home_dir = std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from);
        let cwd = std::env::current_dir()
            .map_err(|source| RecorderError::CurrentDirUnavailable { source })?;
        Ok(Self::new(home_dir, cwd, Local::now().fixed_offset()))
    }

    pub fn timestamp(&self) -> String {
        self.now.to_rfc3339_opts(SecondsFormat::Micros, false)
    }

    pub fn date_stamp(&self) -> String {
        self.now.format("%Y-%m-%d").to_string()
    }

    pub fn cwd_display(&self) -> String {
        self.cwd.display().to_string()
    }
}
