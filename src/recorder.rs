use crate::environment::HookEnvironment;
use crate::paths::{resolve_log_file, HookLogPaths};
use crate::payload::{parse_payload, ParsedPayload};
use crate::sanitize::{sanitize, SanitizeLimits};
use crate::shared::errors::RecorderError;
use crate::shared::logging::{append_jsonl_line, append_recorder_log, format_diagnostic};
use serde::Serialize;
use serde_json::Value;
use std::io::{Read, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

/// One line of the daily hook log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEnvelope {
    pub ts: String,
    pub hook_event_name: String,
    pub cwd: String,
    pub data: Value,
}

pub fn build_envelope(
    payload: ParsedPayload,
    env: &HookEnvironment,
    limits: &SanitizeLimits,
) -> LogEnvelope {
    let hook_event_name = payload.event_name();
    let data = sanitize(&Value::Object(payload.into_map()), limits);
    LogEnvelope {
        ts: env.timestamp(),
        hook_event_name,
        cwd: env.cwd_display(),
        data,
    }
}

pub fn record_event(
    input: &str,
    env: &HookEnvironment,
    limits: &SanitizeLimits,
) -> Result<PathBuf, RecorderError> {
    let envelope = build_envelope(parse_payload(input), env, limits);
    let line =
        serde_json::to_string(&envelope).map_err(|source| RecorderError::Encode { source })?;

    let path = resolve_log_file(env)?;
    append_jsonl_line(&path, &line).map_err(|source| RecorderError::WriteLog {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

pub fn record_from_reader<R: Read>(
    mut reader: R,
    env: &HookEnvironment,
    limits: &SanitizeLimits,
) -> Result<PathBuf, RecorderError> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|source| RecorderError::ReadInput { source })?;
    record_event(&input, env, limits)
}

/// Top-level guard: every failure, panics included, becomes one diagnostic
/// line on `diagnostics` and the returned error. Nothing escapes.
pub fn run_hook<R, W, F>(
    reader: R,
    diagnostics: &mut W,
    limits: &SanitizeLimits,
    load_env: F,
) -> Result<PathBuf, RecorderError>
where
    R: Read,
    W: Write,
    F: FnOnce() -> Result<HookEnvironment, RecorderError>,
{
    let mut env_snapshot = None;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let env = load_env()?;
        env_snapshot = Some(env.clone());
        record_from_reader(reader, &env, limits)
    }))
    .unwrap_or_else(|cause| Err(RecorderError::Panicked(panic_message(cause.as_ref()))));

    if let Err(err) = &outcome {
        let message = err.to_string();
        let _ = writeln!(diagnostics, "{}", format_diagnostic(&message));
        if let Some(env) = env_snapshot {
            if let Ok(paths) = HookLogPaths::from_env(&env) {
                append_recorder_log(
                    &paths.root,
                    &env.timestamp(),
                    "error",
                    "hook.record_failed",
                    &message,
                );
            }
        }
    }
    outcome
}

fn panic_message(cause: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = cause.downcast_ref::<String>() {
        return message.clone();
    }
    "panic with non-string payload".to_string()
}
