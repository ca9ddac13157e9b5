use std::fs;
use std::io::Write;
use std::path::Path;

pub const DIAGNOSTIC_PREFIX: &str = "[event-logger]";
pub const RECORDER_LOG_FILE_NAME: &str = "event-logger.log";

pub fn format_diagnostic(message: &str) -> String {
    format!("{DIAGNOSTIC_PREFIX} Error: {message}")
}

// Single write_all so concurrent appenders never interleave mid-line.
pub fn append_jsonl_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(format!("{line}\n").as_bytes())
}

pub fn append_recorder_log(
    log_dir: &Path,
    timestamp: &str,
    level: &str,
    event: &str,
    message: &str,
) {
    if !log_dir.is_dir() {
        return;
    }

    let payload = serde_json::json!({
        "timestamp": timestamp,
        "level": level,
        "event": event,
        "message": message,
    });

    let Ok(line) = serde_json::to_string(&payload) else {
        return;
    };

    let _ = append_jsonl_line(&log_dir.join(RECORDER_LOG_FILE_NAME), &line);
}
