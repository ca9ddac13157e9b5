use crate::paths::DEFAULT_LOG_DIR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEventKind {
    SessionStart,
    SessionEnd,
    UserPromptSubmit,
    PreToolUse,
    PostToolUse,
    PostToolUseFailure,
    PermissionRequest,
    SubagentStart,
    SubagentStop,
    Stop,
    PreCompact,
    Setup,
    Notification,
}

impl HookEventKind {
    pub const ALL: [HookEventKind; 13] = [
        Self::SessionStart,
        Self::SessionEnd,
        Self::UserPromptSubmit,
        Self::PreToolUse,
        Self::PostToolUse,
        Self::PostToolUseFailure,
        Self::PermissionRequest,
        Self::SubagentStart,
        Self::SubagentStop,
        Self::Stop,
        Self::PreCompact,
        Self::Setup,
        Self::Notification,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SessionStart => "SessionStart",
            Self::SessionEnd => "SessionEnd",
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::PreToolUse => "PreToolUse",
            Self::PostToolUse => "PostToolUse",
            Self::PostToolUseFailure => "PostToolUseFailure",
            Self::PermissionRequest => "PermissionRequest",
            Self::SubagentStart => "SubagentStart",
            Self::SubagentStop => "SubagentStop",
            Self::Stop => "Stop",
            Self::PreCompact => "PreCompact",
            Self::Setup => "Setup",
            Self::Notification => "Notification",
        }
    }
}

pub fn usage_text() -> String {
    let command = env!("CARGO_PKG_NAME");
    let events = HookEventKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let today = format!("~/{DEFAULT_LOG_DIR}/$(date +%Y-%m-%d).jsonl");
    [
        command.to_string(),
        format!("Logs every hook event payload read from stdin to ~/{DEFAULT_LOG_DIR}/YYYY-MM-DD.jsonl"),
        "so payload shapes can be inspected before writing custom hooks.".to_string(),
        String::new(),
        "Supported events:".to_string(),
        format!("  {events}"),
        String::new(),
        "Settings (.claude/settings.json), add to any events you want to inspect:".to_string(),
        format!(
            r#"  {{"hooks": {{"PreToolUse": [{{"hooks": [{{"type": "command", "command": "{command}"}}]}}]}}}}"#
        ),
        String::new(),
        "View logs:".to_string(),
        format!("  cat {today} | jq"),
        format!("  tail -f {today} | jq"),
        format!(
            r#"  cat ~/{DEFAULT_LOG_DIR}/*.jsonl | jq 'select(.hook_event_name=="PreToolUse")'"#
        ),
    ]
    .join("\n")
}
