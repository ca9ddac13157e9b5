use hook_event_logger::events::{usage_text, HookEventKind};

#[test]
fn events_module_lists_all_supported_hook_events() {
    let names: Vec<&str> = HookEventKind::ALL.iter().map(|kind| kind.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "SessionStart",
            "SessionEnd",
            "UserPromptSubmit",
            "PreToolUse",
            "PostToolUse",
            "PostToolUseFailure",
            "PermissionRequest",
            "SubagentStart",
            "SubagentStop",
            "Stop",
            "PreCompact",
            "Setup",
            "Notification",
        ]
    );
}

#[test]
fn usage_text_mentions_log_location_and_every_event() {
    let usage = usage_text();
    assert!(usage.contains("~/.claude/hooks-logs/YYYY-MM-DD.jsonl"));
    for kind in HookEventKind::ALL {
        assert!(usage.contains(kind.as_str()), "missing {}", kind.as_str());
    }
    assert!(usage.contains("\"command\": \"hook-event-logger\""));
}
