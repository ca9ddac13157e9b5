use serde_json::{Map, Value};

pub const EVENT_NAME_FIELD: &str = "hook_event_name";
pub const UNKNOWN_EVENT_NAME: &str = "unknown";
pub const RAW_FIELD: &str = "_raw";
pub const RAW_VALUE_FIELD: &str = "_raw_value";

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedPayload {
    Object(Map<String, Value>),
    Unparsable { raw: String },
    NonObject(Value),
}

pub fn parse_payload(text: &str) -> ParsedPayload {
    if text.is_empty() {
        return ParsedPayload::Object(Map::new());
    }
    let parsed = serde_json::from_str::<Value>(text).or_else(|err| {
        replace_lone_surrogates(text)
            .ok_or(err)
            .and_then(|repaired| serde_json::from_str::<Value>(&repaired))
    });
    match parsed {
        Ok(Value::Object(map)) => ParsedPayload::Object(map),
        Ok(other) => ParsedPayload::NonObject(other),
        Err(_) => ParsedPayload::Unparsable {
            raw: text.to_string(),
        },
    }
}

/// Rewrites `\uXXXX` escapes naming an unpaired UTF-16 surrogate to `\ufffd`.
/// Returns `None` when the text has none, so the caller keeps the original error.
fn replace_lone_surrogates(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut replaced = false;
    let mut rest = text;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let Some(unit) = escaped_unit(rest) else {
            // Copy any other escape pair whole so `\\u` is never misread.
            let pair_len = rest[1..].chars().next().map_or(1, |ch| 1 + ch.len_utf8());
            out.push_str(&rest[..pair_len]);
            rest = &rest[pair_len..];
            continue;
        };
        let low = escaped_unit(&rest[6..]);
        let paired = (0xD800..0xDC00).contains(&unit)
            && low.is_some_and(|low| (0xDC00..0xE000).contains(&low));
        if paired {
            out.push_str(&rest[..12]);
            rest = &rest[12..];
        } else if (0xD800..0xE000).contains(&unit) {
            out.push_str("\\ufffd");
            replaced = true;
            rest = &rest[6..];
        } else {
            out.push_str(&rest[..6]);
            rest = &rest[6..];
        }
    }
    out.push_str(rest);
    replaced.then_some(out)
}

fn escaped_unit(text: &str) -> Option<u32> {
    let hex = text.strip_prefix("\\u")?.get(..4)?;
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

impl ParsedPayload {
    pub fn event_name(&self) -> String {
        let Self::Object(map) = self else {
            return UNKNOWN_EVENT_NAME.to_string();
        };
        match map.get(EVENT_NAME_FIELD) {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Null) | None => UNKNOWN_EVENT_NAME.to_string(),
            Some(other) => other.to_string(),
        }
    }

    pub fn into_map(self) -> Map<String, Value> {
        match self {
            Self::Object(map) => map,
            Self::Unparsable { raw } => wrap(RAW_FIELD, Value::String(raw)),
            Self::NonObject(value) => wrap(RAW_VALUE_FIELD, value),
        }
    }
}

fn wrap(field: &str, value: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(field.to_string(), value);
    map
}
