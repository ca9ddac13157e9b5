use serde_json::{Map, Value};

pub const DEFAULT_MAX_STRING_CHARS: usize = 2000;
pub const DEFAULT_MAX_ITEMS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeLimits {
    pub max_string_chars: usize,
    pub max_items: usize,
}

impl Default for SanitizeLimits {
    fn default() -> Self {
        Self {
            max_string_chars: DEFAULT_MAX_STRING_CHARS,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

/// Returns a bounded copy of `value`: strings capped at `max_string_chars`,
/// arrays capped at `max_items` plus a trailing count marker. Depth is not
/// bounded and the same limits apply at every level.
pub fn sanitize(value: &Value, limits: &SanitizeLimits) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        Value::String(text) => Value::String(truncate_text(text, limits.max_string_chars)),
        Value::Array(items) => Value::Array(sanitize_items(items, limits)),
        Value::Object(map) => Value::Object(sanitize_map(map, limits)),
    }
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };
    let total = text.chars().count();
    format!("{}... ({total} chars)", &text[..cut])
}

fn sanitize_items(items: &[Value], limits: &SanitizeLimits) -> Vec<Value> {
    let mut bounded: Vec<Value> = items
        .iter()
        .take(limits.max_items)
        .map(|item| sanitize(item, limits))
        .collect();
    if items.len() > limits.max_items {
        let remaining = items.len() - limits.max_items;
        bounded.push(Value::String(format!("... +{remaining} more")));
    }
    bounded
}

fn sanitize_map(map: &Map<String, Value>, limits: &SanitizeLimits) -> Map<String, Value> {
    map.iter()
        .map(|(key, item)| (key.clone(), sanitize(item, limits)))
        .collect()
}
