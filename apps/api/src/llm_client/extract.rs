//! Best-effort recovery of JSON from free-form model replies.
//!
//! Strategies run in a fixed order and the first success wins:
//!
//! 1. single-key lift (lists only): a reply that is a lone object such
//!    as `{"prompt": "..."}` becomes a one-element list, so brackets inside the
//!    prompt text are never mistaken for an array;
//! 2. strict span: first opening bracket to last closing bracket, parsed as JSON
//!    and accepted only if it has the requested shape;
//! 3. line heuristic (lists only): bullet-stripped prose lines.
//!
//! Every list result holds at most `max_items` strings.
//!
//! Object extraction that fails every strategy yields an empty map and callers
//! fill in defaults. Nothing here returns an error or panics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::llm_client::strip_json_fences;

/// Upper bound on the bytes scanned from one reply.
pub const MAX_SCAN_BYTES: usize = 1024 * 1024;

static OBJECT_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));
static ARRAY_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

impl Shape {
    fn span(self) -> &'static Regex {
        match self {
            Shape::Object => &OBJECT_SPAN,
            Shape::Array => &ARRAY_SPAN,
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Object => value.is_object(),
            Shape::Array => value.is_array(),
        }
    }
}

/// Strict stage: parses the widest bracketed span of the requested shape.
///
/// Two separate objects in one reply over-capture (`{..} text {..}`) and fail
/// to parse; that reply is treated as having no JSON.
pub fn extract_structured(text: &str, shape: Shape) -> Option<Value> {
    let text = cap(text);
    let span = shape.span().find(text)?;
    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(value) if shape.matches(&value) => Some(value),
        Ok(_) => None,
        Err(e) => {
            debug!("Strict JSON extraction failed ({shape:?}): {e}");
            None
        }
    }
}

/// Object mode: the parsed object, or an empty map when nothing parses.
pub fn extract_object(text: &str) -> Map<String, Value> {
    match extract_structured(text, Shape::Object) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// List mode: runs the full fallback chain and returns at most `max_items`
/// strings.
///
/// `lift_key` names the field lifted out of a lone object (and out of object
/// elements inside an array).
pub fn extract_string_list(text: &str, lift_key: &str, max_items: usize) -> Vec<String> {
    let text = cap(text);

    if let Some(lifted) = lift_single_key(text, lift_key) {
        return vec![lifted];
    }

    if let Some(Value::Array(items)) = extract_structured(text, Shape::Array) {
        return items
            .into_iter()
            .filter_map(|item| value_to_string(item, lift_key))
            .take(max_items)
            .collect();
    }

    prose_lines(text, max_items)
}

fn lift_single_key(text: &str, key: &str) -> Option<String> {
    let body = strip_json_fences(text);
    if !body.starts_with('{') {
        return None;
    }
    match serde_json::from_str::<Value>(body).ok()? {
        Value::Object(mut map) => map.remove(key).and_then(|v| value_to_string(v, key)),
        _ => None,
    }
}

fn prose_lines(text: &str, max_items: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("```"))
        .filter(|line| line.chars().any(char::is_alphabetic))
        .map(|line| {
            line.trim_start_matches(|c: char| c == '-' || c == '*' || c == '•' || c.is_whitespace())
                .to_string()
        })
        .take(max_items)
        .collect()
}

fn value_to_string(value: Value, lift_key: &str) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Object(mut map) => map.remove(lift_key).and_then(|v| value_to_string(v, lift_key)),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Truncates to `MAX_SCAN_BYTES`, backing off to a char boundary.
fn cap(text: &str) -> &str {
    if text.len() <= MAX_SCAN_BYTES {
        return text;
    }
    let mut end = MAX_SCAN_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
