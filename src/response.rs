/// Locating and inspecting the JSON payload embedded in client output
use serde_json::Value;

/// Extract the JSON payload from captured client output.
///
/// fbcli prints `URL: http://...` header line(s) followed by the JSON body.
/// Header lines are dropped, then the remainder is parsed as a whole; if that
/// fails, the span from the first `{` to the last `}` is tried as a fallback.
/// Returns `None` when nothing JSON-like is found.
pub fn extract_payload(output: &str) -> Option<Value> {
    let payload = output
        .lines()
        .filter(|line| !line.starts_with("URL: "))
        .collect::<Vec<_>>()
        .join("\n");
    let payload = payload.trim();
    if payload.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str(payload) {
        return Some(value);
    }

    // Fallback: outermost JSON object by braces
    let first = payload.find('{')?;
    let last = payload.rfind('}')?;
    if last > first {
        serde_json::from_str(&payload[first..=last]).ok()
    } else {
        None
    }
}

/// Whether a response payload signals failure: a non-empty `errors` array or
/// object, or a truthy `errors` scalar. Absent, null, empty, `false` and `0`
/// all count as success.
pub fn payload_has_errors(payload: &Value) -> bool {
    match payload.get("errors") {
        None | Some(Value::Null) => false,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(num)) => num.as_f64() != Some(0.0),
    }
}
