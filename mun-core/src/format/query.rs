use serde::Serialize;
use serde_json::Value;

/// Flattens a flat query struct into `key=value` pairs. `None` fields are skipped
/// by the struct's own serde attributes; zero page/limit values are dropped here.
pub fn to_query_pairs<T: Serialize>(query: &T) -> Vec<(String, String)> {
    let Ok(Value::Object(map)) = serde_json::to_value(query) else {
        return Vec::new();
    };
    map.into_iter()
        .filter_map(|(k, v)| match v {
            Value::Null => None,
            Value::Number(n) if n.as_u64() == Some(0) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some((k, s)),
            Value::Bool(b) => Some((k, b.to_string())),
            Value::Number(n) => Some((k, n.to_string())),
            _ => None,
        })
        .collect()
}
