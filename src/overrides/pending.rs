use serde_json::Value;

use crate::field::is_placeholder;

/// JSON paths (`socials.email`, `projects[0].title`) still holding `TODO:` text.
pub fn placeholder_paths(doc: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    walk(doc, String::new(), &mut paths);
    paths
}

fn walk(value: &Value, path: String, out: &mut Vec<String>) {
    match value {
        Value::String(s) if is_placeholder(s) => out.push(path),
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(child, child_path, out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                walk(child, format!("{path}[{i}]"), out);
            }
        }
        _ => {}
    }
}
