use serde_json::{Map, Value};

/// Merge `existing` onto `skeleton`.
///
/// For each key of `existing`: `null` is skipped, objects recurse, and any
/// other value (scalars and arrays, empty or not) replaces the skeleton's.
/// Arrays are never concatenated or merged element by element.
pub fn deep_merge(skeleton: Value, existing: &Value) -> Value {
    match (skeleton, existing) {
        (Value::Object(target), Value::Object(source)) => Value::Object(merge_maps(target, source)),
        (_, Value::Object(source)) => Value::Object(merge_maps(Map::new(), source)),
        (skeleton, Value::Null) => skeleton,
        (_, other) => other.clone(),
    }
}

fn merge_maps(mut target: Map<String, Value>, source: &Map<String, Value>) -> Map<String, Value> {
    for (key, value) in source {
        if value.is_null() {
            continue;
        }
        let merged = match target.remove(key) {
            Some(current) => deep_merge(current, value),
            None => deep_merge(Value::Null, value),
        };
        target.insert(key.clone(), merged);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn existing_scalars_win() {
        let merged = deep_merge(
            json!({"identity": {"initials": "NM", "url": "TODO: url"}}),
            &json!({"identity": {"url": "https://jane.dev"}}),
        );
        assert_eq!(merged, json!({"identity": {"initials": "NM", "url": "https://jane.dev"}}));
    }

    #[test]
    fn null_keeps_skeleton_value() {
        let merged = deep_merge(
            json!({"socials": {"email": "TODO: email"}}),
            &json!({"socials": {"email": null}}),
        );
        assert_eq!(merged, json!({"socials": {"email": "TODO: email"}}));
    }

    #[test]
    fn arrays_replace_wholesale() {
        let merged = deep_merge(
            json!({"projects": [{"title": "TODO: Project 1"}, {"title": "TODO: Project 2"}]}),
            &json!({"projects": [{"title": "Mine"}]}),
        );
        assert_eq!(merged, json!({"projects": [{"title": "Mine"}]}));
    }

    #[test]
    fn empty_array_still_replaces() {
        let merged = deep_merge(
            json!({"projects": [{"title": "TODO: Project 1"}]}),
            &json!({"projects": []}),
        );
        assert_eq!(merged, json!({"projects": []}));
    }

    #[test]
    fn skeleton_only_and_user_only_keys_survive() {
        let merged = deep_merge(
            json!({"socials": {"github": "TODO: gh", "mastodon": "TODO: m"}}),
            &json!({"socials": {"github": "https://github.com/x"}, "notes": "keep me"}),
        );
        assert_eq!(
            merged,
            json!({
                "socials": {"github": "https://github.com/x", "mastodon": "TODO: m"},
                "notes": "keep me"
            })
        );
    }

    #[test]
    fn object_over_scalar_starts_fresh() {
        let merged = deep_merge(json!({"identity": "TODO: x"}), &json!({"identity": {"url": "u"}}));
        assert_eq!(merged, json!({"identity": {"url": "u"}}));
    }

    #[test]
    fn nested_nulls_are_dropped_from_new_objects() {
        let merged = deep_merge(json!({}), &json!({"extra": {"a": null, "b": 1}}));
        assert_eq!(merged, json!({"extra": {"b": 1}}));
    }
}
