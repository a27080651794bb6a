use serde_json::{json, Map, Value};

/// Base sync settings shared by both Ares64 profiles.
pub(super) fn sync_settings() -> Map<String, Value> {
    let Value::Object(map) = json!({
        "RestrictAnalogRange": false,
    }) else {
        unreachable!()
    };
    map
}
