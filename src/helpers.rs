use serde_json::Value;
use url::form_urlencoded::Serializer;

use crate::api::Params;

/// URL-encodes a parameter map. Strings are encoded bare, everything else as its JSON rendering.
pub(crate) fn query_string(params: &Params) -> String {
    let mut serializer = Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &query_value(value));
    }
    serializer.finish()
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn merge(params: &mut Params, extra: Params) {
    for (key, value) in extra {
        params.insert(key, value);
    }
}
