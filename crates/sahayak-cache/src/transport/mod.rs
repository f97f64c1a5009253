//! Remote collection transport.

pub mod http_source;

pub use http_source::HttpRemoteSource;

use sahayak_core::errors::FetchError;

/// Quick-fix endpoint path, relative to the base URL.
pub fn quick_fixes_path(limit: usize) -> String {
    format!("/api/sos/quick-fixes?limit={limit}")
}

/// Normalize a response body to the bare item array. Accepts either an array
/// or an object holding the array under `field`.
pub fn extract_items(body: serde_json::Value, field: &str) -> Result<serde_json::Value, FetchError> {
    match body {
        serde_json::Value::Array(_) => Ok(body),
        serde_json::Value::Object(mut map) => match map.remove(field) {
            Some(items @ serde_json::Value::Array(_)) => Ok(items),
            Some(_) => Err(FetchError::InvalidPayload {
                reason: format!("field '{field}' is not an array"),
            }),
            None => Err(FetchError::InvalidPayload {
                reason: format!("missing field '{field}'"),
            }),
        },
        other => Err(FetchError::InvalidPayload {
            reason: format!("expected array or object, got {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_bare_array_and_wrapped_array() {
        assert_eq!(extract_items(json!([1, 2]), "fixes").unwrap(), json!([1, 2]));
        assert_eq!(
            extract_items(json!({"fixes": [{"id": 1}], "total": 1}), "fixes").unwrap(),
            json!([{"id": 1}])
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(
            extract_items(json!({"items": []}), "fixes"),
            Err(FetchError::InvalidPayload { .. })
        ));
        assert!(extract_items(json!({"fixes": "none"}), "fixes").is_err());
        assert!(extract_items(json!(42), "fixes").is_err());
    }

    #[test]
    fn path_carries_limit() {
        assert_eq!(quick_fixes_path(50), "/api/sos/quick-fixes?limit=50");
    }
}
