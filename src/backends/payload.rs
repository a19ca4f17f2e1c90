use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode the payload of an event whose type is known to carry details.
///
/// Feeds mix many event kinds and some of them come with a `null` or oddly
/// shaped payload; those decode to the default value instead of failing the feed.
pub(crate) fn decode_payload<T>(event_type: &str, payload: Option<Value>) -> T
where
    T: Default + DeserializeOwned,
{
    match payload {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(event_type, error = %e, "unreadable event payload");
            T::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    use super::{decode_payload, null_as_default};

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Details {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
        label: Option<String>,
    }

    #[test]
    fn test_null_fields_decode_to_default() {
        let details: Details = serde_json::from_value(json!({ "items": null, "label": null })).unwrap();
        assert_eq!(details, Details::default());
    }

    #[test]
    fn test_decode_payload_tolerates_null_and_bad_shapes() {
        assert_eq!(decode_payload::<Details>("WatchEvent", None), Details::default());
        assert_eq!(
            decode_payload::<Details>("WatchEvent", Some(json!(null))),
            Details::default()
        );
        assert_eq!(
            decode_payload::<Details>("PushEvent", Some(json!({ "items": 3 }))),
            Details::default()
        );
        assert_eq!(
            decode_payload::<Details>("PushEvent", Some(json!({ "items": ["a"], "label": "x" }))),
            Details {
                items: vec!["a".into()],
                label: Some("x".into())
            }
        );
    }
}
