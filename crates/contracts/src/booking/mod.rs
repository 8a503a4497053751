pub mod routes;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field values of a form captured at submit time.
///
/// Keys keep the order in which the form yielded them. Inserting a name that
/// is already present replaces its value in place, so a field repeated in the
/// form ends up once in the payload, at its first position, carrying the last
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: IndexMap<String, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one form entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize into the request body sent to the server.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<K, V> FromIterator<(K, V)> for FormSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = FormSnapshot::new();
        for (name, value) in iter {
            snapshot.insert(name, value);
        }
        snapshot
    }
}

/// Error body the server returns with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_keeps_form_order() {
        let snapshot: FormSnapshot = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(snapshot.to_json().unwrap(), r#"{"b":"2","a":"1"}"#);
    }

    #[test]
    fn test_to_json_simple_fields() {
        let snapshot: FormSnapshot = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(snapshot.to_json().unwrap(), r#"{"a":"1","b":"2"}"#);
    }

    #[test]
    fn test_duplicate_name_keeps_last_value() {
        let snapshot: FormSnapshot = [("center", "CenterA"), ("dose", "1"), ("center", "CenterB")]
            .into_iter()
            .collect();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("center"), Some("CenterB"));
        assert_eq!(
            snapshot.to_json().unwrap(),
            r#"{"center":"CenterB","dose":"1"}"#
        );
    }

    #[test]
    fn test_values_stay_strings() {
        let snapshot: FormSnapshot = [("dose", "2"), ("beneficiary_id", "7")]
            .into_iter()
            .collect();
        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["dose"], serde_json::json!("2"));
        assert_eq!(value["beneficiary_id"], serde_json::json!("7"));
    }

    #[test]
    fn test_empty_form() {
        let snapshot = FormSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_api_message_parses_server_error() {
        let msg: ApiMessage = serde_json::from_str(r#"{"message":"Time slot is full"}"#).unwrap();
        assert_eq!(msg.message, "Time slot is full");
    }
}
