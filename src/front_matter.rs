//! Per-document generation settings ("front matter")

use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Keys owned by the declared fields; never taken from `extra`.
pub const RESERVED_FIELDS: &[&str] = &["id", "db", "log"];

/// Configuration record describing one generation target.
///
/// `id` doubles as the unique key and the stem of every path derived for
/// the generated program (database file, log file). Fields other than the
/// declared ones are kept in `extra` and serialized alongside them, so
/// templates and generated headers can reference them. Entries in `extra`
/// named like a declared field are skipped on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub id: String,
    /// Set up a file-backed store in the generated program
    #[serde(default)]
    pub db: bool,
    /// Set up a structured file logger in the generated program
    #[serde(default)]
    pub log: bool,
    #[serde(flatten, serialize_with = "serialize_extra")]
    pub extra: Map<String, Value>,
}

impl FrontMatter {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_db(mut self, db: bool) -> Self {
        self.db = db;
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Add or replace an additional field.
    ///
    /// `id`, `db` and `log` set the declared fields instead; a value of the
    /// wrong type for them is ignored.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "id" | "db" | "log" => self.set_declared(&key, value),
            _ => {
                self.extra.insert(key, value);
            }
        }
        self
    }

    fn set_declared(&mut self, key: &str, value: Value) {
        match (key, value) {
            ("id", Value::String(id)) => self.id = id,
            ("db", Value::Bool(db)) => self.db = db,
            ("log", Value::Bool(log)) => self.log = log,
            (key, value) => debug!("ignoring `{}` = {} for `{}`: wrong type", key, value, self.id),
        }
    }

    /// Serialize as JSON with 2-space indentation.
    ///
    /// Declared fields come first, in declaration order, followed by the
    /// additional fields sorted by key.
    ///
    /// Cannot fail: every key is a string and every value is already JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use spinal::FrontMatter;
    ///
    /// let front = FrontMatter::new("svc1").with_db(true);
    /// assert_eq!(
    ///     front.to_json_pretty(),
    ///     "{\n  \"id\": \"svc1\",\n  \"db\": true,\n  \"log\": false\n}"
    /// );
    /// ```
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("front matter is always valid JSON")
    }
}

fn serialize_extra<S>(extra: &Map<String, Value>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(
        extra
            .iter()
            .filter(|(key, _)| !RESERVED_FIELDS.contains(&key.as_str())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_flags_default_to_false() {
        let front: FrontMatter = serde_json::from_value(json!({ "id": "a" })).unwrap();
        assert_eq!(front, FrontMatter::new("a"));
        assert!(!front.db);
        assert!(!front.log);
    }

    #[test]
    fn test_extra_fields_round_trip_through_flatten() {
        let front: FrontMatter = serde_json::from_value(json!({
            "id": "bot",
            "db": true,
            "interval": 5,
            "name": "Bot"
        }))
        .unwrap();
        assert!(front.db);
        assert_eq!(front.extra.get("interval"), Some(&json!(5)));
        assert_eq!(front.extra.get("name"), Some(&json!("Bot")));
        assert!(!front.extra.contains_key("id"));
    }

    #[test]
    fn test_pretty_json_field_order() {
        let front = FrontMatter::new("x")
            .with_log(true)
            .with_field("zeta", 1)
            .with_field("alpha", Value::Null);
        let expected = r#"{
  "id": "x",
  "db": false,
  "log": true,
  "alpha": null,
  "zeta": 1
}"#;
        assert_eq!(front.to_json_pretty(), expected);
    }

    #[test]
    fn test_with_field_replaces() {
        let front = FrontMatter::new("x")
            .with_field("k", "a")
            .with_field("k", "b");
        assert_eq!(front.extra.len(), 1);
        assert_eq!(front.extra["k"], json!("b"));
    }

    #[test]
    fn test_with_field_sets_declared_fields() {
        let front = FrontMatter::new("svc1")
            .with_field("id", "other")
            .with_field("db", true)
            .with_field("log", true);
        assert_eq!(front.id, "other");
        assert!(front.db);
        assert!(front.log);
        assert!(front.extra.is_empty());
    }

    #[test]
    fn test_with_field_ignores_mistyped_reserved_values() {
        let front = FrontMatter::new("svc1")
            .with_db(true)
            .with_field("id", 7)
            .with_field("db", "no");
        assert_eq!(front.id, "svc1");
        assert!(front.db);
        assert!(front.extra.is_empty());
    }

    #[test]
    fn test_reserved_keys_in_extra_not_serialized() {
        let mut front = FrontMatter::new("svc1").with_db(true);
        front.extra.insert("id".into(), json!("other"));
        front.extra.insert("db".into(), json!(false));
        front.extra.insert("name".into(), json!("Bot"));
        let expected = r#"{
  "id": "svc1",
  "db": true,
  "log": false,
  "name": "Bot"
}"#;
        assert_eq!(front.to_json_pretty(), expected);
    }
}
