//! Identifier deserialization helpers
//!
//! The rules-engine and WAF APIs return object ids as JSON strings in some
//! responses and as numbers in others. These helpers accept both and always
//! produce a `String`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    I64(i64),
    U64(u64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::I64(n) => n.to_string(),
            StringOrNumber::U64(n) => n.to_string(),
        }
    }
}

/// Deserialize a required id that may be a string or a number.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

/// Deserialize an optional id that may be a string, a number or `null`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::deserialize")]
        id: String,
        #[serde(default, deserialize_with = "super::deserialize_option")]
        parent: Option<String>,
    }

    #[test]
    fn accepts_string_id() {
        let w: Wrapper = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(w.id, "abc");
        assert_eq!(w.parent, None);
    }

    #[test]
    fn accepts_numeric_id() {
        let w: Wrapper = serde_json::from_str(r#"{"id":1234,"parent":99}"#).unwrap();
        assert_eq!(w.id, "1234");
        assert_eq!(w.parent.as_deref(), Some("99"));
    }

    #[test]
    fn accepts_null_optional() {
        let w: Wrapper = serde_json::from_str(r#"{"id":"x","parent":null}"#).unwrap();
        assert_eq!(w.parent, None);
    }

    #[test]
    fn rejects_other_types() {
        let r: Result<Wrapper, _> = serde_json::from_str(r#"{"id":true}"#);
        assert!(r.is_err());
    }
}
