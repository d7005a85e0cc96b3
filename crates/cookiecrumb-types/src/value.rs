//! Lenient decoding of API values.
//!
//! The API sends `null` for empty lists and strings as often as it omits the
//! key, so [`null_default`] maps both to the type's default.
//!
//! Depending on the `formatted` query flag the API sends numbers either as
//! plain JSON numbers or as `{"raw": 1.5, "fmt": "1.50"}` objects. Some
//! fields (timezone offsets) arrive as numeric strings, and missing values can
//! show up as `{}`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(serde_json::Number),
    Wrapped { raw: serde_json::Number },
    Text(String),
    Empty {},
}

impl Numeric {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) | Self::Wrapped { raw: n } => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Empty {} => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            #[allow(clippy::cast_possible_truncation)]
            Self::Number(n) | Self::Wrapped { raw: n } => {
                n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))
            }
            Self::Text(s) => s.trim().parse().ok(),
            Self::Empty {} => None,
        }
    }
}

/// Decodes a value, mapping `null` to its default.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a number, defaulting to zero when absent or unparseable.
pub(crate) fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_f64_lenient(deserializer)?.unwrap_or_default())
}

/// Decodes an optional floating point number.
pub(crate) fn opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Numeric>::deserialize(deserializer)?.and_then(|n| n.as_f64()))
}

/// Decodes an optional integer.
pub(crate) fn opt_i64_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Numeric>::deserialize(deserializer)?.and_then(|n| n.as_i64()))
}

/// Decodes an integer, defaulting to zero when absent or unparseable.
pub(crate) fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_i64_lenient(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_f64_lenient")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "i64_lenient")]
        offset: i64,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_plain_number() {
        let p = probe(r#"{"price": 189.5, "offset": -18000000}"#);
        assert_eq!(p.price, Some(189.5));
        assert_eq!(p.offset, -18_000_000);
    }

    #[test]
    fn test_wrapped_number() {
        let p = probe(r#"{"price": {"raw": 12.25, "fmt": "12.25"}, "offset": {"raw": 3600000}}"#);
        assert_eq!(p.price, Some(12.25));
        assert_eq!(p.offset, 3_600_000);
    }

    #[test]
    fn test_numeric_string() {
        let p = probe(r#"{"price": "1.5", "offset": "-14400000"}"#);
        assert_eq!(p.price, Some(1.5));
        assert_eq!(p.offset, -14_400_000);
    }

    #[derive(Deserialize)]
    struct Nullable {
        #[serde(default, deserialize_with = "null_default")]
        name: String,
        #[serde(default, deserialize_with = "null_default")]
        items: Vec<u32>,
    }

    #[test]
    fn test_null_default() {
        let n: Nullable = serde_json::from_str(r#"{"name": null, "items": null}"#).unwrap();
        assert_eq!(n.name, "");
        assert!(n.items.is_empty());

        let n: Nullable = serde_json::from_str(r#"{"name": "x", "items": [1, 2]}"#).unwrap();
        assert_eq!(n.name, "x");
        assert_eq!(n.items, vec![1, 2]);

        let n: Nullable = serde_json::from_str("{}").unwrap();
        assert!(n.items.is_empty());
    }

    #[test]
    fn test_missing_and_empty_values() {
        let p = probe(r#"{"price": {}}"#);
        assert_eq!(p.price, None);
        assert_eq!(p.offset, 0);

        let p = probe(r#"{"price": null, "offset": "n/a"}"#);
        assert_eq!(p.price, None);
        assert_eq!(p.offset, 0);
    }
}
