//! Address suggestions and their backend simplification
//!
//! Suggestions arrive from the external autocomplete provider as a display
//! string plus an opaque attribute map. The submission endpoint only consumes
//! the simplified `{ value, latitude, longitude }` form. Suggestions are held
//! by value and replaced wholesale, never mutated in place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw provider suggestion (the subset of attributes we actually read is
/// `geo_lat`, `geo_lon` and `house`; everything else is carried opaquely).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    /// Display text of the address
    pub value: String,
    /// Longer provider-side display form, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unrestricted_value: Option<String>,
    /// Opaque provider attributes
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl AddressSuggestion {
    /// Create a suggestion with only a display value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unrestricted_value: None,
            data: Map::new(),
        }
    }

    /// Builder-style attribute setter, mostly useful in fixtures
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    fn attr_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Raw coordinate strings, present only when both parse as finite floats.
    fn raw_geo(&self) -> Option<(&str, &str)> {
        let lat = self.attr_str("geo_lat")?;
        let lon = self.attr_str("geo_lon")?;
        if parse_coordinate(lat).is_some() && parse_coordinate(lon).is_some() {
            Some((lat, lon))
        } else {
            None
        }
    }
}

/// Simplified address format expected by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAddress {
    /// Display text of the address
    pub value: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|c| !c.is_nan())
}

/// Simplifies a suggestion into `{ value, latitude, longitude }`.
///
/// Returns `None` for a missing suggestion, missing `geo_lat`/`geo_lon`
/// attributes, or coordinates that do not parse as floats. Pure.
#[must_use]
pub fn simplify(suggestion: Option<&AddressSuggestion>) -> Option<SimplifiedAddress> {
    let suggestion = suggestion?;
    let latitude = parse_coordinate(suggestion.attr_str("geo_lat")?)?;
    let longitude = parse_coordinate(suggestion.attr_str("geo_lon")?)?;
    Some(SimplifiedAddress {
        value: suggestion.value.clone(),
        latitude,
        longitude,
    })
}

/// True iff the suggestion carries a truthy `house` attribute.
///
/// An address without a house number is treated as incomplete by the form
/// rules; `None` and malformed input are simply "no house number".
#[must_use]
pub fn has_house_number(suggestion: Option<&AddressSuggestion>) -> bool {
    suggestion.is_some_and(|s| s.data.get("house").is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Address equality used by chaining and the degenerate-leg check.
///
/// When both sides carry parseable coordinates, they are the same point iff
/// the raw coordinate strings match exactly. Otherwise falls back to a
/// case-insensitive, trimmed comparison of the display values.
#[must_use]
pub fn same_point(a: Option<&AddressSuggestion>, b: Option<&AddressSuggestion>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    if let (Some((a_lat, a_lon)), Some((b_lat, b_lon))) = (a.raw_geo(), b.raw_geo()) {
        return a_lat == b_lat && a_lon == b_lon;
    }
    a.value.trim().to_lowercase() == b.value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn suggestion(value: &str, lat: &str, lon: &str) -> AddressSuggestion {
        AddressSuggestion::new(value)
            .with_attr("geo_lat", json!(lat))
            .with_attr("geo_lon", json!(lon))
    }

    #[test]
    fn simplify_none_is_none() {
        assert_eq!(simplify(None), None);
    }

    #[test]
    fn simplify_without_coordinates_is_none() {
        let bare = AddressSuggestion::new("Lenin St, 1");
        assert_eq!(simplify(Some(&bare)), None);

        let lat_only = AddressSuggestion::new("Lenin St, 1").with_attr("geo_lat", json!("52.29"));
        assert_eq!(simplify(Some(&lat_only)), None);
    }

    #[test]
    fn simplify_parses_coordinates() {
        let s = suggestion("Lenin St, 1", "52.2978", "104.2964");
        assert_eq!(
            simplify(Some(&s)),
            Some(SimplifiedAddress {
                value: "Lenin St, 1".to_string(),
                latitude: 52.2978,
                longitude: 104.2964,
            })
        );
    }

    #[test]
    fn simplify_rejects_unparseable_coordinates() {
        let s = suggestion("Lenin St, 1", "abc", "def");
        assert_eq!(simplify(Some(&s)), None);

        let n = suggestion("Lenin St, 1", "NaN", "104.0");
        assert_eq!(simplify(Some(&n)), None);
    }

    #[test]
    fn house_number_detection() {
        assert!(!has_house_number(None));

        let no_house = suggestion("Lenin St", "52.0", "104.0");
        assert!(!has_house_number(Some(&no_house)));

        let null_house = AddressSuggestion::new("Lenin St").with_attr("house", json!(null));
        assert!(!has_house_number(Some(&null_house)));

        let empty_house = AddressSuggestion::new("Lenin St").with_attr("house", json!(""));
        assert!(!has_house_number(Some(&empty_house)));

        let with_house = AddressSuggestion::new("Lenin St, 5").with_attr("house", json!("5"));
        assert!(has_house_number(Some(&with_house)));
    }

    #[test]
    fn same_point_prefers_coordinates() {
        let a = suggestion("Lenin St, 1", "52.2978", "104.2964");
        let b = suggestion("Ленина, д. 1", "52.2978", "104.2964");
        assert!(same_point(Some(&a), Some(&b)));

        let c = suggestion("Lenin St, 1", "52.2979", "104.2964");
        assert!(!same_point(Some(&a), Some(&c)));
    }

    #[test]
    fn same_point_falls_back_to_value() {
        let a = AddressSuggestion::new("  Marx St, 5 ");
        let b = AddressSuggestion::new("marx st, 5");
        assert!(same_point(Some(&a), Some(&b)));
        assert!(!same_point(Some(&a), None));
        assert!(!same_point(None, None));
    }

    #[test]
    fn suggestion_roundtrips_unknown_attributes() {
        let raw = json!({
            "value": "Lenin St, 1",
            "data": { "geo_lat": "52.0", "geo_lon": "104.0", "fias_id": "x" }
        });
        let parsed: AddressSuggestion = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }
}
