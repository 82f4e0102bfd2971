use serde_json::Value;

/// Which result family a search expects; selects the envelope field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Flights,
    Hotels,
}

impl SearchKind {
    pub fn envelope_field(&self) -> &'static str {
        match self {
            SearchKind::Flights => "flights",
            SearchKind::Hotels => "hotels",
        }
    }
}

/// One recognized response shape: a predicate plus its extraction rule.
/// Rules are tried strictly in order; the first match wins.
struct ShapeRule {
    name: &'static str,
    extract: fn(SearchKind, &Value) -> Option<Vec<Value>>,
}

const SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule {
        name: "envelope-field",
        extract: |kind, value| {
            value
                .get(kind.envelope_field())
                .and_then(Value::as_array)
                .cloned()
        },
    },
    ShapeRule {
        name: "bare-array",
        extract: |_, value| value.as_array().cloned(),
    },
];

/// Normalizes whatever JSON the backend returned into an ordered record list.
///
/// The envelope is not contractually fixed, so this must never fail: an object
/// carrying a `flights`/`hotels` array yields that array, a bare array yields
/// itself, and any other shape degrades to zero results. Records come back as
/// opaque values; no field-level checks happen here.
pub fn normalize_results(kind: SearchKind, response: &Value) -> Vec<Value> {
    for rule in SHAPE_RULES {
        if let Some(records) = (rule.extract)(kind, response) {
            tracing::debug!(rule = rule.name, count = records.len(), "response shape matched");
            return records;
        }
    }
    tracing::debug!("no response shape matched, treating as zero results");
    Vec::new()
}
