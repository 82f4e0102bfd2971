use serde::{Deserialize, Serialize};
use serde_json::Value;

// Typed views over the backend's result records. The pipeline itself passes
// records through as opaque JSON; these models exist for the rendering layer
// and deliberately default every field so a sparse record still parses.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightOffer {
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_time: String,
    pub arrival_airport: String,
    pub arrival_time: String,
    /// ISO-8601 duration token, e.g. "PT3H30M".
    pub duration: String,
    /// Pre-formatted by the backend; rendered verbatim.
    pub price: String,
    pub stops: u32,
    pub segments: Vec<Segment>,
}

/// One physical leg of a multi-leg itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_time: String,
    pub arrival_airport: String,
    pub arrival_time: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelOffer {
    pub name: String,
    pub address: Option<HotelAddress>,
    pub geo_code: Option<GeoCode>,
}

/// The backend sends the address either as a plain string or structured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelAddress {
    Text(String),
    Structured {
        #[serde(default)]
        lines: Vec<String>,
        #[serde(rename = "cityName", default)]
        city_name: Option<String>,
        #[serde(rename = "postalCode", default)]
        postal_code: Option<String>,
        #[serde(rename = "countryCode", default)]
        country_code: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCode {
    pub latitude: f64,
    pub longitude: f64,
}

impl FlightOffer {
    /// Lenient conversion from an opaque result record. `None` means the
    /// record is not flight-shaped at all; missing fields just default.
    pub fn from_record(record: &Value) -> Option<Self> {
        serde_json::from_value(record.clone()).ok()
    }
}

impl HotelOffer {
    pub fn from_record(record: &Value) -> Option<Self> {
        serde_json::from_value(record.clone()).ok()
    }
}
