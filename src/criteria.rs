use serde::{Deserialize, Serialize};

/// Airlines the search form offers as preference filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Airline {
    #[serde(rename = "AT")]
    RoyalAirMaroc,
    #[serde(rename = "AF")]
    AirFrance,
    #[serde(rename = "LH")]
    Lufthansa,
    #[serde(rename = "BA")]
    BritishAirways,
    #[serde(rename = "EK")]
    Emirates,
}

impl Airline {
    pub const ALL: [Airline; 5] = [
        Airline::RoyalAirMaroc,
        Airline::AirFrance,
        Airline::Lufthansa,
        Airline::BritishAirways,
        Airline::Emirates,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Airline::RoyalAirMaroc => "AT",
            Airline::AirFrance => "AF",
            Airline::Lufthansa => "LH",
            Airline::BritishAirways => "BA",
            Airline::Emirates => "EK",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Airline::RoyalAirMaroc => "Royal Air Maroc",
            Airline::AirFrance => "Air France",
            Airline::Lufthansa => "Lufthansa",
            Airline::BritishAirways => "British Airways",
            Airline::Emirates => "Emirates",
        }
    }
}

/// Layover filter. The backend speaks the form values: "", "0", "1", "2+".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopsFilter {
    #[default]
    #[serde(rename = "")]
    Any,
    #[serde(rename = "0")]
    Direct,
    #[serde(rename = "1")]
    OneStop,
    #[serde(rename = "2+")]
    TwoPlusStops,
}

impl StopsFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StopsFilter::Any => "Any",
            StopsFilter::Direct => "Direct",
            StopsFilter::OneStop => "1 stop",
            StopsFilter::TwoPlusStops => "2+ stops",
        }
    }
}

/// A user's flight search intent, as collected by the search form.
///
/// `origin`/`destination` are airport or city codes; casing is normalized at
/// request-build time, not here. `date` stays a `YYYY-MM-DD` string since the
/// form widget already constrains it. `adults` is signed so that out-of-range
/// form input reaches the validator instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightCriteria {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub adults: i64,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub preferred_airlines: Vec<Airline>,
    pub stops: StopsFilter,
}

impl FlightCriteria {
    pub fn new(origin: &str, destination: &str, date: &str, adults: i64) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date: date.to_string(),
            adults,
            min_price: None,
            max_price: None,
            preferred_airlines: Vec::new(),
            stops: StopsFilter::Any,
        }
    }
}

/// A user's hotel search intent. A separate flow from flights: the only input
/// is a 3-letter city code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelCriteria {
    pub city_code: String,
}

impl HotelCriteria {
    pub fn new(city_code: &str) -> Self {
        Self {
            city_code: city_code.to_string(),
        }
    }
}
