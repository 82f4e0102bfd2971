use serde::Serialize;

use crate::criteria::{FlightCriteria, HotelCriteria, StopsFilter};

/// Wire payload for `POST /search`, flight flavor. Optional filters that the
/// user left untouched are omitted entirely rather than sent as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchPayload {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub adults: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_airlines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<String>,
}

/// Wire payload for `POST /search`, hotel flavor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchPayload {
    pub city_code: String,
}

/// Maps validated flight criteria to the backend payload. Airport codes are
/// always upper-cased here so the wire contract does not depend on how the
/// form collected them.
pub fn build_flight_payload(criteria: &FlightCriteria) -> FlightSearchPayload {
    let preferred_airlines = if criteria.preferred_airlines.is_empty() {
        None
    } else {
        Some(
            criteria
                .preferred_airlines
                .iter()
                .map(|a| a.code().to_string())
                .collect(),
        )
    };

    let stops = match criteria.stops {
        StopsFilter::Any => None,
        StopsFilter::Direct => Some("0".to_string()),
        StopsFilter::OneStop => Some("1".to_string()),
        StopsFilter::TwoPlusStops => Some("2+".to_string()),
    };

    FlightSearchPayload {
        origin: criteria.origin.trim().to_ascii_uppercase(),
        destination: criteria.destination.trim().to_ascii_uppercase(),
        date: criteria.date.clone(),
        adults: criteria.adults,
        min_price: criteria.min_price,
        max_price: criteria.max_price,
        preferred_airlines,
        stops,
    }
}

pub fn build_hotel_payload(criteria: &HotelCriteria) -> HotelSearchPayload {
    HotelSearchPayload {
        city_code: criteria.city_code.trim().to_ascii_uppercase(),
    }
}
