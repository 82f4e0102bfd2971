use chrono::{DateTime, NaiveDateTime};
use std::fmt::Write;

use crate::controller::ViewState;
use crate::offers::{FlightOffer, HotelAddress, HotelOffer, Segment};

// Text presentation of the view state: the card/list/spinner/banner layer of
// the web app reduced to the data it actually consumes. All functions are
// pure string builders.

/// "2024-06-01T08:15:00" (with or without offset) → "08:15". Unparseable
/// timestamps are rendered verbatim rather than dropped.
pub fn format_time(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%H:%M").to_string();
    }
    timestamp.to_string()
}

pub fn format_date(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y-%m-%d").to_string();
    }
    timestamp.to_string()
}

/// "PT3H30M" → "3h 30m". Already-human durations pass through.
pub fn format_duration(duration: &str) -> String {
    duration
        .replace("PT", "")
        .replace('H', "h ")
        .replace('M', "m")
        .trim()
        .to_string()
}

pub fn stops_label(stops: u32) -> String {
    match stops {
        0 => "Direct".to_string(),
        1 => "1 Stop".to_string(),
        n => format!("{} Stops", n),
    }
}

pub fn flight_card(flight: &FlightOffer) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{} #{}  {} EUR", flight.airline, flight.flight_number, flight.price);
    let _ = writeln!(
        card,
        "{} {} ({}) -> {} {} ({})",
        flight.departure_airport,
        format_time(&flight.departure_time),
        format_date(&flight.departure_time),
        flight.arrival_airport,
        format_time(&flight.arrival_time),
        format_date(&flight.arrival_time),
    );
    let _ = writeln!(
        card,
        "{}  {}",
        format_duration(&flight.duration),
        stops_label(flight.stops)
    );
    if !flight.segments.is_empty() {
        let _ = writeln!(card, "Flight Segments:");
        for segment in &flight.segments {
            card.push_str(&segment_line(segment));
        }
    }
    card
}

fn segment_line(segment: &Segment) -> String {
    format!(
        "  {} {}: {} {} -> {} {} ({})\n",
        segment.airline,
        segment.flight_number,
        segment.departure_airport,
        format_time(&segment.departure_time),
        segment.arrival_airport,
        format_time(&segment.arrival_time),
        format_duration(&segment.duration),
    )
}

pub fn hotel_card(hotel: &HotelOffer) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{}", hotel.name);
    if let Some(address) = &hotel.address {
        let _ = writeln!(card, "{}", format_address(address));
    }
    if let Some(geo) = &hotel.geo_code {
        let _ = writeln!(card, "Lat: {}, Lng: {}", geo.latitude, geo.longitude);
    }
    card
}

fn format_address(address: &HotelAddress) -> String {
    match address {
        HotelAddress::Text(text) => text.clone(),
        HotelAddress::Structured {
            lines,
            city_name,
            postal_code,
            country_code,
        } => {
            let mut parts: Vec<String> = lines.clone();
            if let Some(city) = city_name {
                parts.push(city.clone());
            }
            if let Some(postal) = postal_code {
                parts.push(postal.clone());
            }
            if let Some(country) = country_code {
                parts.push(country.clone());
            }
            parts.join(", ")
        }
    }
}

/// Renders the flight side of the page for a given view state. Records that
/// do not parse as flight offers are skipped.
pub fn render_flight_results(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => "Searching for flights...\n".to_string(),
        ViewState::Error(message) => format!("Oops! Something went wrong\n{}\n", message),
        ViewState::Results(records) => {
            let flights: Vec<FlightOffer> =
                records.iter().filter_map(FlightOffer::from_record).collect();
            if flights.is_empty() {
                return "No flights found\nPlease try different search criteria or check back later.\n"
                    .to_string();
            }
            let mut out = format!(
                "Found {} flight{} for your search\n\n",
                flights.len(),
                if flights.len() == 1 { "" } else { "s" }
            );
            for flight in &flights {
                out.push_str(&flight_card(flight));
                out.push('\n');
            }
            out
        }
    }
}

pub fn render_hotel_results(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => "Searching for hotels...\n".to_string(),
        ViewState::Error(message) => format!("Oops! Something went wrong\n{}\n", message),
        ViewState::Results(records) => {
            let hotels: Vec<HotelOffer> =
                records.iter().filter_map(HotelOffer::from_record).collect();
            if hotels.is_empty() {
                return "No hotels found.\n".to_string();
            }
            let mut out = String::new();
            for hotel in &hotels {
                out.push_str(&hotel_card(hotel));
                out.push('\n');
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offers::GeoCode;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("PT3H30M", "3h 30m"; "hours and minutes")]
    #[test_case("PT45M", "45m"; "minutes only")]
    #[test_case("PT2H", "2h"; "hours only")]
    #[test_case("3h 30m", "3h 30m"; "already formatted")]
    fn duration_formatting(input: &str, expected: &str) {
        assert_eq!(format_duration(input), expected);
    }

    #[test_case(0, "Direct")]
    #[test_case(1, "1 Stop")]
    #[test_case(2, "2 Stops")]
    fn stops_labels(stops: u32, expected: &str) {
        assert_eq!(stops_label(stops), expected);
    }

    #[test]
    fn time_formatting_handles_naive_and_offset_timestamps() {
        assert_eq!(format_time("2024-06-01T08:15:00"), "08:15");
        assert_eq!(format_time("2024-06-01T08:15:00+00:00"), "08:15");
        assert_eq!(format_time("not a timestamp"), "not a timestamp");
    }

    #[test]
    fn flight_card_includes_route_price_and_segments() {
        let offer = FlightOffer {
            airline: "AT".to_string(),
            flight_number: "AT752".to_string(),
            departure_airport: "CMN".to_string(),
            departure_time: "2024-06-01T08:15:00".to_string(),
            arrival_airport: "CDG".to_string(),
            arrival_time: "2024-06-01T11:45:00".to_string(),
            duration: "PT3H30M".to_string(),
            price: "245.00".to_string(),
            stops: 0,
            segments: vec![Segment {
                airline: "AT".to_string(),
                flight_number: "AT752".to_string(),
                departure_airport: "CMN".to_string(),
                departure_time: "2024-06-01T08:15:00".to_string(),
                arrival_airport: "CDG".to_string(),
                arrival_time: "2024-06-01T11:45:00".to_string(),
                duration: "PT3H30M".to_string(),
            }],
        };

        let card = flight_card(&offer);
        assert!(card.contains("AT #AT752  245.00 EUR"));
        assert!(card.contains("CMN 08:15 (2024-06-01) -> CDG 11:45 (2024-06-01)"));
        assert!(card.contains("3h 30m  Direct"));
        assert!(card.contains("Flight Segments:"));
    }

    #[test]
    fn hotel_card_renders_both_address_shapes() {
        let plain = HotelOffer {
            name: "Ibis".to_string(),
            address: Some(HotelAddress::Text("12 Rue de Rivoli".to_string())),
            geo_code: Some(GeoCode {
                latitude: 48.85,
                longitude: 2.35,
            }),
        };
        let card = hotel_card(&plain);
        assert!(card.contains("Ibis"));
        assert!(card.contains("12 Rue de Rivoli"));
        assert!(card.contains("Lat: 48.85, Lng: 2.35"));

        let structured = HotelOffer {
            name: "Novotel".to_string(),
            address: Some(HotelAddress::Structured {
                lines: vec!["1 Avenue de la Gare".to_string()],
                city_name: Some("Paris".to_string()),
                postal_code: Some("75012".to_string()),
                country_code: Some("FR".to_string()),
            }),
            geo_code: None,
        };
        assert!(hotel_card(&structured).contains("1 Avenue de la Gare, Paris, 75012, FR"));
    }

    #[test]
    fn view_states_render_spinner_error_and_empty_messages() {
        assert_eq!(render_flight_results(&ViewState::Idle), "");
        assert!(render_flight_results(&ViewState::Loading).contains("Searching for flights"));
        assert!(
            render_flight_results(&ViewState::Error("boom".to_string())).contains("boom")
        );
        assert!(render_flight_results(&ViewState::Results(vec![]))
            .contains("No flights found"));
        assert!(render_hotel_results(&ViewState::Results(vec![])).contains("No hotels found"));
    }

    #[test]
    fn result_count_line_pluralizes() {
        let one = ViewState::Results(vec![json!({"airline": "AT"})]);
        assert!(render_flight_results(&one).contains("Found 1 flight for your search"));

        let two = ViewState::Results(vec![json!({"airline": "AT"}), json!({"airline": "AF"})]);
        assert!(render_flight_results(&two).contains("Found 2 flights for your search"));
    }

    #[test]
    fn unparseable_records_are_skipped() {
        let state = ViewState::Results(vec![json!("bogus"), json!({"airline": "AT"})]);
        let out = render_flight_results(&state);
        assert!(out.contains("Found 1 flight"));
    }
}
