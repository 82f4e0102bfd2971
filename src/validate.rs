use thiserror::Error;

use crate::criteria::{FlightCriteria, HotelCriteria};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter valid origin, destination, departure date, and a positive number of adults.")]
    InvalidFlightCriteria,

    #[error("Please enter a valid 3-letter city code (e.g., PAR).")]
    InvalidCityCode,
}

/// Pre-submission check for flight searches. Returns the criteria unchanged;
/// no normalization happens here (the request builder owns casing).
pub fn validate_flight(criteria: &FlightCriteria) -> Result<&FlightCriteria, ValidationError> {
    if criteria.origin.trim().is_empty()
        || criteria.destination.trim().is_empty()
        || criteria.date.trim().is_empty()
        || criteria.adults < 1
    {
        return Err(ValidationError::InvalidFlightCriteria);
    }
    Ok(criteria)
}

/// Pre-submission check for hotel searches. The city code is trimmed and
/// upper-cased, then must be exactly three ASCII letters. The normalized code
/// is returned so callers submit what was actually accepted.
pub fn validate_hotel(criteria: &HotelCriteria) -> Result<HotelCriteria, ValidationError> {
    let code = criteria.city_code.trim().to_ascii_uppercase();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(HotelCriteria { city_code: code })
    } else {
        Err(ValidationError::InvalidCityCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn valid_flight_criteria_pass_unchanged() {
        let criteria = FlightCriteria::new("CMN", "CDG", "2024-06-01", 2);
        let validated = validate_flight(&criteria).unwrap();
        assert_eq!(validated, &criteria);
    }

    #[test]
    fn lowercase_codes_are_not_rejected() {
        // Casing is a request-builder concern, not a validation failure.
        let criteria = FlightCriteria::new("cmn", "cdg", "2024-06-01", 1);
        assert!(validate_flight(&criteria).is_ok());
    }

    #[test_case("", "CDG", "2024-06-01", 2; "empty origin")]
    #[test_case("   ", "CDG", "2024-06-01", 2; "blank origin")]
    #[test_case("CMN", "", "2024-06-01", 2; "empty destination")]
    #[test_case("CMN", "CDG", "", 2; "empty date")]
    #[test_case("CMN", "CDG", "2024-06-01", 0; "zero adults")]
    #[test_case("CMN", "CDG", "2024-06-01", -1; "negative adults")]
    fn invalid_flight_criteria_fail(origin: &str, destination: &str, date: &str, adults: i64) {
        let criteria = FlightCriteria::new(origin, destination, date, adults);
        assert_eq!(
            validate_flight(&criteria),
            Err(ValidationError::InvalidFlightCriteria)
        );
    }

    #[test_case("PAR", Some("PAR"); "already canonical")]
    #[test_case("par", Some("PAR"); "lowercase accepted and upper cased")]
    #[test_case("  nyc  ", Some("NYC"); "whitespace trimmed")]
    #[test_case("PARI", None; "four letters rejected")]
    #[test_case("PA", None; "two letters rejected")]
    #[test_case("12A", None; "digits rejected")]
    #[test_case("", None; "empty rejected")]
    #[test_case("P R", None; "inner space rejected")]
    fn hotel_city_code_validation(input: &str, expected: Option<&str>) {
        let result = validate_hotel(&HotelCriteria::new(input));
        match expected {
            Some(code) => assert_eq!(result.unwrap().city_code, code),
            None => assert_eq!(result, Err(ValidationError::InvalidCityCode)),
        }
    }
}
