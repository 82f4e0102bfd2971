// Search pipeline for the Beausejour Voyage frontend: request construction
// and validation, tolerant response normalization, and the view-state machine
// driving the loading/error/results display.

pub mod backend;
pub mod config;
pub mod controller;
pub mod criteria;
pub mod normalize;
pub mod offers;
pub mod render;
pub mod request;
pub mod validate;

// Re-export key types for convenience
pub use backend::{BackendError, HttpBackend, SearchBackend, UNREACHABLE_MESSAGE};
pub use config::BackendConfig;
pub use controller::{SearchController, ViewState, REQUEST_BUILD_MESSAGE};
pub use criteria::{Airline, FlightCriteria, HotelCriteria, StopsFilter};
pub use normalize::{normalize_results, SearchKind};
pub use offers::{FlightOffer, GeoCode, HotelAddress, HotelOffer, Segment};
pub use request::{
    build_flight_payload, build_hotel_payload, FlightSearchPayload, HotelSearchPayload,
};
pub use validate::{validate_flight, validate_hotel, ValidationError};
