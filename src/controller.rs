use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::backend::{BackendError, HttpBackend, SearchBackend};
use crate::config::BackendConfig;
use crate::criteria::{FlightCriteria, HotelCriteria};
use crate::normalize::{normalize_results, SearchKind};
use crate::request::{build_flight_payload, build_hotel_payload};
use crate::validate::{validate_flight, validate_hotel};

/// What the rendering layer should currently show. Exactly one variant holds
/// at any time; transitions happen only through `submit_*` calls and the
/// completion of the request they issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Error(String),
    Results(Vec<Value>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Message published when a search payload cannot be serialized. Distinct
/// from the backend's response errors: nothing left the process.
pub const REQUEST_BUILD_MESSAGE: &str = "Unable to prepare the search request.";

/// Owns the validate → build → submit → normalize → publish pipeline and the
/// view state it drives.
///
/// Submitting while a request is outstanding does not cancel it, but each
/// submission takes a sequence number and every state write goes through
/// `publish_if_current`, which only lands while that number is still the
/// latest. A slow superseded request is discarded instead of overwriting the
/// state a later search produced, and it cannot re-enter `Loading` either.
pub struct SearchController {
    backend: Arc<dyn SearchBackend>,
    state: watch::Sender<ViewState>,
    seq: AtomicU64,
    publish_lock: Mutex<()>,
}

impl SearchController {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            backend,
            state,
            seq: AtomicU64::new(0),
            publish_lock: Mutex::new(()),
        }
    }

    /// Controller wired to the HTTP backend described by `config`.
    pub fn with_http(config: &BackendConfig) -> Result<Self, BackendError> {
        Ok(Self::new(Arc::new(HttpBackend::new(config)?)))
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Watch handle for rendering layers that want change notifications.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub async fn submit_flight_search(&self, criteria: &FlightCriteria) {
        let seq = self.next_seq();
        match validate_flight(criteria) {
            Ok(validated) => {
                let payload = serde_json::to_value(build_flight_payload(validated));
                self.dispatch(seq, SearchKind::Flights, payload).await;
            }
            Err(e) => self.publish_validation_error(seq, e.to_string()),
        }
    }

    pub async fn submit_hotel_search(&self, criteria: &HotelCriteria) {
        let seq = self.next_seq();
        match validate_hotel(criteria) {
            Ok(validated) => {
                let payload = serde_json::to_value(build_hotel_payload(&validated));
                self.dispatch(seq, SearchKind::Hotels, payload).await;
            }
            Err(e) => self.publish_validation_error(seq, e.to_string()),
        }
    }

    /// Every submission claims a sequence number, including ones that fail
    /// validation, so an in-flight response can never overwrite the outcome
    /// of a later submission.
    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, seq: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == seq
    }

    /// Writes `next` only while `seq` is still the latest submission. The
    /// lock makes the currency check and the write one atomic step, so a
    /// superseded task can never land a write between a newer task's check
    /// and publish. Returns whether the write happened.
    fn publish_if_current(&self, seq: u64, next: ViewState) -> bool {
        let _guard = self.publish_lock.lock().unwrap();
        if self.is_current(seq) {
            self.state.send_replace(next);
            true
        } else {
            false
        }
    }

    fn publish_validation_error(&self, seq: u64, message: String) {
        debug!(%message, "search rejected before submission");
        self.publish_if_current(seq, ViewState::Error(message));
    }

    async fn dispatch(
        &self,
        seq: u64,
        kind: SearchKind,
        payload: Result<Value, serde_json::Error>,
    ) {
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to serialize search payload");
                self.publish_if_current(seq, ViewState::Error(REQUEST_BUILD_MESSAGE.to_string()));
                return;
            }
        };

        if !self.publish_if_current(seq, ViewState::Loading) {
            debug!(seq, "superseded before dispatch, skipping request");
            return;
        }
        debug!(seq, ?kind, "search submitted");

        let outcome = self.backend.search(payload).await;

        let next = match outcome {
            Ok(value) => {
                let records = normalize_results(kind, &value);
                debug!(seq, count = records.len(), "search completed");
                ViewState::Results(records)
            }
            Err(e) => {
                warn!(seq, error = %e, "search attempt failed");
                ViewState::Error(e.to_string())
            }
        };
        if !self.publish_if_current(seq, next) {
            debug!(seq, "discarding response from superseded search");
        }
    }
}
