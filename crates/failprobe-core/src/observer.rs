use crate::log::EventLog;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// RequestInfo
// ---------------------------------------------------------------------------

/// Correlation token minted for every request the transport sends. The id
/// lets hook pairs for overlapping requests be matched up instead of
/// clobbering a shared flag.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub id: Uuid,
    pub method: &'static str,
    pub url: String,
}

impl RequestInfo {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            method: "GET",
            url: url.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// InFlightTracker
// ---------------------------------------------------------------------------

/// Tracks which request ids are currently between their before-send and
/// after-send hooks. "Is anything in flight" stays well-defined when
/// requests overlap, since each pair inserts and removes only its own id.
#[derive(Default)]
pub struct InFlightTracker {
    ids: Mutex<HashSet<Uuid>>,
}

impl InFlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, id: Uuid) {
        self.ids.lock().unwrap().insert(id);
    }

    pub fn finish(&self, id: Uuid) {
        self.ids.lock().unwrap().remove(&id);
    }

    pub fn in_flight(&self) -> usize {
        self.ids.lock().unwrap().len()
    }

    pub fn is_sending(&self) -> bool {
        !self.ids.lock().unwrap().is_empty()
    }
}

// ---------------------------------------------------------------------------
// RequestObserver
// ---------------------------------------------------------------------------

/// Callback pair fired around every request the transport makes, whoever
/// issued it. Observers are registered at startup and never removed.
pub trait RequestObserver: Send + Sync {
    fn on_before_send(&self, req: &RequestInfo);

    /// `status` is `Some` for any received response, including error
    /// statuses, and `None` for transport-level failure (timeout, refused,
    /// DNS, offline: all observably identical here).
    fn on_after_send(&self, req: &RequestInfo, status: Option<u16>);
}

// ---------------------------------------------------------------------------
// LogObserver
// ---------------------------------------------------------------------------

/// The default observer: traces each request's lifecycle into the event log
/// and keeps the in-flight tracker current.
pub struct LogObserver {
    log: Arc<EventLog>,
    tracker: Arc<InFlightTracker>,
}

impl LogObserver {
    pub fn new(log: Arc<EventLog>, tracker: Arc<InFlightTracker>) -> Self {
        Self { log, tracker }
    }
}

impl RequestObserver for LogObserver {
    fn on_before_send(&self, req: &RequestInfo) {
        self.tracker.begin(req.id);
        self.log
            .append(format!("BEFORE SEND HTTP {} {}", req.method, req.url));
    }

    fn on_after_send(&self, req: &RequestInfo, status: Option<u16>) {
        self.tracker.finish(req.id);
        let outcome = match status {
            Some(code) => format!("HTTP {code}"),
            None => "response is null".to_string(),
        };
        self.log.append(format!(
            "AFTER  SEND HTTP {} {} -> {}",
            req.method, req.url, outcome
        ));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
