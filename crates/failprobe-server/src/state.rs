use failprobe_core::{Catalog, EventLog, InFlightTracker, ProbeConfig, Prober};
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: ProbeConfig,
    pub log: Arc<EventLog>,
    pub catalog: Arc<Catalog>,
    pub prober: Arc<Prober>,
    pub tracker: Arc<InFlightTracker>,
}

impl AppState {
    /// Wire the full stack: event log, in-flight tracker, log observer, and
    /// a real HTTP transport behind the interceptor. `base_url` is where the
    /// locally-served demo endpoints live.
    pub fn new(config: ProbeConfig, base_url: &str) -> failprobe_core::Result<Self> {
        let log = Arc::new(EventLog::new(config.log_capacity));
        log.append("Hello");

        let tracker = Arc::new(InFlightTracker::new());
        let prober = Prober::over_http(&config, log.clone(), tracker.clone())?;

        Ok(Self {
            config,
            catalog: Arc::new(Catalog::new(base_url)),
            prober: Arc::new(prober),
            log,
            tracker,
        })
    }
}
