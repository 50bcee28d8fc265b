use crate::chain;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::log::EventLog;
use crate::observer::{InFlightTracker, LogObserver, RequestObserver};
use crate::transport::{HttpTransport, InterceptedTransport, Transport};
use std::sync::Arc;

/// Issues one GET per call and logs the request lifecycle around it.
///
/// This is the single error boundary of the whole demo: every failure the
/// transport can produce is caught here, rendered into the event log as a
/// cause chain, and goes no further.
pub struct Prober {
    transport: Arc<dyn Transport>,
    log: Arc<EventLog>,
}

impl Prober {
    pub fn new(transport: Arc<dyn Transport>, log: Arc<EventLog>) -> Self {
        Self { transport, log }
    }

    /// Production wiring: a reqwest transport with the configured timeout,
    /// behind the interceptor, with the log observer registered against the
    /// given tracker.
    pub fn over_http(
        config: &ProbeConfig,
        log: Arc<EventLog>,
        tracker: Arc<InFlightTracker>,
    ) -> Result<Self> {
        let observer: Arc<dyn RequestObserver> = Arc::new(LogObserver::new(log.clone(), tracker));
        let http: Arc<dyn Transport> = Arc::new(HttpTransport::new(config.timeout())?);
        let transport = Arc::new(InterceptedTransport::new(http, vec![observer]));
        Ok(Self::new(transport, log))
    }

    pub async fn probe(&self, url: &str) {
        tracing::debug!(url, "probe dispatched");
        self.log.append_blank();
        self.log.append(format!("BEGIN HTTP GET {url}..."));
        match self.transport.get(url).await {
            Ok(_) => self.log.append(format!("END   HTTP GET {url}")),
            Err(e) => {
                self.log.append(format!("ERROR HTTP GET {url}"));
                chain::render_chain(&self.log, &e);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
