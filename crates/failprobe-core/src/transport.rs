use crate::error::{ProbeError, Result};
use crate::observer::{RequestInfo, RequestObserver};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// The minimal view of a received response: by the time a probe sees it,
/// only the status matters.
#[derive(Debug, Clone, Copy)]
pub struct TransportResponse {
    pub status: u16,
}

/// HTTP client abstraction. Implementations either produce a response or a
/// transport-level failure; error statuses are raised as errors rather than
/// returned, so callers have a single failure path.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

// ---------------------------------------------------------------------------
// HttpTransport
// ---------------------------------------------------------------------------

/// Real transport over a reqwest client with a hard request timeout.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProbeError::ClientBuild)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ProbeError::Transport {
                url: url.to_string(),
                source: source.into(),
            })?;

        let status = resp.status().as_u16();
        match resp.error_for_status() {
            Ok(_) => Ok(TransportResponse { status }),
            Err(source) => Err(ProbeError::Status {
                status,
                url: url.to_string(),
                source: source.into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// InterceptedTransport
// ---------------------------------------------------------------------------

/// Wraps a transport and fires the registered observers around every request
/// it carries: a global interceptor at the transport boundary, not scoped
/// to any one call site. Observers are attached at construction and live as
/// long as the transport.
pub struct InterceptedTransport {
    inner: Arc<dyn Transport>,
    observers: Vec<Arc<dyn RequestObserver>>,
}

impl InterceptedTransport {
    pub fn new(inner: Arc<dyn Transport>, observers: Vec<Arc<dyn RequestObserver>>) -> Self {
        Self { inner, observers }
    }
}

#[async_trait]
impl Transport for InterceptedTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let req = RequestInfo::get(url);
        for obs in &self.observers {
            obs.on_before_send(&req);
        }

        let result = self.inner.get(url).await;

        // Any received response has a status, even one being raised as an
        // error; transport-level failure has none.
        let status = match &result {
            Ok(resp) => Some(resp.status),
            Err(e) => e.status(),
        };
        for obs in &self.observers {
            obs.on_after_send(&req, status);
        }

        result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Scripted outcomes for a transport with no network behind it.
    #[derive(Clone, Copy)]
    enum Script {
        Ok(u16),
        ErrorStatus(u16),
        NoResponse,
    }

    struct ScriptedTransport(Script);

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse> {
            match self.0 {
                Script::Ok(status) => Ok(TransportResponse { status }),
                Script::ErrorStatus(status) => Err(ProbeError::Status {
                    status,
                    url: url.to_string(),
                    source: "status error".into(),
                }),
                Script::NoResponse => Err(ProbeError::Transport {
                    url: url.to_string(),
                    source: "connection reset".into(),
                }),
            }
        }
    }

    /// Records hook firings so tests can assert ordering and payloads.
    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RequestObserver for RecordingObserver {
        fn on_before_send(&self, req: &RequestInfo) {
            self.events
                .lock()
                .unwrap()
                .push(format!("before {} {}", req.method, req.url));
        }

        fn on_after_send(&self, req: &RequestInfo, status: Option<u16>) {
            self.events
                .lock()
                .unwrap()
                .push(format!("after {} {} {:?}", req.method, req.url, status));
        }
    }

    fn intercepted(script: Script, observer: Arc<RecordingObserver>) -> InterceptedTransport {
        InterceptedTransport::new(Arc::new(ScriptedTransport(script)), vec![observer])
    }

    #[tokio::test]
    async fn hooks_fire_in_order_around_success() {
        let observer = Arc::new(RecordingObserver::default());
        let transport = intercepted(Script::Ok(200), observer.clone());

        let resp = transport.get("/api/ok").await.unwrap();
        assert_eq!(resp.status, 200);

        let events = observer.events.lock().unwrap();
        assert_eq!(events[0], "before GET /api/ok");
        assert_eq!(events[1], "after GET /api/ok Some(200)");
    }

    #[tokio::test]
    async fn error_status_still_reports_the_received_status() {
        let observer = Arc::new(RecordingObserver::default());
        let transport = intercepted(Script::ErrorStatus(500), observer.clone());

        let err = transport.get("/api/http500").await.unwrap_err();
        assert_eq!(err.status(), Some(500));

        let events = observer.events.lock().unwrap();
        assert_eq!(events[1], "after GET /api/http500 Some(500)");
    }

    #[tokio::test]
    async fn transport_failure_reports_no_status() {
        let observer = Arc::new(RecordingObserver::default());
        let transport = intercepted(Script::NoResponse, observer.clone());

        let err = transport.get("/api/gone").await.unwrap_err();
        assert_eq!(err.status(), None);

        let events = observer.events.lock().unwrap();
        assert_eq!(events[1], "after GET /api/gone None");
    }

    #[tokio::test]
    async fn each_request_gets_a_fresh_id() {
        struct IdCapture(Mutex<Vec<uuid::Uuid>>);
        impl RequestObserver for IdCapture {
            fn on_before_send(&self, req: &RequestInfo) {
                self.0.lock().unwrap().push(req.id);
            }
            fn on_after_send(&self, _req: &RequestInfo, _status: Option<u16>) {}
        }

        let capture = Arc::new(IdCapture(Mutex::new(Vec::new())));
        let transport = InterceptedTransport::new(
            Arc::new(ScriptedTransport(Script::Ok(204))),
            vec![capture.clone()],
        );

        transport.get("/a").await.unwrap();
        transport.get("/b").await.unwrap();

        let ids = capture.0.lock().unwrap();
        assert_ne!(ids[0], ids[1]);
    }
}
