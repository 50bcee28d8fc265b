//! `failprobe-core` — bounded event log, HTTP failure probes, and transport
//! lifecycle hooks.
//!
//! The pieces compose like this:
//!
//! ```text
//! Catalog          ← fixed menu of failure scenarios
//!     │
//!     ▼
//! Prober           ← one GET per invocation; the single error boundary
//!     │
//!     ▼
//! InterceptedTransport   ← fires RequestObserver hooks around every request
//!     │
//!     ▼
//! HttpTransport    ← reqwest client with a hard timeout
//!
//! EventLog         ← bounded FIFO trace everything above writes into
//! ```

pub mod catalog;
pub mod chain;
pub mod config;
pub mod error;
pub mod log;
pub mod observer;
pub mod probe;
pub mod transport;

pub use catalog::{Action, Catalog};
pub use chain::render_chain;
pub use config::ProbeConfig;
pub use error::{BoxError, ProbeError, Result};
pub use log::{EventLog, LogLine, DEFAULT_CAPACITY};
pub use observer::{InFlightTracker, LogObserver, RequestInfo, RequestObserver};
pub use probe::Prober;
pub use transport::{HttpTransport, InterceptedTransport, Transport, TransportResponse};
