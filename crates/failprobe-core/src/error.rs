use thiserror::Error;

/// Boxed cause carried by probe failures. Keeps the full chain from the
/// underlying client intact for rendering.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The transport produced no response at all. Timeout, refused
    /// connection, DNS failure, and CORS-style refusal all land here and are
    /// indistinguishable at this layer.
    #[error("no response: GET {url}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// A response arrived but its status code indicates failure.
    #[error("response status {status}: GET {url}")]
    Status {
        status: u16,
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl ProbeError {
    /// Status code of the received response, if one was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accessor_only_reports_received_responses() {
        let err = ProbeError::Status {
            status: 500,
            url: "/api/x".to_string(),
            source: "server said no".into(),
        };
        assert_eq!(err.status(), Some(500));

        let err = ProbeError::Transport {
            url: "/api/x".to_string(),
            source: "wire cut".into(),
        };
        assert_eq!(err.status(), None);
    }

    #[test]
    fn display_carries_status_and_url() {
        let err = ProbeError::Status {
            status: 500,
            url: "/api/server-response-http500".to_string(),
            source: "oops".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/api/server-response-http500"));
    }
}
