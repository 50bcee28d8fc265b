use crate::probe::Prober;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One demo scenario: a label for the UI and the URL whose GET triggers the
/// failure mode being demonstrated. Identity is the label.
#[derive(Debug, Clone, Serialize)]
pub struct Action {
    pub label: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The fixed menu of demo scenarios, in declaration order, never mutated
/// after construction.
pub struct Catalog {
    actions: Vec<Action>,
}

impl Catalog {
    /// `base_url` points at the local demo server backing the first two
    /// scenarios. The remaining targets are addresses chosen to never
    /// answer: an unreachable host, a host with nothing listening, and a
    /// host that will refuse the cross-origin exchange.
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let action = |label: &str, url: String| Action {
            label: label.to_string(),
            url,
        };
        let actions = vec![
            action(
                "Server response timed out",
                format!("{base}/api/server-response-timed-out"),
            ),
            action(
                "Server response HTTP 500",
                format!("{base}/api/server-response-http500"),
            ),
            action(
                "Server is unreachable",
                "https://10.0.0.1/api/server-isnot-reachable".to_string(),
            ),
            action(
                "Server exists but is not listening",
                "https://192.168.11.1/api/server-isnot-listen".to_string(),
            ),
            action(
                "Server respond CORS error",
                "https://8.8.8.8/api/server-response-CORS-error".to_string(),
            ),
        ];
        Self { actions }
    }

    /// Ordered scenarios, as declared.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn find(&self, label: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.label == label)
    }

    /// Run one scenario. The probe is its own error boundary, so this never
    /// fails; every outcome lands in the event log.
    pub async fn invoke(&self, prober: &Prober, action: &Action) {
        prober.probe(&action.url).await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_scenarios_in_declaration_order() {
        let catalog = Catalog::new("http://localhost:3000");
        let labels: Vec<&str> = catalog.actions().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Server response timed out",
                "Server response HTTP 500",
                "Server is unreachable",
                "Server exists but is not listening",
                "Server respond CORS error",
            ]
        );
    }

    #[test]
    fn local_scenarios_use_the_base_url() {
        let catalog = Catalog::new("http://localhost:3000/");
        assert_eq!(
            catalog.actions()[0].url,
            "http://localhost:3000/api/server-response-timed-out"
        );
        assert_eq!(
            catalog.actions()[1].url,
            "http://localhost:3000/api/server-response-http500"
        );
    }

    #[test]
    fn find_matches_on_label() {
        let catalog = Catalog::new("http://localhost:3000");
        assert!(catalog.find("Server is unreachable").is_some());
        assert!(catalog.find("Server is cheerful").is_none());
    }

    #[test]
    fn labels_are_unique() {
        let catalog = Catalog::new("http://localhost:3000");
        let mut labels: Vec<&str> = catalog.actions().iter().map(|a| a.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), catalog.actions().len());
    }
}
