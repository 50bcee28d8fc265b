use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;
use tokio::sync::broadcast;

/// Default number of lines retained before the oldest are evicted.
pub const DEFAULT_CAPACITY: usize = 20;

// ---------------------------------------------------------------------------
// LogLine
// ---------------------------------------------------------------------------

/// One line of the event log. Separator lines carry no timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLine {
    pub timestamp: Option<DateTime<Utc>>,
    pub text: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timestamp {
            Some(ts) => write!(f, "[{}] {}", ts.format("%H:%M:%S%.3f"), self.text),
            None => f.write_str(&self.text),
        }
    }
}

// ---------------------------------------------------------------------------
// EventLog
// ---------------------------------------------------------------------------

/// Bounded, time-ordered trace of request activity.
///
/// Once `capacity` is exceeded, lines are evicted from the front, oldest
/// insertion first (pure FIFO; access recency is irrelevant). Every write
/// sends a unit notification on a broadcast channel so subscribers can
/// refresh whatever renders the log. The mutex serializes writers, which
/// keeps the eviction invariant intact when probes overlap.
pub struct EventLog {
    lines: Mutex<VecDeque<LogLine>>,
    capacity: usize,
    notify: broadcast::Sender<()>,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        let (notify, _) = broadcast::channel(64);
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            notify,
        }
    }

    /// Append a line stamped with the current time.
    pub fn append(&self, text: impl Into<String>) {
        self.append_with(Some(Utc::now()), text);
    }

    /// Append an empty, unstamped separator line.
    pub fn append_blank(&self) {
        self.append_with(None, "");
    }

    /// Append a line at the tail, evicting from the head past capacity.
    pub fn append_with(&self, timestamp: Option<DateTime<Utc>>, text: impl Into<String>) {
        {
            let mut lines = self.lines.lock().unwrap();
            lines.push_back(LogLine {
                timestamp,
                text: text.into(),
            });
            while lines.len() > self.capacity {
                lines.pop_front();
            }
        }
        // Nobody listening is fine; ignore the send result.
        let _ = self.notify.send(());
    }

    /// Snapshot of the current contents, oldest first.
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
        let _ = self.notify.send(());
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Receiver that gets a unit message after every write.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.notify.subscribe()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_puts_line_at_tail() {
        let log = EventLog::new(5);
        log.append("first");
        log.append("second");
        let lines = log.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "second");
        assert!(lines[1].timestamp.is_some());
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let log = EventLog::new(3);
        for i in 0..50 {
            log.append(format!("line {i}"));
            assert!(log.len() <= 3, "capacity invariant broken at line {i}");
        }
    }

    #[test]
    fn eviction_is_fifo_oldest_first() {
        let log = EventLog::new(3);
        for i in 0..5 {
            log.append(format!("line {i}"));
        }
        let lines = log.lines();
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        // lines 0 and 1 evicted, insertion order preserved
        assert_eq!(texts, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn capacity_plus_one_evicts_exactly_the_first() {
        let cap = 4;
        let log = EventLog::new(cap);
        for i in 0..=cap {
            log.append(format!("line {i}"));
        }
        let lines = log.lines();
        assert_eq!(lines.len(), cap);
        assert_eq!(lines[0].text, "line 1");
    }

    #[test]
    fn reads_are_idempotent() {
        let log = EventLog::new(5);
        log.append("a");
        log.append_blank();
        log.append("b");
        let first: Vec<String> = log.lines().iter().map(|l| l.text.clone()).collect();
        let second: Vec<String> = log.lines().iter().map(|l| l.text.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn blank_line_has_no_timestamp() {
        let log = EventLog::new(5);
        log.append_blank();
        let lines = log.lines();
        assert!(lines[0].timestamp.is_none());
        assert!(lines[0].text.is_empty());
    }

    #[test]
    fn clear_empties_the_log() {
        let log = EventLog::new(5);
        log.append("a");
        log.append("b");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn every_append_notifies_subscribers() {
        let log = EventLog::new(5);
        let mut rx = log.subscribe();
        log.append("a");
        log.append_blank();
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err(), "no spurious notifications");
    }

    #[test]
    fn clear_notifies_subscribers() {
        let log = EventLog::new(5);
        log.append("a");
        let mut rx = log.subscribe();
        log.clear();
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn display_formats_with_and_without_timestamp() {
        let stamped = LogLine {
            timestamp: Some(Utc::now()),
            text: "hello".to_string(),
        };
        assert!(stamped.to_string().ends_with("hello"));
        assert!(stamped.to_string().starts_with('['));

        let bare = LogLine {
            timestamp: None,
            text: "hello".to_string(),
        };
        assert_eq!(bare.to_string(), "hello");
    }
}
