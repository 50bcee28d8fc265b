use crate::log::EventLog;
use std::error::Error;

/// Depth cap for walking untrusted cause chains. Real transport chains are
/// three or four levels at most.
const MAX_DEPTH: usize = 32;

/// Write one log line per error in the cause chain, indented two spaces per
/// level. The walk follows `Error::source()` until the root cause; chains
/// deeper than [`MAX_DEPTH`] get a truncation marker instead of looping on.
pub fn render_chain(log: &EventLog, err: &(dyn Error + 'static)) {
    let mut current: Option<&(dyn Error + 'static)> = Some(err);
    let mut depth = 0;
    while let Some(e) = current {
        if depth >= MAX_DEPTH {
            log.append(format!("{:indent$}(cause chain truncated)", "", indent = depth * 2));
            return;
        }
        log.append(format!("{:indent$}{e}", "", indent = depth * 2));
        current = e.source();
        depth += 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
