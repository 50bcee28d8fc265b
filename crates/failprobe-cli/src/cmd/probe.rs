use crate::output::print_json;
use anyhow::{anyhow, Result};
use failprobe_core::{Catalog, EventLog, InFlightTracker, ProbeConfig, Prober};
use std::sync::Arc;

/// Run one probe to completion and print the collected log.
///
/// `target` is resolved in order: a catalog label, an absolute URL, or a
/// `/path` against `base_url`.
pub fn run(target: &str, base_url: &str, config: ProbeConfig, json: bool) -> Result<()> {
    let catalog = Catalog::new(base_url);
    let url = resolve_target(&catalog, target, base_url)?;

    let log = Arc::new(EventLog::new(config.log_capacity));
    let tracker = Arc::new(InFlightTracker::new());
    let prober = Prober::over_http(&config, log.clone(), tracker)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(prober.probe(&url));

    if json {
        return print_json(&log.lines());
    }
    for line in log.lines() {
        println!("{line}");
    }
    Ok(())
}

fn resolve_target(catalog: &Catalog, target: &str, base_url: &str) -> Result<String> {
    if let Some(action) = catalog.find(target) {
        return Ok(action.url.clone());
    }
    if target.starts_with("http://") || target.starts_with("https://") {
        return Ok(target.to_string());
    }
    if target.starts_with('/') {
        return Ok(format!("{}{}", base_url.trim_end_matches('/'), target));
    }
    Err(anyhow!(
        "unknown scenario '{target}': run `failprobe list`, or pass a URL"
    ))
}
