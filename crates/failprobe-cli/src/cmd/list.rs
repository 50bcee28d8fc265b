use crate::output::{print_json, print_table};
use anyhow::Result;
use failprobe_core::Catalog;

pub fn run(base_url: &str, json: bool) -> Result<()> {
    let catalog = Catalog::new(base_url);

    if json {
        return print_json(&catalog.actions());
    }

    let rows: Vec<Vec<String>> = catalog
        .actions()
        .iter()
        .map(|a| vec![a.label.clone(), a.url.clone()])
        .collect();
    print_table(&["SCENARIO", "TARGET"], &rows);
    Ok(())
}
