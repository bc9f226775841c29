use crate::output::{print_json, print_pairs};
use anyhow::Context;
use armada_core::{config::Config, develop::DevEnvironmentStore};

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = DevEnvironmentStore::for_current_session(config)
        .context("failed to determine shell session")?;
    let path = store.locate();
    let record = store
        .load()
        .context("failed to read development record")?
        .filter(|r| r.enabled);

    match record {
        None => {
            if json {
                print_json(&serde_json::json!({
                    "enabled": false,
                    "path": path,
                }))?;
            } else {
                println!("Development mode is off for this session.");
            }
        }
        Some(record) => {
            if json {
                print_json(&serde_json::json!({
                    "enabled": true,
                    "path": path,
                    "record": record,
                    "port_mode": record.port_mode(),
                }))?;
            } else {
                print_pairs(["VARIABLE", "VALUE"], &record.env_pairs());
                println!();
                println!("Ports: {}", record.port_mode());
                println!("Record: {}", path.display());
            }
        }
    }
    Ok(())
}
