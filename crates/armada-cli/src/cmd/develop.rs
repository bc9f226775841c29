use crate::output::print_json;
use crate::workdir;
use anyhow::Context;
use armada_core::{
    config::Config,
    develop::{DevEnvironmentStore, DisableOutcome, EnableRequest},
    paths::dir_name,
    port::STICKY_PORT_RANGE,
};
use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Args)]
pub struct DevelopArgs {
    /// Name of the microservice to develop (default: name of the current directory)
    pub microservice_name: Option<String>,

    /// Assign dynamic ports instead of a sticky port derived from the microservice name
    #[arg(short = 'P', long = "dynamic_ports", visible_alias = "dynamic-ports")]
    pub dynamic_ports: bool,

    /// Volume mounted to /opt/MICROSERVICE_NAME (default: current directory, "" for none)
    #[arg(short = 'v', long, value_parser = clap::builder::OsStringValueParser::new())]
    pub volume: Option<OsString>,

    /// Turn off the development environment
    #[arg(long)]
    pub off: bool,
}

pub fn run(config: &Config, args: DevelopArgs, json: bool) -> anyhow::Result<()> {
    let store = DevEnvironmentStore::for_current_session(config)
        .context("failed to determine shell session")?;

    if args.off {
        return disable(&store, json);
    }

    let cwd = workdir::current_dir()?;
    let name = args.microservice_name.unwrap_or_else(|| dir_name(&cwd));
    let volume = match args.volume {
        Some(v) if v.is_empty() => None,
        Some(v) => Some(workdir::absolutize(PathBuf::from(v), &cwd)),
        None => Some(cwd.clone()),
    };

    let report = store
        .enable(&EnableRequest {
            microservice_name: Some(name.clone()),
            dynamic_ports: args.dynamic_ports,
            volume,
            working_dir: Some(cwd),
        })
        .with_context(|| format!("failed to enable development mode for '{name}'"))?;

    if let Some(mismatch) = &report.name_mismatch {
        eprintln!("WARNING: {mismatch}");
    }

    if json {
        print_json(&report)?;
    } else {
        println!(
            "Development mode on for '{}' ({})",
            report.record.microservice_name, report.port_mode
        );
        if report.port_mode.sticky_port().is_none() && !args.dynamic_ports {
            println!(
                "  No microservice name; ports will be assigned dynamically instead of from {}..{}",
                STICKY_PORT_RANGE.start(),
                STICKY_PORT_RANGE.end()
            );
        }
        if !report.record.volume.is_empty() {
            println!("  Volume: {}", report.record.volume);
        }
    }
    Ok(())
}

fn disable(store: &DevEnvironmentStore, json: bool) -> anyhow::Result<()> {
    let path = store.locate();
    let outcome = store
        .disable()
        .context("failed to turn off development mode")?;

    if json {
        print_json(&serde_json::json!({
            "path": path,
            "outcome": outcome,
        }))?;
    } else {
        match outcome {
            DisableOutcome::Removed => println!("Development mode off"),
            DisableOutcome::AlreadyAbsent => println!("Development mode was not on"),
        }
    }
    Ok(())
}
