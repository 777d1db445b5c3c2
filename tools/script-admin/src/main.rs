//! monitor-script: operator CLI for signed synthetic-monitor scripts.
//!
//! Prints the resulting resource state as JSON on stdout; logs go to stderr.

mod cli;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use monitor_script::adapters::rest::ScriptPayload;
use monitor_script::domain::assemble;
use monitor_script::{
    load_config, LocationDeclaration, MonitorScriptApi, MonitorScriptService, RestSyntheticsApi,
    ScriptConfig, ScriptDeclaration, ScriptState,
};

use crate::cli::{Cli, Command, ScriptArgs};

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file {}", path.display()))
}

fn locations(name: Option<String>) -> Vec<LocationDeclaration> {
    name.into_iter().map(LocationDeclaration::new).collect()
}

fn declaration(args: ScriptArgs) -> Result<ScriptDeclaration> {
    Ok(ScriptDeclaration {
        text: read_script(&args.file)?,
        monitor_id: args.monitor_id,
        locations: locations(args.location),
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn sign(file: &Path, location: Option<String>, config: &ScriptConfig) -> Result<()> {
    config.validate_signing()?;
    let text = read_script(file)?;
    let script = assemble(&text, &locations(location), &config.security.signer());
    print_json(&ScriptPayload::from(&script))
}

fn connect(config: &ScriptConfig) -> Result<MonitorScriptService<RestSyntheticsApi>> {
    config.validate_for_production()?;
    let api = RestSyntheticsApi::new(&config.api).context("Failed to build HTTP client")?;
    Ok(MonitorScriptService::from_config(Arc::new(api), &config.security))
}

async fn run(command: Command, config: ScriptConfig) -> Result<()> {
    let state = match command {
        Command::Sign { file, location } => return sign(&file, location, &config),
        Command::Create(args) => connect(&config)?.create(&declaration(args)?).await?,
        Command::Update { script, from } => {
            let current = ScriptState::imported(from.unwrap_or_else(|| script.monitor_id.clone()));
            connect(&config)?.update(&current, &declaration(script)?).await?
        }
        Command::Read { monitor_id } => connect(&config)?.read(&monitor_id).await?,
        Command::Delete { monitor_id } => {
            connect(&config)?
                .delete(&ScriptState::imported(monitor_id))
                .await?
        }
        Command::Import { monitor_id } => connect(&config)?.import(&monitor_id).await?,
    };

    info!(present = state.is_present(), id = %state.id(), "[monitor-script] Done");
    print_json(&state)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    run(cli.command, config).await
}
