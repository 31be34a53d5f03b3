use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use inline_edit::cli::{CliArgs, Command};
use inline_edit::config::EditableConfig;
use inline_edit::script::{self, Script};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    inline_edit::tracing::init(args.log_file.as_deref());

    match args.command {
        Command::Replay {
            script: script_path,
            config,
            pretty,
        } => replay(&script_path, config.as_deref(), pretty),
        Command::ShowConfig { config } => {
            let config = load_config(config.as_deref());
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> EditableConfig {
    match path {
        Some(path) => EditableConfig::load(path),
        None => EditableConfig::load_default(),
    }
}

fn replay(script_path: &Path, config: Option<&Path>, pretty: bool) -> Result<()> {
    let script = Script::load(script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;
    let base = load_config(config);
    tracing::info!(steps = script.steps.len(), "replaying {}", script_path.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in script::run(&script, &base) {
        let line = if pretty {
            serde_json::to_string_pretty(&entry)?
        } else {
            serde_json::to_string(&entry)?
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
