use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use inline_edit::cli::{CliArgs, CliCommand, OutputFormat};
use inline_edit::config::EditableConfig;
use inline_edit::scenario::Scenario;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    inline_edit::tracing::init(args.log_file);

    match args.command {
        CliCommand::Replay {
            path,
            config,
            format,
        } => replay(&path, config.as_deref(), format),
        CliCommand::Config { path } => {
            let config = match path {
                Some(path) => EditableConfig::load_from(&path)?,
                None => EditableConfig::load(),
            };
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
    }
}

fn replay(path: &Path, base_config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario at {}", path.display()))?;

    // Layer the scenario's config over the base config when one is given
    let scenario = match base_config {
        Some(base_path) => {
            let base = EditableConfig::load_from(base_path)?;
            let mut doc: serde_yaml::Value =
                serde_yaml::from_str(&content).context("Failed to parse scenario")?;
            merge_config(&mut doc, &base)?;
            serde_yaml::from_value(doc).context("Invalid scenario")?
        }
        None => Scenario::from_yaml(&content)?,
    };

    let transcript = scenario.run();
    tracing::info!(
        steps = transcript.steps.len(),
        "replayed {}",
        path.display()
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&transcript)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&transcript)?),
    }
    Ok(())
}

fn merge_config(doc: &mut serde_yaml::Value, base: &EditableConfig) -> Result<()> {
    let serde_yaml::Value::Mapping(root) = doc else {
        anyhow::bail!("Scenario must be a mapping");
    };

    let mut merged = match serde_yaml::to_value(base)? {
        serde_yaml::Value::Mapping(map) => map,
        _ => anyhow::bail!("Config did not serialize to a mapping"),
    };
    if let Some(serde_yaml::Value::Mapping(overrides)) = root.get("config") {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    root.insert("config".into(), serde_yaml::Value::Mapping(merged));
    Ok(())
}
