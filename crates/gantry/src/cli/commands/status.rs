//! Status command

use clap::Args;
use console::style;
use tracing::info;

use gantry_core::config::{credentials_path, load_config_or_default};
use gantry_core::BuildVariant;
use gantry_signing::{resolve, CredentialsSource, SigningIdentity};

use crate::cli::{Cli, OutputFormat};

/// Show project signing status
#[derive(Debug, Args)]
pub struct StatusCommand {}

impl StatusCommand {
    /// Execute the status command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);
        let creds_path = credentials_path(&config, config_path.as_deref(), &cwd);
        let source = CredentialsSource::at(&creds_path);

        info!(config_found = config_path.is_some(), "showing status");

        let variants: Vec<BuildVariant> = config
            .signing
            .variants
            .iter()
            .map(|name| name.clone().into())
            .collect();

        // Status is diagnostic: a broken source is reported, not fatal.
        // The source is read once; every variant binds from that parse.
        let mut rows = Vec::new();
        match source.as_ref().map(|s| s.read()).transpose() {
            Err(err) => {
                let detail = Some(err.to_string());
                for variant in &variants {
                    rows.push((variant.clone(), ("invalid", detail.clone())));
                }
            }
            Ok(fields) => {
                for variant in &variants {
                    let outcome =
                        match resolve(fields.as_ref(), variant, SigningIdentity::DebugFallback) {
                            Ok(assignment) if assignment.identity.is_fallback() => {
                                ("fallback", None)
                            }
                            Ok(_) => ("production", None),
                            Err(err) => ("invalid", Some(err.to_string())),
                        };
                    rows.push((variant.clone(), outcome));
                }
            }
        }

        match cli.format {
            OutputFormat::Json => {
                let out = serde_json::json!({
                    "project": config.name,
                    "config_file": config_path.as_ref().map(|p| p.display().to_string()),
                    "credentials_source": {
                        "path": creds_path.display().to_string(),
                        "present": source.is_some(),
                    },
                    "variants": rows
                        .iter()
                        .map(|(variant, (state, detail))| {
                            serde_json::json!({
                                "variant": variant,
                                "identity": state,
                                "detail": detail,
                            })
                        })
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            OutputFormat::Text => {
                println!("{}", style("Gantry Status").bold());
                println!();

                match &config_path {
                    Some(path) => println!("  Config:      {}", style(path.display()).cyan()),
                    None => println!("  Config:      {}", style("defaults (no file)").dim()),
                }
                if let Some(name) = &config.name {
                    println!("  Project:     {}", name);
                }
                let presence = if source.is_some() {
                    style("present").green()
                } else {
                    style("absent").yellow()
                };
                println!("  Credentials: {} ({})", presence, creds_path.display());
                println!();

                for (variant, (state, detail)) in &rows {
                    let rendered = match *state {
                        "production" => style(state.to_string()).green(),
                        "fallback" => style(state.to_string()).yellow(),
                        _ => style(state.to_string()).red(),
                    };
                    println!("  {} [{}]", style(variant).cyan(), rendered);
                    if let Some(detail) = detail {
                        println!("    {}", style(detail).dim());
                    }
                }

                if cli.verbose && !config.build.properties.is_empty() {
                    println!();
                    println!("{}", style("Toolchain properties (pass-through)").bold());
                    let mut keys: Vec<_> = config.build.properties.keys().collect();
                    keys.sort();
                    for key in keys {
                        println!("  {}: {}", style(key).dim(), config.build.properties[key]);
                    }
                }
            }
        }

        Ok(())
    }
}
