//! Check command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use gantry_core::config::{credentials_path, load_config_or_default};
use gantry_signing::CredentialsSource;

use crate::cli::{output, Cli, OutputFormat};

/// Validate the credentials source
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Path to the credentials property file (overrides config)
    #[arg(long)]
    pub credentials: Option<PathBuf>,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);

        let creds_path = self
            .credentials
            .clone()
            .unwrap_or_else(|| credentials_path(&config, config_path.as_deref(), &cwd));

        info!(credentials = %creds_path.display(), "checking credentials source");

        if cli.verbose && cli.format == OutputFormat::Text {
            println!(
                "{}",
                output::key_value("Config", &output::config_source(config_path.as_deref()))
            );
        }

        let Some(source) = CredentialsSource::at(&creds_path) else {
            match cli.format {
                OutputFormat::Json => {
                    let out = serde_json::json!({
                        "path": creds_path.display().to_string(),
                        "state": "absent",
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Text => {
                    output::warning(&format!(
                        "No credentials source at {}; builds will use the debug identity",
                        creds_path.display()
                    ));
                }
            }
            return Ok(());
        };

        // Fails with IncompleteCredentials or SourceUnreadable, which the
        // binary maps to a non-zero exit
        let (store_file, _, key_alias, _) = source.read()?.require_all()?;

        match cli.format {
            OutputFormat::Json => {
                let out = serde_json::json!({
                    "path": creds_path.display().to_string(),
                    "state": "complete",
                    "store_file": store_file,
                    "key_alias": key_alias,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            OutputFormat::Text => {
                output::success(&format!("Credentials complete: {}", creds_path.display()));
                println!("{}", output::key_value("Keystore", &store_file));
                println!("{}", output::key_value("Key alias", &key_alias));
            }
        }

        Ok(())
    }
}
