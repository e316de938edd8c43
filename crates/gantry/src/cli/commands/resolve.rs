//! Resolve command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use gantry_core::config::{credentials_path, load_config_or_default};
use gantry_core::BuildVariant;
use gantry_signing::{resolve, CredentialsSource, ResolvedSigningAssignment, SigningIdentity};

use crate::cli::{output, Cli, OutputFormat};

/// Resolve signing identities for build variants
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Build variant to resolve (default: every configured variant)
    #[arg(long)]
    pub variant: Option<String>,

    /// Path to the credentials property file (overrides config)
    #[arg(long)]
    pub credentials: Option<PathBuf>,
}

impl ResolveCommand {
    /// Execute the resolve command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);

        let creds_path = self
            .credentials
            .clone()
            .unwrap_or_else(|| credentials_path(&config, config_path.as_deref(), &cwd));
        let source = CredentialsSource::at(&creds_path);
        // Single read per invocation; every variant binds from this parse
        let fields = source.as_ref().map(|s| s.read()).transpose()?;

        let variants: Vec<BuildVariant> = match &self.variant {
            Some(name) => vec![name.clone().into()],
            None => config
                .signing
                .variants
                .iter()
                .map(|name| name.clone().into())
                .collect(),
        };

        info!(
            credentials = %creds_path.display(),
            present = source.is_some(),
            count = variants.len(),
            "resolving signing assignments"
        );

        let mut assignments: Vec<ResolvedSigningAssignment> = Vec::new();
        for variant in &variants {
            assignments.push(resolve(
                fields.as_ref(),
                variant,
                SigningIdentity::DebugFallback,
            )?);
        }

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "credentials_source": source.as_ref().map(|s| s.path().display().to_string()),
                    "assignments": assignments,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", style("Signing Assignments").bold());
                    if cli.verbose {
                        println!(
                            "  Config:      {}",
                            style(output::config_source(config_path.as_deref())).dim()
                        );
                    }
                    match &source {
                        Some(s) => println!(
                            "  Credentials: {}",
                            style(s.path().display()).cyan()
                        ),
                        None => println!(
                            "  Credentials: {} (falling back to debug identity)",
                            style("absent").yellow()
                        ),
                    }
                    println!();
                }

                for assignment in &assignments {
                    let identity = if assignment.identity.is_fallback() {
                        style(assignment.identity.to_string()).yellow()
                    } else {
                        style(assignment.identity.to_string()).green()
                    };
                    println!("  {} → {}", style(&assignment.variant).cyan(), identity);
                }
            }
        }

        Ok(())
    }
}
