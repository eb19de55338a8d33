// src/main.rs
// =============================================================================
// This is the entry point of readme-crafter.
//
// What happens here:
// 1. Load .env and set up logging
// 2. Parse command-line arguments using clap
// 3. Build the configuration (fails fast if GEMINI_API_KEY is missing)
// 4. Either run the HTTP server or generate a single README
// 5. Exit with proper code (0 = success, 1 = README could not be generated, 2 = error)
// =============================================================================

mod cli;
mod config;
mod error;
mod github;
mod readme;
mod server;
mod service;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;
use service::ReadmeService;

#[actix_web::main]
async fn main() {
    // A missing .env file is fine, real environment variables still apply
    dotenvy::dotenv().ok();

    // Logs go to stderr so `generate` can print the README on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readme_crafter=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut config = Config::from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let service = ReadmeService::from_config(&config)?;
            server::run(&config, service)
                .await
                .context("HTTP server stopped with an error")?;
            Ok(0)
        }
        Commands::Generate {
            repo_url,
            output,
            json,
        } => {
            let service = ReadmeService::from_config(&config)?;
            handle_generate(&service, &repo_url, output.as_deref(), json).await
        }
    }
}

// Handles the 'generate' subcommand
// Parameters:
//   repo_url: GitHub repository URL
//   output: file to write the README to (stdout when None)
//   json: print the HTTP API's JSON instead of raw Markdown
async fn handle_generate(
    service: &ReadmeService,
    repo_url: &str,
    output: Option<&Path>,
    json: bool,
) -> Result<i32> {
    let readme = match service.generate(repo_url).await {
        Ok(readme) => readme,
        Err(e) => {
            if json {
                let body = serde_json::json!({ "success": false, "message": e.to_string() });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                eprintln!("❌ {e}");
            }
            return Ok(1);
        }
    };

    let rendered = if json {
        let body = serde_json::json!({ "success": true, "content": readme.content });
        serde_json::to_string_pretty(&body)?
    } else {
        readme.content
    };

    match output {
        Some(path) => {
            tokio::fs::write(path, format!("{rendered}\n"))
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✅ README for {} written to {}", readme.metadata.name, path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(0)
}
