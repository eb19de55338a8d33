// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - serve:    run the HTTP API
// - generate: run the pipeline once for a single repository and print the README
//
// Everything else (API keys, models, ...) comes from the environment, see config.rs.
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "readme-crafter",
    version,
    about = "Generate README files for GitHub repositories",
    long_about = "readme-crafter reads a GitHub repository's metadata and asks a language model \
                  to write a README for it, falling back to a template when the model is unavailable."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    ///
    /// Example: readme-crafter serve --port 3001
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate a README for one repository
    ///
    /// Example: readme-crafter generate https://github.com/rust-lang/rust -o README.md
    Generate {
        /// GitHub repository URL (e.g., https://github.com/user/repo)
        repo_url: String,

        /// Write the README to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print the same JSON the HTTP API returns
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from([
            "readme-crafter",
            "generate",
            "https://github.com/acme/widget",
            "-o",
            "README.md",
        ]);

        match cli.command {
            Commands::Generate {
                repo_url,
                output,
                json,
            } => {
                assert_eq!(repo_url, "https://github.com/acme/widget");
                assert_eq!(output, Some(PathBuf::from("README.md")));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["readme-crafter", "serve", "--port", "8080"]);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
