//! changelog-gen CLI entry point

mod cli;

use anstream::eprintln;
use changelog_gen::error::Result;
use changelog_gen::types::RepoConfig;
use clap::{ArgAction, Parser};
use cli::style::Stylize;
use cli::{GenerateOptions, run_generate, run_print_config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "changelog-gen")]
#[command(about = "Grouped release changelogs from merged GitHub pull requests")]
#[command(version)]
struct Cli {
    /// Repository owner (user or organization)
    #[arg(long, default_value = "AvaloniaUI")]
    org: String,

    /// Repository name
    #[arg(long, default_value = "Avalonia")]
    repo: String,

    /// GitHub Enterprise host (defaults to github.com)
    #[arg(long)]
    host: Option<String>,

    /// The commitish (SHA, tag etc) of the previous release
    #[arg(long, required_unless_present = "print_config")]
    from: Option<String>,

    /// The commitish (SHA, tag etc) of the new release
    #[arg(long, required_unless_present = "print_config")]
    to: Option<String>,

    /// The auth token (falls back to GITHUB_TOKEN, GH_TOKEN, then `gh auth token`)
    #[arg(long)]
    auth_token: Option<String>,

    /// Taxonomy file (TOML) with group, prefix and ignore rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the changelog to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the effective taxonomy as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "changelog_gen=debug",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    if cli.print_config {
        return run_print_config(cli.config.as_deref());
    }

    run_generate(GenerateOptions {
        repo: RepoConfig {
            owner: cli.org,
            repo: cli.repo,
            host: cli.host,
        },
        from: cli.from.unwrap_or_default(),
        to: cli.to.unwrap_or_default(),
        auth_token: cli.auth_token,
        config: cli.config,
        output: cli.output,
    })
    .await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
