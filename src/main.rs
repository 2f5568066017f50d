//! aicommit - CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aicommit::config::{DEFAULT_LANGUAGE, DEFAULT_MODEL};
use aicommit::{Config, GeminiClient, Provider, SystemGit, TerminalPrompter};

/// Generate a commit message for the staged changes using Gemini.
#[derive(Parser, Debug)]
#[command(name = "aicommit")]
#[command(about = "Generate a commit message for the staged changes using Gemini")]
#[command(version)]
struct Cli {
    /// Language the commit message is written in
    #[arg(short, long, env = "AI_COMMIT_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Model provider
    #[arg(short, long, env = "AI_PROVIDER", value_enum, default_value_t = Provider::Gemini)]
    provider: Provider,

    /// Model identifier to call
    #[arg(short, long, env = "MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Credentials are checked before anything touches git or the network.
    let config = match Config::from_env(cli.provider, cli.model, cli.language) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let git = SystemGit::new();
    let model = GeminiClient::from_config(&config);
    let mut prompter = TerminalPrompter::new();
    let mut stdout = io::stdout();

    match aicommit::run(&config, &git, &model, &mut prompter, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
