//! branch-maid binary entry point

mod cli;

use branch_maid::platform::DEFAULT_API_BASE;
use clap::Parser;
use cli::style::Stylize;
use std::path::Path;
use tracing::Level;

/// Delete local git branches whose GitHub pull requests have been merged
#[derive(Parser)]
#[command(name = "branch-maid", version, about)]
struct Cli {
    /// GitHub API base URL
    #[arg(short = 'g', long = "github-api", value_name = "URL", default_value = DEFAULT_API_BASE)]
    github_api: String,

    /// List merged branches instead of deleting them
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// GitHub API token
    #[arg(short, long, value_name = "TOKEN", env = "GITHUB_TOKEN")]
    token: String,

    /// Raise log verbosity (-v per-branch results, -vv raw responses)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stdout)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::run_clean(Path::new("."), &cli.github_api, &cli.token, cli.dry_run).await {
        Ok(outcome) if outcome.had_failures() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            anstream::eprintln!("{} {e}", "error:".warn());
            std::process::exit(1);
        }
    }
}
