//! repofetch binary.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use repofetch_cli::{CliError, Settings, fetch};
use repofetch_git::CloneRequest;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "repofetch",
    version,
    about = "Clone a repository into a fresh temporary directory"
)]
struct Args {
    /// Repository URL (HTTPS, SSH, scp-style or local path).
    url: String,

    /// Branch, tag or commit to check out after cloning.
    #[arg(long, short = 'c')]
    checkout: Option<String>,

    /// Settings file (TOML, YAML or JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parent directory for the temporary directory.
    #[arg(long)]
    temp_parent: Option<PathBuf>,

    /// Extra argument for `git clone`; repeatable.
    #[arg(long = "clone-arg", allow_hyphen_values = true)]
    clone_args: Vec<String>,

    /// Remove the clone once it succeeds.
    #[arg(long, default_value_t = false)]
    no_keep: bool,

    /// Print the result as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the result
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .unwrap_or(2);
            ExitCode::from(code)
        },
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;

    if let Some(parent) = args.temp_parent {
        settings.temp_parent = Some(parent);
    }
    if args.no_keep {
        settings.keep = false;
    }
    settings.extra_clone_args.extend(args.clone_args);

    let mut request = CloneRequest::new(args.url);
    if let Some(checkout) = args.checkout {
        request = request.with_checkout(checkout);
    }

    let outcome = fetch(&settings, request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.path.display());
    }

    Ok(())
}
