//! `pincode-finder` entry point: look up Indian PIN codes from a terminal.
//!
//! With a PIN code argument the binary performs one lookup and exits;
//! without one it reads PIN codes from stdin until EOF or `quit`. The
//! `--endpoint`, `--user-agent` and `--timeout-secs` flags override the
//! matching `PINCODE_*` settings.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tokio::io::BufReader;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use pincode_finder::domain::{FormPhase, LookupForm};
use pincode_finder::inbound::cli::{LookupOverrides, LookupSettings, run_interactive, run_once};
use pincode_finder::outbound::postal_pincode::PostalPincodeHttpSource;

const DEFAULT_LOG_FILTER: &str = "warn";

/// `pincode-finder` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pincode-finder",
    about = "Look up the post office, district and state for an Indian PIN code",
    version
)]
struct CliArgs {
    /// PIN code to look up. Starts an interactive prompt when omitted.
    #[arg(value_name = "PIN")]
    pin: Option<String>,
    #[command(flatten)]
    overrides: LookupOverrides,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();

    let args = CliArgs::parse();
    let settings = LookupSettings::load_with(&args.overrides)
        .map_err(|error| eyre!("failed to load lookup settings: {error}"))?;
    let source = PostalPincodeHttpSource::with_options(
        settings.endpoint()?,
        settings.http_options()?,
    )
    .wrap_err("failed to build lookup HTTP client")?;
    let mut form = LookupForm::new(Arc::new(source));

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to create Tokio runtime")?;

    runtime.block_on(run(args, &mut form))
}

async fn run(args: CliArgs, form: &mut LookupForm) -> Result<ExitCode> {
    let mut out = io::stdout().lock();
    match args.pin {
        Some(pin) => {
            let phase = run_once(form, &pin, &mut out).await?;
            Ok(exit_code_for(phase))
        }
        None => {
            run_interactive(form, BufReader::new(tokio::io::stdin()), &mut out).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn exit_code_for(phase: FormPhase) -> ExitCode {
    match phase {
        FormPhase::Error => ExitCode::FAILURE,
        FormPhase::Idle | FormPhase::Submitting | FormPhase::Success => ExitCode::SUCCESS,
    }
}
